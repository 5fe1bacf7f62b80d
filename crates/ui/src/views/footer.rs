use dioxus::prelude::*;

#[component]
pub fn Footer(copyright: String) -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "container footer__inner",
                div { class: "footer__brand",
                    h2 { "LUXE" span { class: "text-gold", "VISION" } }
                    p { "Turning your vision into reality, one detail at a time." }
                }
                div { class: "footer__links",
                    a { href: "#", "Instagram" }
                    a { href: "#", "Email" }
                    a { href: "#", "WhatsApp" }
                }
            }
            div { class: "container footer__legal", "{copyright}" }
        }
    }
}
