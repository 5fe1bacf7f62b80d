use dioxus::prelude::*;

const ABOUT_IMAGE_SRC: &str = "https://images.unsplash.com/photo-1511795409834-ef04bbd61622?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80";

#[component]
pub fn AboutSection() -> Element {
    rsx! {
        section { class: "section section--white", id: "about",
            div { class: "container about",
                div { class: "about__media",
                    div { class: "about__accent" }
                    img { class: "about__image", src: ABOUT_IMAGE_SRC, alt: "Planning" }
                }
                div { class: "about__copy",
                    h3 { class: "eyebrow", "Who We Are" }
                    h2 { class: "section__title", "We Are Your Event Middleman" }
                    p {
                        "Luxe Vision is an event consultation and coordinating service covering everything from birthdays and weddings to corporate showers."
                    }
                    p {
                        "We bridge the gap between your Pinterest board and the real world. Whether you need help sourcing vendors, creating mood boards, or designing digital invites, we've got you."
                    }
                    div { class: "about__tiles",
                        FeatureTile {
                            glyph: "👥",
                            title: "Expert Vendor Sourcing",
                            body: "We find the best teams for you.",
                        }
                        FeatureTile {
                            glyph: "📄",
                            title: "Vision Blueprints",
                            body: "Detailed PDFs & moodboards.",
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FeatureTile(glyph: &'static str, title: &'static str, body: &'static str) -> Element {
    rsx! {
        div { class: "tile",
            span { class: "tile__icon", aria_hidden: "true", "{glyph}" }
            h4 { class: "tile__title", "{title}" }
            p { class: "tile__body", "{body}" }
        }
    }
}
