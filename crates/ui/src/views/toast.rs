use dioxus::prelude::*;

#[component]
pub fn Toast(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { class: "toast", role: "status", aria_live: "polite",
            span { class: "toast__message", "{message}" }
            button {
                class: "toast__dismiss",
                r#type: "button",
                aria_label: "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                "✕"
            }
        }
    }
}
