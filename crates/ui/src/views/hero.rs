use dioxus::prelude::*;

use crate::vm::{QuizIntent, Section};

use super::components::{Button, ButtonVariant};

const HERO_IMAGE_SRC: &str = "https://images.unsplash.com/photo-1522413452208-996ff3f3e740?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80";

#[component]
pub fn Hero(on_navigate: EventHandler<Section>, on_quiz: EventHandler<QuizIntent>) -> Element {
    let mut image_failed = use_signal(|| false);

    rsx! {
        header { class: "hero",
            div { class: "hero__backdrop",
                if image_failed() {
                    div { class: "hero__fallback" }
                } else {
                    img {
                        class: "hero__image",
                        src: HERO_IMAGE_SRC,
                        alt: "Event Setup with Cherry Blossoms",
                        onerror: move |_| image_failed.set(true),
                    }
                }
                div { class: "hero__overlay" }
            }

            div { class: "container hero__content",
                h2 { class: "hero__eyebrow", "Event Consultation & Coordinating" }
                h1 { class: "hero__title",
                    "Your Vision."
                    br {}
                    "Our Reality."
                }
                p { class: "hero__lead",
                    "Think of us as your middleman. You tell us your vision, and we source the vendors, design the details, and coordinate the chaos."
                }
                div { class: "hero__actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| on_navigate.call(Section::Packages),
                        "View Packages"
                    }
                    Button {
                        variant: ButtonVariant::White,
                        id: "open-quiz",
                        trailing: "✦",
                        onclick: move |_| on_quiz.call(QuizIntent::Open),
                        "Find Your Package"
                    }
                }
            }
        }
    }
}
