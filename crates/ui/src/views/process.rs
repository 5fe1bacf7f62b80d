use dioxus::prelude::*;

use luxe_core::model::ProcessStep;

#[component]
pub fn ProcessSection(steps: Vec<ProcessStep>) -> Element {
    rsx! {
        section { class: "section section--dark", id: "process",
            div { class: "container",
                div { class: "process__header",
                    h2 { class: "section__title section__title--light", "How It Works" }
                    p { class: "process__lead",
                        "From the first hello to the final timeline, we keep it organized and stress-free."
                    }
                }
                ol { class: "process",
                    for step in steps {
                        li { key: "{step.number}", class: "process__step",
                            div { class: "process__number", "{step.number}" }
                            h3 { class: "process__title", "{step.title}" }
                            p { class: "process__description", "{step.description}" }
                        }
                    }
                }
            }
        }
    }
}
