use dioxus::prelude::*;

use luxe_core::model::ContactInfo;

use super::components::{Button, ButtonVariant};

#[component]
pub fn ContactSection(
    contact: ContactInfo,
    event_types: Vec<String>,
    package_options: Vec<String>,
) -> Element {
    rsx! {
        section { class: "section section--white", id: "contact",
            div { class: "container",
                div { class: "contact",
                    div { class: "contact__info",
                        div {
                            h3 { class: "contact__title", "Let's start planning" }
                            p { class: "contact__lead",
                                "Fill out the form and tell us a bit about your event. We'll get back to you within 24 hours."
                            }
                            ul { class: "contact__details",
                                li { span { class: "contact__icon", "✉" } span { "{contact.email}" } }
                                li { span { class: "contact__icon", "◎" } span { "{contact.instagram}" } }
                                li { span { class: "contact__icon", "📅" } span { "{contact.hours}" } }
                            }
                        }
                        div { class: "contact__footer",
                            div { class: "contact__rule" }
                            p { "{contact.service_area}" }
                        }
                    }

                    // Inquiries are not sent anywhere; submitting only stays on the page.
                    form {
                        class: "contact__form",
                        onsubmit: move |evt: FormEvent| evt.prevent_default(),
                        div { class: "form__row",
                            label { class: "form__field",
                                span { class: "form__label", "Name" }
                                input { r#type: "text", name: "name", placeholder: "Jane Doe" }
                            }
                            label { class: "form__field",
                                span { class: "form__label", "Event Date" }
                                input { r#type: "date", name: "event_date" }
                            }
                        }
                        label { class: "form__field",
                            span { class: "form__label", "Event Type" }
                            select { name: "event_type",
                                for event_type in event_types {
                                    option { key: "{event_type}", "{event_type}" }
                                }
                            }
                        }
                        label { class: "form__field",
                            span { class: "form__label", "Interested Package" }
                            select { name: "package",
                                for package in package_options {
                                    option { key: "{package}", "{package}" }
                                }
                            }
                        }
                        label { class: "form__field",
                            span { class: "form__label", "Your Vision" }
                            textarea {
                                name: "vision",
                                placeholder: "Tell us about your theme, colors, or vibes...",
                            }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            kind: "submit",
                            class: "btn--block",
                            "Send Inquiry"
                        }
                    }
                }
            }
        }
    }
}
