use dioxus::prelude::*;

use crate::vm::{PackageCardVm, Section};

use super::components::{Button, ButtonVariant};

#[component]
pub fn PackagesSection(cards: Vec<PackageCardVm>, on_navigate: EventHandler<Section>) -> Element {
    rsx! {
        section { class: "section section--blush", id: "packages",
            div { class: "container",
                div { class: "section__intro",
                    h2 { class: "section__title", "Curated Packages" }
                    p {
                        "Three levels of service to fit your budget and planning style. Every package is customizable."
                    }
                }
                div { class: "packages",
                    for card in cards {
                        PackageCard { key: "{card.tag}", card, on_navigate }
                    }
                }
                p { class: "packages__note",
                    "* Prices vary depending on location and market. 50% deposit required to secure booking."
                }
            }
        }
    }
}

#[component]
fn PackageCard(card: PackageCardVm, on_navigate: EventHandler<Section>) -> Element {
    let variant = if card.highlighted {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Secondary
    };

    rsx! {
        div { class: "{card.card_class()}", id: "package-{card.tag}",
            if card.highlighted {
                div { class: "package-card__badge", "Most Popular" }
            }
            if card.recommended {
                div { class: "package-card__match", "Your Match" }
            }
            div { class: "package-card__header",
                h3 { class: "package-card__title", "{card.title}" }
                p { class: "package-card__description", "{card.description}" }
                div { class: "package-card__price",
                    span { class: "package-card__amount", "{card.price}" }
                    if let Some(suffix) = card.price_suffix {
                        span { class: "package-card__suffix", "{suffix}" }
                    }
                }
            }
            ul { class: "package-card__features",
                for feature in card.features.iter() {
                    li { key: "{feature}", class: "package-card__feature",
                        span { class: "package-card__check", aria_hidden: "true", "✓" }
                        span { "{feature}" }
                    }
                }
            }
            Button {
                variant,
                class: "btn--block",
                onclick: move |_| on_navigate.call(Section::Contact),
                "Choose Plan"
            }
        }
    }
}
