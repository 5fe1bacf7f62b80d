use dioxus::prelude::*;

use crate::vm::{NAV_LINKS, NavMenuState, Section, nav_style};

use super::components::{Button, ButtonVariant};

const LOGO_SRC: &str = "luxe-vision-logo.png";

#[component]
pub fn NavBar(scrolled: bool, on_navigate: EventHandler<Section>) -> Element {
    let mut menu = use_signal(NavMenuState::default);
    let mut logo_failed = use_signal(|| false);
    let style = nav_style(scrolled);
    let menu_open = menu().is_open();

    let mut go = move |section: Section| {
        let target = menu.write().navigate(section);
        on_navigate.call(target);
    };
    let cta_variant = if scrolled {
        ButtonVariant::Primary
    } else {
        ButtonVariant::White
    };

    rsx! {
        nav { class: "{style.bar}",
            div { class: "container nav__inner",
                div { class: "nav__logo",
                    if logo_failed() {
                        div { class: "{style.brand}",
                            "LUXE"
                            span { class: "text-gold", "VISION" }
                        }
                    } else {
                        img {
                            class: "nav__logo-img",
                            src: LOGO_SRC,
                            alt: "Luxe Vision",
                            onerror: move |_| logo_failed.set(true),
                        }
                    }
                }

                div { class: "{style.links}",
                    for link in NAV_LINKS {
                        button {
                            key: "{link.label}",
                            class: "nav__link",
                            r#type: "button",
                            onclick: move |_| go(link.section),
                            "{link.label}"
                        }
                    }
                }

                div { class: "nav__cta",
                    Button {
                        variant: cta_variant,
                        onclick: move |_| go(Section::Contact),
                        "Book Consultation"
                    }
                }

                button {
                    class: "nav__toggle",
                    id: "nav-toggle",
                    r#type: "button",
                    aria_label: "Toggle menu",
                    aria_expanded: "{menu_open}",
                    onclick: move |_| menu.write().toggle(),
                    if menu_open { "✕" } else { "☰" }
                }
            }

            if menu_open {
                div { class: "nav__mobile", id: "nav-mobile-menu",
                    for link in NAV_LINKS {
                        button {
                            key: "mobile-{link.label}",
                            class: "nav__mobile-link",
                            r#type: "button",
                            onclick: move |_| go(link.section),
                            "{link.label}"
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        class: "btn--block",
                        onclick: move |_| go(Section::Contact),
                        "Book Now"
                    }
                }
            }
        }
    }
}
