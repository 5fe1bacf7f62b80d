use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    White,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn--primary",
            ButtonVariant::Secondary => "btn--secondary",
            ButtonVariant::White => "btn--white",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] class: &'static str,
    #[props(default = "button")] kind: &'static str,
    id: Option<&'static str>,
    trailing: Option<&'static str>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let classes = format!("btn {} {class}", variant.class());
    rsx! {
        button {
            class: "{classes}",
            id,
            r#type: kind,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
            if let Some(glyph) = trailing {
                span { class: "btn__icon", aria_hidden: "true", "{glyph}" }
            }
        }
    }
}
