use dioxus::document::eval;
use dioxus::prelude::*;

use crate::vm::{QuizIntent, QuizOptionVm, QuizVm, key_intent};

use super::scripts::focus_script;

const MODAL_ID: &str = "quiz-modal";

#[component]
pub fn QuizModal(vm: QuizVm, on_intent: EventHandler<QuizIntent>) -> Element {
    use_effect(move || {
        let _ = eval(&focus_script(MODAL_ID));
    });

    let on_key = move |evt: KeyboardEvent| {
        if let Some(intent) = key_intent(&evt.data.key()) {
            evt.prevent_default();
            on_intent.call(intent);
        }
    };

    let prompt = vm.prompt().unwrap_or_default().to_string();
    let options = vm.options();
    let step_classes: Vec<&'static str> = vm
        .step_bars()
        .into_iter()
        .map(|reached| {
            if reached {
                "quiz-step quiz-step--reached"
            } else {
                "quiz-step"
            }
        })
        .collect();

    rsx! {
        div { class: "quiz-overlay",
            div {
                class: "quiz-modal",
                id: MODAL_ID,
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "quiz-title",
                tabindex: "-1",
                onkeydown: on_key,
                div { class: "quiz-modal__header",
                    h3 { class: "quiz-modal__title", id: "quiz-title", "Let's find your match" }
                    button {
                        class: "quiz-modal__close",
                        id: "quiz-close",
                        r#type: "button",
                        aria_label: "Close quiz",
                        onclick: move |_| on_intent.call(QuizIntent::Close),
                        "✕"
                    }
                }
                div { class: "quiz-steps",
                    for (index, step_class) in step_classes.into_iter().enumerate() {
                        div { key: "{index}", class: step_class }
                    }
                }
                h4 { class: "quiz-modal__prompt", "{prompt}" }
                div { class: "quiz-options",
                    for option in options {
                        OptionButton { key: "{option.tag}", option, on_intent }
                    }
                }
            }
        }
    }
}

#[component]
fn OptionButton(option: QuizOptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let tag = option.tag;
    rsx! {
        button {
            class: "quiz-option",
            id: "quiz-option-{tag}",
            r#type: "button",
            onclick: move |_| on_intent.call(QuizIntent::Answer(tag)),
            span { "{option.text}" }
            span { class: "quiz-option__chevron", aria_hidden: "true", "›" }
        }
    }
}
