use std::time::Duration;

use dioxus::document::eval;
use dioxus::core::Task;
use dioxus::prelude::*;

use luxe_core::model::PackageTag;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{
    QuizIntent, QuizOutcome, QuizVm, Section, copyright_line, is_scrolled, map_package_cards,
    package_interest_options, start_quiz,
};

use super::about::AboutSection;
use super::contact::ContactSection;
use super::footer::Footer;
use super::hero::Hero;
use super::nav::NavBar;
use super::packages::PackagesSection;
use super::process::ProcessSection;
use super::quiz::QuizModal;
use super::scripts::{SCROLL_LISTENER_SCRIPT, scroll_into_view_script};
use super::toast::Toast;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Pause between scrolling to the packages and showing the recommendation.
const RECOMMENDATION_DELAY: Duration = Duration::from_millis(500);

fn scroll_to(section: Section) {
    let _ = eval(&scroll_into_view_script(section.id()));
}

fn cancel_pending(task: &mut Signal<Option<Task>>) {
    if let Some(pending) = task.take() {
        pending.cancel();
    }
}

#[component]
pub fn LandingView() -> Element {
    let ctx = use_context::<AppContext>();
    let content = ctx.content();
    let quiz = ctx.quiz();

    let quiz_vm = use_signal(|| None::<QuizVm>);
    let quiz_error = use_signal(|| None::<ViewError>);
    let recommended = use_signal(|| None::<PackageTag>);
    let toast = use_signal(|| None::<String>);
    let toast_task = use_signal(|| None::<Task>);
    let scrolled = use_signal(|| false);

    use_future(move || async move {
        let mut scrolled = scrolled;
        let mut listener = eval(SCROLL_LISTENER_SCRIPT);
        while let Ok(offset) = listener.recv::<f64>().await {
            let next = is_scrolled(offset);
            if scrolled() != next {
                scrolled.set(next);
            }
        }
    });

    let navigate = use_callback(move |section: Section| scroll_to(section));

    let dispatch_quiz = use_callback(move |intent: QuizIntent| {
        let mut quiz_vm = quiz_vm;
        let mut quiz_error = quiz_error;
        let mut recommended = recommended;
        let mut toast = toast;
        let mut toast_task = toast_task;

        match intent {
            QuizIntent::Open => match start_quiz(&quiz) {
                Ok(vm) => {
                    // A notice still waiting from the previous run must not land on this one.
                    cancel_pending(&mut toast_task);
                    quiz_error.set(None);
                    toast.set(None);
                    quiz_vm.set(Some(vm));
                }
                Err(err) => {
                    tracing::warn!(?err, "quiz could not be opened");
                    quiz_error.set(Some(err));
                }
            },
            QuizIntent::Close => {
                let taken = quiz_vm.write().take();
                if let Some(mut vm) = taken {
                    vm.close(&quiz);
                }
            }
            QuizIntent::Answer(tag) => {
                let taken = quiz_vm.write().take();
                let Some(mut vm) = taken else {
                    return;
                };
                match vm.answer(&quiz, tag) {
                    Ok(QuizOutcome::Continue) => quiz_vm.set(Some(vm)),
                    Ok(QuizOutcome::Recommended(recommendation)) => {
                        recommended.set(Some(recommendation.tag));
                        scroll_to(Section::Packages);
                        cancel_pending(&mut toast_task);
                        let task = spawn(async move {
                            tokio::time::sleep(RECOMMENDATION_DELAY).await;
                            toast.set(Some(recommendation.message()));
                            toast_task.set(None);
                        });
                        toast_task.set(Some(task));
                    }
                    Err(err) => quiz_error.set(Some(err)),
                }
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<LandingTestHandles>() {
                handles.register(dispatch_quiz, navigate);
            }
        }
    }

    let cards = map_package_cards(&content.packages, recommended());
    let package_options = package_interest_options(&content.packages);
    let copyright = copyright_line(&ctx.clock());
    let vm_snapshot = quiz_vm.read().clone();
    let toast_message = toast.read().clone();
    let error = *quiz_error.read();

    rsx! {
        div { class: "landing",
            NavBar { scrolled: scrolled(), on_navigate: navigate }
            Hero { on_navigate: navigate, on_quiz: dispatch_quiz }

            if let Some(err) = error {
                div { class: "notice notice--error", role: "alert",
                    span { "{err.message()}" }
                    button {
                        class: "notice__dismiss",
                        r#type: "button",
                        onclick: move |_| {
                            let mut quiz_error = quiz_error;
                            quiz_error.set(None);
                        },
                        "Dismiss"
                    }
                }
            }

            if let Some(vm) = vm_snapshot {
                QuizModal { vm, on_intent: dispatch_quiz }
            }

            AboutSection {}
            PackagesSection { cards, on_navigate: navigate }
            ProcessSection { steps: content.process.clone() }
            ContactSection {
                contact: content.contact.clone(),
                event_types: content.event_types.clone(),
                package_options,
            }
            Footer { copyright }

            if let Some(message) = toast_message {
                Toast {
                    message,
                    on_dismiss: move |()| {
                        let mut toast = toast;
                        toast.set(None);
                    },
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LandingTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    navigate: Rc<RefCell<Option<Callback<Section>>>>,
}

#[cfg(test)]
impl LandingTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, navigate: Callback<Section>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.navigate.borrow_mut() = Some(navigate);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn navigate(&self) -> Callback<Section> {
        (*self.navigate.borrow()).expect("navigate registered")
    }
}
