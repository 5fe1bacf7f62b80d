use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use luxe_core::model::SiteContent;
use luxe_core::time::fixed_clock;
use services::{AppServices, Clock, QuizService, builtin_content};

use crate::context::{UiApp, build_app_context};
use crate::views::LandingView;
use crate::views::landing::LandingTestHandles;

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn clock(&self) -> Clock {
        self.services.clock()
    }

    fn content(&self) -> Arc<SiteContent> {
        self.services.content()
    }

    fn quiz(&self) -> Arc<QuizService> {
        self.services.quiz()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: LandingTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let handles = props.handles.clone();
    use_context_provider(|| handles);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { LandingView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: LandingTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Runs a handler the way an event would, then flushes the resulting renders.
    pub fn act(&mut self, f: impl FnOnce(&LandingTestHandles)) {
        let handles = self.handles.clone();
        self.dom.in_runtime(|| f(&handles));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness() -> ViewHarness {
    let content = builtin_content().expect("builtin content");
    setup_view_harness_with_content(content)
}

pub fn setup_view_harness_with_content(content: SiteContent) -> ViewHarness {
    let services = AppServices::from_content(fixed_clock(), content);
    let app = Arc::new(TestApp { services });
    let handles = LandingTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
