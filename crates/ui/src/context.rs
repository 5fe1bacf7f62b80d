use std::sync::Arc;

use luxe_core::Clock;
use luxe_core::model::SiteContent;
use services::QuizService;

pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;
    fn content(&self) -> Arc<SiteContent>;
    fn quiz(&self) -> Arc<QuizService>;
}

#[derive(Clone)]
pub struct AppContext {
    clock: Clock,
    content: Arc<SiteContent>,
    quiz: Arc<QuizService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            clock: app.clock(),
            content: app.content(),
            quiz: app.quiz(),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn content(&self) -> Arc<SiteContent> {
        Arc::clone(&self.content)
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
