use std::sync::Arc;

use luxe_core::model::SiteContent;

use crate::Clock;
use crate::content_service::{ContentService, ContentSource};
use crate::error::AppServicesError;
use crate::quiz_service::QuizService;

/// Assembles app-facing services from a content source.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    content: Arc<SiteContent>,
    quiz: Arc<QuizService>,
}

impl AppServices {
    /// Load content from `source` and build the services over it.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the content cannot be loaded or is invalid.
    pub fn new(clock: Clock, source: ContentSource) -> Result<Self, AppServicesError> {
        let content = ContentService::new(source).load()?;
        Ok(Self::from_content(clock, content))
    }

    #[must_use]
    pub fn from_content(clock: Clock, content: SiteContent) -> Self {
        let quiz = Arc::new(QuizService::from_content(&content));
        Self {
            clock,
            content: Arc::new(content),
            quiz,
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
