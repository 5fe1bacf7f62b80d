use dioxus::prelude::Key;
use luxe_core::model::PackageTag;
use luxe_core::{QuizError, QuizSession};
use services::{QuizService, QuizServiceError, Recommendation};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Open,
    Answer(PackageTag),
    Close,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    Recommended(Recommendation),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub text: String,
    pub tag: PackageTag,
}

/// Quiz modal state: one live session plus the bits the modal renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn prompt(&self) -> Option<&str> {
        self.session.current_question().map(|question| question.prompt())
    }

    #[must_use]
    pub fn options(&self) -> Vec<QuizOptionVm> {
        self.session
            .current_question()
            .map(|question| {
                question
                    .options()
                    .iter()
                    .map(|option| QuizOptionVm {
                        text: option.text().to_string(),
                        tag: option.tag(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// One flag per question; filled up to and including the current step.
    #[must_use]
    pub fn step_bars(&self) -> Vec<bool> {
        let progress = self.session.progress();
        (0..progress.total)
            .map(|index| progress.is_step_reached(index))
            .collect()
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the session is no longer active or the
    /// recommendation cannot be resolved.
    pub fn answer(
        &mut self,
        quiz: &QuizService,
        tag: PackageTag,
    ) -> Result<QuizOutcome, ViewError> {
        let answered = quiz
            .answer(&mut self.session, tag)
            .map_err(|err| {
                tracing::warn!(%err, %tag, "quiz answer failed");
                ViewError::Unknown
            })?;

        Ok(match answered.recommendation {
            Some(recommendation) => QuizOutcome::Recommended(recommendation),
            None => QuizOutcome::Continue,
        })
    }

    /// Abort the session if it is still running.
    pub fn close(&mut self, quiz: &QuizService) {
        if self.session.is_active() {
            let _ = quiz.abort(&mut self.session);
        }
    }
}

/// Keyboard shortcut handled by the open quiz modal.
#[must_use]
pub fn key_intent(key: &Key) -> Option<QuizIntent> {
    match key {
        Key::Escape => Some(QuizIntent::Close),
        _ => None,
    }
}

/// # Errors
///
/// Returns `ViewError::QuizUnavailable` when no questions are configured.
pub fn start_quiz(quiz: &QuizService) -> Result<QuizVm, ViewError> {
    match quiz.start_quiz() {
        Ok(session) => Ok(QuizVm::new(session)),
        Err(QuizServiceError::Quiz(QuizError::InvalidConfiguration)) => {
            Err(ViewError::QuizUnavailable)
        }
        Err(_) => Err(ViewError::Unknown),
    }
}
