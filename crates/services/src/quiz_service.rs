use std::sync::Arc;

use luxe_core::model::{Package, PackageTag, Question, SiteContent};
use luxe_core::{QuizResult, QuizSession};

use crate::error::QuizServiceError;

/// The package a completed quiz points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub tag: PackageTag,
    pub package_title: String,
}

impl Recommendation {
    /// Notice shown once the page has scrolled to the packages.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Based on your answers, we recommend the {} package!",
            self.tag.upper()
        )
    }
}

/// Result of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswerResult {
    pub result: QuizResult,
    pub recommendation: Option<Recommendation>,
}

impl QuizAnswerResult {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.result, QuizResult::Complete { .. })
    }
}

/// Starts quiz sessions over the configured questions and resolves
/// completed sessions to packages.
#[derive(Debug, Clone)]
pub struct QuizService {
    questions: Arc<[Question]>,
    packages: Arc<[Package]>,
}

impl QuizService {
    #[must_use]
    pub fn new(questions: impl Into<Arc<[Question]>>, packages: impl Into<Arc<[Package]>>) -> Self {
        Self {
            questions: questions.into(),
            packages: packages.into(),
        }
    }

    #[must_use]
    pub fn from_content(content: &SiteContent) -> Self {
        Self::new(content.questions.clone(), content.packages.clone())
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Open a new session on the first question.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if no questions are configured.
    pub fn start_quiz(&self) -> Result<QuizSession, QuizServiceError> {
        let session = QuizSession::start(Arc::clone(&self.questions))?;
        tracing::debug!(questions = session.total_questions(), "quiz started");
        Ok(session)
    }

    /// Answer the current question of `session`.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if the session is already terminal and
    /// `QuizServiceError::MissingPackage` if the recommended tag has no package.
    pub fn answer(
        &self,
        session: &mut QuizSession,
        tag: PackageTag,
    ) -> Result<QuizAnswerResult, QuizServiceError> {
        let result = session.answer(tag).inspect_err(|err| {
            tracing::warn!(%err, "quiz answer rejected");
        })?;

        let recommendation = match result {
            QuizResult::Continue { next_index } => {
                tracing::debug!(%tag, next_index, "quiz advanced");
                None
            }
            QuizResult::Complete { tag } => {
                let package = self
                    .package(tag)
                    .ok_or(QuizServiceError::MissingPackage(tag))?;
                tracing::info!(%tag, package = package.title(), "quiz completed");
                Some(Recommendation {
                    tag,
                    package_title: package.title().to_string(),
                })
            }
        };

        Ok(QuizAnswerResult {
            result,
            recommendation,
        })
    }

    /// Abandon `session` (closing the quiz).
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if the session is already terminal.
    pub fn abort(&self, session: &mut QuizSession) -> Result<(), QuizServiceError> {
        session.abort()?;
        tracing::debug!(answered = session.answers().len(), "quiz aborted");
        Ok(())
    }

    #[must_use]
    pub fn package(&self, tag: PackageTag) -> Option<&Package> {
        self.packages.iter().find(|package| package.tag() == tag)
    }
}
