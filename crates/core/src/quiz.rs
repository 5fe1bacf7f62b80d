//! Package recommendation quiz.
//!
//! A session walks linearly through a fixed question list. Every answer but the
//! last only advances the session; the tag of the final answer becomes the
//! recommendation.

use std::sync::Arc;

use thiserror::Error;

use crate::model::{PackageTag, Question};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz requires at least one question")]
    InvalidConfiguration,

    #[error("quiz session is {state:?}; no further transitions are allowed")]
    InvalidState { state: QuizState },
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Position of a session in its state machine.
///
/// `Active(0)` is initial; `Complete` and `Aborted` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    Active { index: usize },
    Complete { tag: PackageTag },
    Aborted,
}

impl QuizState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, QuizState::Active { .. })
    }
}

/// Outcome of answering the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizResult {
    Continue { next_index: usize },
    Complete { tag: PackageTag },
}

/// Step indicator data for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    /// Index of the question on screen; stays on the last index once terminal.
    pub current: usize,
    pub is_terminal: bool,
}

impl QuizProgress {
    /// Whether the step bar at `index` should be filled.
    #[must_use]
    pub fn is_step_reached(&self, index: usize) -> bool {
        index <= self.current
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One user's pass through the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Arc<[Question]>,
    state: QuizState,
    answers: Vec<PackageTag>,
}

impl QuizSession {
    /// Open a session positioned on the first question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidConfiguration` if `questions` is empty.
    pub fn start(questions: impl Into<Arc<[Question]>>) -> Result<Self, QuizError> {
        let questions = questions.into();
        if questions.is_empty() {
            return Err(QuizError::InvalidConfiguration);
        }

        Ok(Self {
            questions,
            state: QuizState::Active { index: 0 },
            answers: Vec::new(),
        })
    }

    /// Record the tag of the option picked for the current question and advance.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` if the session is complete or aborted.
    pub fn answer(&mut self, tag: PackageTag) -> Result<QuizResult, QuizError> {
        let QuizState::Active { index } = self.state else {
            return Err(QuizError::InvalidState { state: self.state });
        };

        self.answers.push(tag);

        let next_index = index + 1;
        if next_index < self.questions.len() {
            self.state = QuizState::Active { index: next_index };
            Ok(QuizResult::Continue { next_index })
        } else {
            self.state = QuizState::Complete { tag };
            Ok(QuizResult::Complete { tag })
        }
    }

    /// Abandon an active session.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` if the session is already terminal,
    /// including a second abort.
    pub fn abort(&mut self) -> Result<(), QuizError> {
        if self.state.is_terminal() {
            return Err(QuizError::InvalidState { state: self.state });
        }
        self.state = QuizState::Aborted;
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.state.is_terminal()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Index of the active question, or `None` once terminal.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            QuizState::Active { index } => Some(index),
            QuizState::Complete { .. } | QuizState::Aborted => None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|index| self.questions.get(index))
    }

    /// Tags given so far, in answer order.
    #[must_use]
    pub fn answers(&self) -> &[PackageTag] {
        &self.answers
    }

    #[must_use]
    pub fn recommended_tag(&self) -> Option<PackageTag> {
        match self.state {
            QuizState::Complete { tag } => Some(tag),
            QuizState::Active { .. } | QuizState::Aborted => None,
        }
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let last = self.questions.len().saturating_sub(1);
        QuizProgress {
            total: self.questions.len(),
            answered: self.answers.len(),
            current: self.current_index().unwrap_or(last).min(last),
            is_terminal: self.state.is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuizOption;

    fn tiered_question(prompt: &str) -> Question {
        let options = PackageTag::ALL
            .iter()
            .map(|tag| QuizOption::new(format!("{prompt} {tag}"), *tag).unwrap())
            .collect();
        Question::new(prompt, options).unwrap()
    }

    fn questions(count: usize) -> Vec<Question> {
        (1..=count)
            .map(|n| tiered_question(&format!("Q{n}")))
            .collect()
    }

    #[test]
    fn empty_question_list_is_invalid_configuration() {
        let err = QuizSession::start(Vec::<Question>::new()).unwrap_err();
        assert_eq!(err, QuizError::InvalidConfiguration);
    }

    #[test]
    fn session_starts_active_on_first_question() {
        let session = QuizSession::start(questions(2)).unwrap();
        assert_eq!(session.state(), QuizState::Active { index: 0 });
        assert_eq!(session.current_question().unwrap().prompt(), "Q1");
        assert!(session.answers().is_empty());
        assert_eq!(session.recommended_tag(), None);
    }

    #[test]
    fn last_answer_decides_recommendation() {
        let mut session = QuizSession::start(questions(2)).unwrap();

        let first = session.answer(PackageTag::Signature).unwrap();
        assert_eq!(first, QuizResult::Continue { next_index: 1 });
        assert_eq!(session.state(), QuizState::Active { index: 1 });

        let second = session.answer(PackageTag::Elite).unwrap();
        assert_eq!(second, QuizResult::Complete { tag: PackageTag::Elite });
        assert_eq!(session.state(), QuizState::Complete { tag: PackageTag::Elite });
        assert_eq!(session.recommended_tag(), Some(PackageTag::Elite));
        assert_eq!(session.answers(), &[PackageTag::Signature, PackageTag::Elite]);
    }

    #[test]
    fn single_question_completes_on_first_answer() {
        let mut session = QuizSession::start(questions(1)).unwrap();
        let result = session.answer(PackageTag::Essentials).unwrap();
        assert_eq!(result, QuizResult::Complete { tag: PackageTag::Essentials });
        assert!(session.current_question().is_none());
    }

    #[test]
    fn n_answers_complete_an_n_question_quiz() {
        for len in 1..=6 {
            for last in PackageTag::ALL {
                let mut session = QuizSession::start(questions(len)).unwrap();
                for step in 0..len - 1 {
                    let tag = PackageTag::ALL[step % PackageTag::ALL.len()];
                    assert_eq!(
                        session.answer(tag).unwrap(),
                        QuizResult::Continue { next_index: step + 1 }
                    );
                }
                assert_eq!(
                    session.answer(last).unwrap(),
                    QuizResult::Complete { tag: last }
                );
                assert_eq!(session.answers().len(), len);
            }
        }
    }

    #[test]
    fn answer_after_complete_is_invalid_state() {
        let mut session = QuizSession::start(questions(1)).unwrap();
        session.answer(PackageTag::Signature).unwrap();

        let err = session.answer(PackageTag::Elite).unwrap_err();
        assert_eq!(
            err,
            QuizError::InvalidState {
                state: QuizState::Complete { tag: PackageTag::Signature }
            }
        );
        assert_eq!(session.recommended_tag(), Some(PackageTag::Signature));
    }

    #[test]
    fn answer_after_abort_is_invalid_state() {
        let mut session = QuizSession::start(questions(2)).unwrap();
        session.abort().unwrap();

        assert_eq!(session.state(), QuizState::Aborted);
        assert_eq!(
            session.answer(PackageTag::Elite).unwrap_err(),
            QuizError::InvalidState { state: QuizState::Aborted }
        );
        assert!(session.answers().is_empty());
    }

    #[test]
    fn abort_twice_is_invalid_state() {
        let mut session = QuizSession::start(questions(2)).unwrap();
        session.abort().unwrap();
        for _ in 0..3 {
            assert_eq!(
                session.abort().unwrap_err(),
                QuizError::InvalidState { state: QuizState::Aborted }
            );
        }
    }

    #[test]
    fn abort_after_complete_is_invalid_state() {
        let mut session = QuizSession::start(questions(1)).unwrap();
        session.answer(PackageTag::Elite).unwrap();
        assert!(session.abort().is_err());
        assert_eq!(session.state(), QuizState::Complete { tag: PackageTag::Elite });
    }

    #[test]
    fn progress_tracks_steps() {
        let mut session = QuizSession::start(questions(3)).unwrap();
        let progress = session.progress();
        assert_eq!(progress.total, 3);
        assert_eq!(progress.current, 0);
        assert!(progress.is_step_reached(0));
        assert!(!progress.is_step_reached(1));

        session.answer(PackageTag::Elite).unwrap();
        session.answer(PackageTag::Elite).unwrap();
        let progress = session.progress();
        assert_eq!(progress.answered, 2);
        assert!(progress.is_step_reached(2));

        session.answer(PackageTag::Elite).unwrap();
        let progress = session.progress();
        assert!(progress.is_terminal);
        assert_eq!(progress.current, 2);
    }

    #[test]
    fn sessions_share_question_list() {
        let shared: Arc<[Question]> = questions(2).into();
        let mut first = QuizSession::start(Arc::clone(&shared)).unwrap();
        let second = QuizSession::start(Arc::clone(&shared)).unwrap();

        first.answer(PackageTag::Elite).unwrap();
        assert_eq!(second.state(), QuizState::Active { index: 0 });
        assert_eq!(first.questions(), second.questions());
    }
}
