use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::PackageTag;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question must offer at least one option")]
    NoOptions,

    #[error("option text cannot be empty")]
    EmptyOptionText,
}

/// A selectable answer; picking it emits its tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    text: String,
    tag: PackageTag,
}

impl QuizOption {
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyOptionText` if the text is blank.
    pub fn new(text: impl Into<String>, tag: PackageTag) -> Result<Self, QuestionError> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(QuestionError::EmptyOptionText);
        }
        Ok(Self { text, tag })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn tag(&self) -> PackageTag {
        self.tag
    }
}

/// One step of the quiz. Its position is implied by its index in the question list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    prompt: String,
    options: Vec<QuizOption>,
}

impl Question {
    /// Create a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` for a blank prompt and
    /// `QuestionError::NoOptions` when `options` is empty.
    pub fn new(prompt: impl Into<String>, options: Vec<QuizOption>) -> Result<Self, QuestionError> {
        let question = Self {
            prompt: prompt.into().trim().to_string(),
            options,
        };
        question.validate()?;
        Ok(question)
    }

    /// Re-check a question that did not come through `new` (e.g. deserialized).
    ///
    /// # Errors
    ///
    /// Same as [`Question::new`]; also rejects blank option text.
    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if self.options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if self.options.iter().any(|option| option.text.trim().is_empty()) {
            return Err(QuestionError::EmptyOptionText);
        }
        Ok(())
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[QuizOption] {
        &self.options
    }

    #[must_use]
    pub fn offers(&self, tag: PackageTag) -> bool {
        self.options.iter().any(|option| option.tag == tag)
    }
}
