use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Package, PackageError, PackageTag, Question, QuestionError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentError {
    #[error("site content must include at least one quiz question")]
    NoQuestions,

    #[error("question {index}: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },

    #[error("package {index}: {source}")]
    Package {
        index: usize,
        #[source]
        source: PackageError,
    },

    #[error("more than one package is tagged {0}")]
    DuplicatePackage(PackageTag),

    #[error("quiz can recommend {0} but no package carries that tag")]
    MissingPackage(PackageTag),
}

//
// ─── CONTENT TYPES ─────────────────────────────────────────────────────────────
//

/// One entry of the "How It Works" timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub number: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub instagram: String,
    pub hours: String,
    pub service_area: String,
}

/// Everything the page renders that is content rather than layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub packages: Vec<Package>,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub process: Vec<ProcessStep>,
    pub contact: ContactInfo,
    #[serde(default)]
    pub event_types: Vec<String>,
}

impl SiteContent {
    /// Check the cross-field rules a hand-edited content file can break.
    ///
    /// # Errors
    ///
    /// Returns the first `ContentError` found.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.questions.is_empty() {
            return Err(ContentError::NoQuestions);
        }
        for (index, question) in self.questions.iter().enumerate() {
            question
                .validate()
                .map_err(|source| ContentError::Question { index, source })?;
        }

        let mut seen = HashSet::new();
        for (index, package) in self.packages.iter().enumerate() {
            package
                .validate()
                .map_err(|source| ContentError::Package { index, source })?;
            if !seen.insert(package.tag()) {
                return Err(ContentError::DuplicatePackage(package.tag()));
            }
        }

        for tag in PackageTag::ALL {
            if !seen.contains(&tag) && self.questions.iter().any(|question| question.offers(tag)) {
                return Err(ContentError::MissingPackage(tag));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn package(&self, tag: PackageTag) -> Option<&Package> {
        self.packages.iter().find(|package| package.tag() == tag)
    }
}
