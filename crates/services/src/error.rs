//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use luxe_core::QuizError;
use luxe_core::model::{ContentError, PackageTag};

/// Errors emitted while loading site content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentServiceError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ContentError),
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error("no package is configured for {0}")]
    MissingPackage(PackageTag),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Content(#[from] ContentServiceError),
}
