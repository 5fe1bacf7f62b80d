#![forbid(unsafe_code)]

pub mod app_services;
pub mod content_service;
pub mod error;
pub mod quiz_service;

pub use luxe_core::Clock;

pub use app_services::AppServices;
pub use content_service::{ContentService, ContentSource, builtin_content, parse_content};
pub use error::{AppServicesError, ContentServiceError, QuizServiceError};
pub use quiz_service::{QuizAnswerResult, QuizService, Recommendation};
