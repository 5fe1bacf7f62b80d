#![forbid(unsafe_code)]

pub mod model;
pub mod quiz;
pub mod time;

pub use quiz::{QuizError, QuizProgress, QuizResult, QuizSession, QuizState};
pub use time::Clock;
