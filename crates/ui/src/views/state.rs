#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    QuizUnavailable,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::QuizUnavailable => "The package quiz is not available right now.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}
