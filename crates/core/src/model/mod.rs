mod package;
mod question;
mod site;
mod tag;

pub use package::{Package, PackageError};
pub use question::{Question, QuestionError, QuizOption};
pub use site::{ContactInfo, ContentError, ProcessStep, SiteContent};
pub use tag::{PackageTag, TagError};
