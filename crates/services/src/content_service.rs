use std::fmt;
use std::path::{Path, PathBuf};

use luxe_core::model::SiteContent;

use crate::error::ContentServiceError;

const BUILTIN_CONTENT: &str = include_str!("../content/luxe_vision.json");

/// Where the page copy comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContentSource {
    /// Copy compiled into the binary.
    #[default]
    Builtin,
    /// A JSON file with the same shape as the built-in copy.
    File(PathBuf),
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSource::Builtin => f.write_str("built-in content"),
            ContentSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loads and validates `SiteContent`.
#[derive(Debug, Clone, Default)]
pub struct ContentService {
    source: ContentSource,
}

impl ContentService {
    #[must_use]
    pub fn new(source: ContentSource) -> Self {
        Self { source }
    }

    /// Read the configured source.
    ///
    /// # Errors
    ///
    /// Returns `ContentServiceError` if the file cannot be read, parsed, or fails validation.
    pub fn load(&self) -> Result<SiteContent, ContentServiceError> {
        let content = match &self.source {
            ContentSource::Builtin => builtin_content()?,
            ContentSource::File(path) => load_from_path(path)?,
        };
        tracing::info!(
            source = %self.source,
            packages = content.packages.len(),
            questions = content.questions.len(),
            "site content loaded"
        );
        Ok(content)
    }
}

/// The Luxe Vision copy shipped with the app.
///
/// # Errors
///
/// Returns `ContentServiceError` if the embedded JSON is malformed.
pub fn builtin_content() -> Result<SiteContent, ContentServiceError> {
    parse_content(BUILTIN_CONTENT)
}

/// # Errors
///
/// Returns `ContentServiceError::Io` if the file cannot be read, otherwise see [`parse_content`].
pub fn load_from_path(path: &Path) -> Result<SiteContent, ContentServiceError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContentServiceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_content(&raw)
}

/// Parse and validate a JSON content document.
///
/// # Errors
///
/// Returns `ContentServiceError::Parse` for malformed JSON and
/// `ContentServiceError::Invalid` when validation fails.
pub fn parse_content(raw: &str) -> Result<SiteContent, ContentServiceError> {
    let content: SiteContent = serde_json::from_str(raw)?;
    content.validate()?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxe_core::model::{ContentError, PackageTag};

    #[test]
    fn builtin_content_matches_page_copy() {
        let content = builtin_content().unwrap();

        let titles: Vec<_> = content.packages.iter().map(|p| p.title()).collect();
        assert_eq!(titles, ["Luxe Essentials", "Luxe Signature", "Luxe Elite"]);
        assert!(content.package(PackageTag::Signature).unwrap().highlighted());
        assert!(!content.package(PackageTag::Elite).unwrap().highlighted());

        assert_eq!(content.questions.len(), 2);
        assert!(content.questions.iter().all(|q| q.options().len() == 3));
        assert_eq!(content.process.len(), 5);
        assert_eq!(content.process[2].title, "Deposit");
        assert_eq!(content.contact.email, "hello@luxevision.com");
        assert_eq!(content.event_types.len(), 5);
    }

    #[test]
    fn parse_rejects_unknown_tag() {
        let raw = BUILTIN_CONTENT.replacen("\"elite\"", "\"platinum\"", 1);
        let err = parse_content(&raw).unwrap_err();
        assert!(matches!(err, ContentServiceError::Parse(_)), "{err:?}");
    }

    #[test]
    fn parse_rejects_empty_question_list() {
        let mut value: serde_json::Value = serde_json::from_str(BUILTIN_CONTENT).unwrap();
        value["questions"] = serde_json::Value::Array(Vec::new());
        let err = parse_content(&value.to_string()).unwrap_err();
        assert!(matches!(
            err,
            ContentServiceError::Invalid(ContentError::NoQuestions)
        ));
    }

    #[test]
    fn source_display() {
        assert_eq!(ContentSource::Builtin.to_string(), "built-in content");
        assert_eq!(
            ContentSource::File(PathBuf::from("site.json")).to_string(),
            "site.json"
        );
    }
}
