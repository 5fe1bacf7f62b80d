use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::PackageTag;

const CUSTOM_PRICE: &str = "Custom";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PackageError {
    #[error("package title cannot be empty")]
    EmptyTitle,

    #[error("package price cannot be empty")]
    EmptyPrice,
}

/// A pricing tier shown in the packages section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    tag: PackageTag,
    title: String,
    price: String,
    description: String,
    features: Vec<String>,
    #[serde(default)]
    highlighted: bool,
}

impl Package {
    /// # Errors
    ///
    /// Returns `PackageError` if the title or price label is blank.
    pub fn new(
        tag: PackageTag,
        title: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
        features: Vec<String>,
    ) -> Result<Self, PackageError> {
        let package = Self {
            tag,
            title: title.into().trim().to_string(),
            price: price.into().trim().to_string(),
            description: description.into(),
            features,
            highlighted: false,
        };
        package.validate()?;
        Ok(package)
    }

    /// # Errors
    ///
    /// Returns `PackageError` if the title or price label is blank.
    pub fn validate(&self) -> Result<(), PackageError> {
        if self.title.trim().is_empty() {
            return Err(PackageError::EmptyTitle);
        }
        if self.price.trim().is_empty() {
            return Err(PackageError::EmptyPrice);
        }
        Ok(())
    }

    #[must_use]
    pub fn tag(&self) -> PackageTag {
        self.tag
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn price(&self) -> &str {
        &self.price
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Whether the card carries the "Most Popular" badge.
    #[must_use]
    pub fn highlighted(&self) -> bool {
        self.highlighted
    }

    /// Custom-priced packages are quoted per client, so there is no per-event suffix.
    #[must_use]
    pub fn is_custom_priced(&self) -> bool {
        self.price.eq_ignore_ascii_case(CUSTOM_PRICE)
    }
}
