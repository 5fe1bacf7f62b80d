use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TagError {
    #[error("unknown package tag: {0:?}")]
    Unknown(String),
}

/// Recommendation outcome of the quiz; each tag names one pricing package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageTag {
    /// Starter tier for DIY planners.
    Essentials,
    /// Mid tier; most of the planning done for the client.
    Signature,
    /// Full-service tier.
    Elite,
}

impl PackageTag {
    pub const ALL: [PackageTag; 3] = [Self::Essentials, Self::Signature, Self::Elite];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PackageTag::Essentials => "essentials",
            PackageTag::Signature => "signature",
            PackageTag::Elite => "elite",
        }
    }

    /// Upper-case form used in recommendation notices.
    #[must_use]
    pub fn upper(self) -> &'static str {
        match self {
            PackageTag::Essentials => "ESSENTIALS",
            PackageTag::Signature => "SIGNATURE",
            PackageTag::Elite => "ELITE",
        }
    }
}

impl fmt::Display for PackageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageTag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "essentials" => Ok(Self::Essentials),
            "signature" => Ok(Self::Signature),
            "elite" => Ok(Self::Elite),
            other => Err(TagError::Unknown(other.to_string())),
        }
    }
}
