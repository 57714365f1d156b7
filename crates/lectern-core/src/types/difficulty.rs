//! The closed set of difficulty levels an article can be read at.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Difficulty level of a content block.
///
/// Serialized in lowercase (`"simple"`, `"medium"`, `"advanced"`), which is
/// also the spelling used in the `<!-- LEVEL:start -->` markers.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Beginner-friendly explanation
    Simple,
    /// Intermediate explanation
    #[default]
    Medium,
    /// Expert-level explanation
    Advanced,
}

impl Difficulty {
    /// Every level, in reading order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Simple, Difficulty::Medium, Difficulty::Advanced];

    /// Marker spelling of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Simple => "simple",
            Difficulty::Medium => "medium",
            Difficulty::Advanced => "advanced",
        }
    }

    /// Capitalized label, as used in button text and `**Label:**` prefixes.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Simple => "Simple",
            Difficulty::Medium => "Medium",
            Difficulty::Advanced => "Advanced",
        }
    }

    /// Audience the level is written for.
    pub fn audience(&self) -> &'static str {
        match self {
            Difficulty::Simple => "Beginner",
            Difficulty::Medium => "Intermediate",
            Difficulty::Advanced => "Expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Difficulty::Simple),
            "medium" => Ok(Difficulty::Medium),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(Error::parse(format!(
                "unknown difficulty '{other}' (expected simple, medium or advanced)"
            ))),
        }
    }
}
