//! Article, section, and per-difficulty content types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use crate::util::ids::normalize_id_or;

/// One text block per difficulty level.
///
/// All three levels are always present; a level with no content holds an
/// empty string. Serializes as `{"simple": .., "medium": .., "advanced": ..}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionContent {
    /// Beginner text
    #[serde(default)]
    pub simple: String,
    /// Intermediate text
    #[serde(default)]
    pub medium: String,
    /// Expert text
    #[serde(default)]
    pub advanced: String,
}

impl SectionContent {
    /// Builds content from the three levels in reading order.
    pub fn new(
        simple: impl Into<String>,
        medium: impl Into<String>,
        advanced: impl Into<String>,
    ) -> Self {
        Self {
            simple: simple.into(),
            medium: medium.into(),
            advanced: advanced.into(),
        }
    }

    /// Text for `level` (possibly empty).
    pub fn get(&self, level: Difficulty) -> &str {
        match level {
            Difficulty::Simple => &self.simple,
            Difficulty::Medium => &self.medium,
            Difficulty::Advanced => &self.advanced,
        }
    }

    /// Replaces the text for `level`.
    pub fn set(&mut self, level: Difficulty, text: impl Into<String>) {
        let slot = match level {
            Difficulty::Simple => &mut self.simple,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Advanced => &mut self.advanced,
        };
        *slot = text.into();
    }

    /// True when no level has any text.
    pub fn is_empty(&self) -> bool {
        Difficulty::ALL.iter().all(|level| self.get(*level).is_empty())
    }

    /// The preferred level if it has text, else the first non-empty level in
    /// reading order.
    pub fn first_available(&self, preferred: Difficulty) -> Option<(Difficulty, &str)> {
        std::iter::once(preferred)
            .chain(Difficulty::ALL)
            .map(|level| (level, self.get(level)))
            .find(|(_, text)| !text.is_empty())
    }

    /// Iterates `(level, text)` pairs in reading order.
    pub fn iter(&self) -> impl Iterator<Item = (Difficulty, &str)> {
        Difficulty::ALL.into_iter().map(|level| (level, self.get(level)))
    }
}

/// A `##`-headed unit of an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text
    pub title: String,
    /// Content for each difficulty
    pub content: SectionContent,
}

impl Section {
    /// Creates a section with all levels empty.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: SectionContent::default(),
        }
    }

    /// Creates a section with the given content.
    pub fn with_content(title: impl Into<String>, content: SectionContent) -> Self {
        Self {
            title: title.into(),
            content,
        }
    }

    /// Kebab-case anchor for the section, `section` if the title has none.
    pub fn id(&self) -> String {
        normalize_id_or(&self.title, "section")
    }
}

/// A parsed or generated article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Document title
    pub title: String,
    /// Frontmatter key/value pairs (empty when the document has none)
    #[serde(default)]
    pub frontmatter: BTreeMap<String, String>,
    /// Sections in document order
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Article {
    /// Creates an article with no frontmatter and no sections.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Looks up a frontmatter value.
    pub fn frontmatter_value(&self, key: &str) -> Option<&str> {
        self.frontmatter.get(key).map(String::as_str)
    }

    /// Section titles in order.
    pub fn section_titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.title.as_str()).collect()
    }
}
