//! Tiered markdown parsing, frontmatter extraction, and writing.
//!
//! A tiered article is markdown in which every `##` section carries up to
//! three difficulty blocks delimited by `<!-- LEVEL:start -->` and
//! `<!-- LEVEL:end -->` comments. This crate reads and writes that format.
//!
//! # Modules
//!
//! - [`markdown`]: Parsing and writing
//!   - [`markdown::frontmatter`]: `---` frontmatter extraction
//!   - [`markdown::markers`]: Marker, heading, and label recognition
//!   - [`markdown::parser`]: Markdown to [`lectern_core::Article`]
//!   - [`markdown::writer`]: [`lectern_core::Article`] to markdown
//!
//! # Example
//!
//! ```rust
//! use lectern_content::parse_article;
//!
//! let article = parse_article("---\ntitle: Hello\n---\n\n## Intro\n");
//! assert_eq!(article.title, "Hello");
//! assert_eq!(article.sections[0].title, "Intro");
//! ```

pub mod markdown;

// Re-export commonly used types
pub use markdown::{
    extract_frontmatter, parse_article, strip_frontmatter, write_block, write_frontmatter,
    write_sections, FrontmatterResult, WriteOptions, DEFAULT_TITLE,
};
