//! Markdown parsing and writing for tiered articles.
//!
//! - [`frontmatter`]: `---` delimited metadata extraction and writing
//! - [`markers`]: Block marker, heading, fence, and label recognition
//! - [`parser`]: [`parse_article`], markdown to [`lectern_core::Article`]
//! - [`writer`]: [`write_sections`], the inverse delimiter convention
//!
//! # Example
//!
//! ```rust
//! use lectern_content::markdown::{parse_article, write_sections, WriteOptions};
//!
//! let source = "# Guide\n\n## Intro\n\n<!-- simple:start -->\nHi\n<!-- simple:end -->\n";
//! let article = parse_article(source);
//! let again = parse_article(&write_sections(&article.sections, &WriteOptions::default()));
//!
//! assert_eq!(article.sections, again.sections);
//! ```

pub mod frontmatter;
pub mod markers;
pub mod parser;
pub mod writer;

// Re-export key types and functions
pub use frontmatter::{extract_frontmatter, strip_frontmatter, write_frontmatter, FrontmatterResult};
pub use markers::{parse_marker, BlockMarker, MarkerKind};
pub use parser::{parse_article, DEFAULT_TITLE};
pub use writer::{write_block, write_sections, WriteOptions};
