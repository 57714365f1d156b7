//! Tiered article template generation.
//!
//! Produces a six-section article, each section written at all three
//! difficulty levels, ready for the viewer.
//!
//! ```rust
//! use lectern_core::Difficulty;
//! use lectern_writer::{format_article, generate_article};
//!
//! let article = generate_article("Getting Started", Difficulty::Medium);
//! let markdown = format_article(&article);
//! assert!(markdown.contains("# Getting Started"));
//! ```

pub mod article;
pub mod template;

pub use article::{format_article, generate_article, generate_article_at, INTRO_NOTE};
pub use template::{next_steps_section, template_sections, FALLBACK_TITLE};
