//! Article data model.
//!
//! - [`Difficulty`]: closed set of reading levels
//! - [`SectionContent`]: one text block per level
//! - [`Section`] / [`Article`]: the parsed document

mod article;
mod difficulty;

#[cfg(test)]
mod proptests;

pub use article::{Article, Section, SectionContent};
pub use difficulty::Difficulty;
