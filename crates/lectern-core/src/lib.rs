//! Lectern core: shared article types, errors, and utilities.
//!
//! This crate provides the foundational types used across all Lectern crates.
//! It has no internal Lectern dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`types`]: `Article`, `Section`, `SectionContent`, `Difficulty`
//! - [`util`]: ID utilities

pub mod error;
pub mod types;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use types::{Article, Difficulty, Section, SectionContent};

// Convenience re-exports from util
pub use util::ids::{normalize_id, normalize_id_or};
