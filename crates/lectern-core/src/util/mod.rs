//! Small shared helpers.
//!
//! # Modules
//!
//! - [`ids`]: ID normalization for anchors and element ids

pub mod ids;
