//! # lectern-cli
//!
//! Shared plumbing for the `article-viewer` and `article-writer` binaries:
//! argument definitions, configuration loading, logging setup, and the
//! command implementations themselves.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

pub use cli::{parse_args, ViewerArgs, WriterArgs};
pub use config::{LecternConfig, WriterConfig};
