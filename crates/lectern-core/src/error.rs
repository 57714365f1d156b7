//! Error types for Lectern.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for Lectern operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading, parsing, rendering, or writing articles.
///
/// All variants are reported to the user as a single line; none are retried.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// File read or write failure, tagged with the offending path.
    #[error("{}: {source}", path.display())]
    Io {
        /// Path that was being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Input that cannot be interpreted
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Markdown or syntax-highlighting failure
    #[error("Render error: {0}")]
    Render(String),

    /// JSON serialization failure
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Creates an I/O error carrying the path it happened on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse(message.into())
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    /// Creates a render error.
    pub fn render<S: Into<String>>(message: S) -> Self {
        Error::Render(message.into())
    }

    /// Returns true for file-system failures.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. })
    }
}
