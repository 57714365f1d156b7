//! Command implementations behind the two binaries.
//!
//! Each command prints its progress to stdout and returns a summary the
//! binary prints once the work is done.

pub mod view;
pub mod write;

use std::path::Path;

use lectern_core::{Error, Result};

pub use view::{run_view, ViewSummary};
pub use write::{run_write, WriteSummary};

/// Read a UTF-8 file, attaching the path to any error.
pub async fn read_file(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}

/// Write `content` to `path`, creating missing parent directories.
pub async fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::io_with_path(e, parent))?;
    }
    tokio::fs::write(path, content)
        .await
        .map_err(|e| Error::io_with_path(e, path))?;
    log::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
