//! Common helpers for CLI integration tests.

use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use tempfile::TempDir;

/// A scratch working directory with an isolated config directory.
pub struct Workspace {
    /// Temporary root; removed on drop.
    pub dir: TempDir,
}

impl Workspace {
    /// Creates an empty workspace.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    /// Absolute path of `relative` inside the workspace.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Writes `content` to `relative`, creating parents.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Reads a file inside the workspace.
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).unwrap()
    }

    /// Command for `bin` running inside the workspace.
    ///
    /// The user's own config directory and `LECTERN_CONFIG` are hidden so
    /// only files created by the test are picked up.
    pub fn command(&self, bin: &str) -> Command {
        let mut cmd = Command::cargo_bin(bin).expect("binary built");
        cmd.current_dir(self.dir.path())
            .env_remove("LECTERN_CONFIG")
            .env_remove("RUST_LOG")
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.path("xdg"));
        cmd
    }

    /// True if nothing but `keep` exists at the workspace root.
    pub fn is_empty_except(&self, keep: &[&str]) -> bool {
        std::fs::read_dir(self.dir.path()).unwrap().all(|entry| {
            let name = entry.unwrap().file_name();
            keep.iter().any(|k| Path::new(k) == Path::new(&name))
        })
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Stdout of a finished command as text.
pub fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a finished command as text.
pub fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// A small tiered article with two sections.
pub const SAMPLE_ARTICLE: &str = "\
---
author: Ada
---

# Tiered Sample

## Basics

<!-- simple:start -->
**Simple:** Short and sweet.
<!-- simple:end -->

<!-- medium:start -->
**Medium:** A little more detail.
<!-- medium:end -->

## Only Advanced

<!-- advanced:start -->
Deep dive with `code`.
<!-- advanced:end -->
";
