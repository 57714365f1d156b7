//! Configuration loading.
//!
//! Resolution order:
//! 1. An explicit path (`--config` or `LECTERN_CONFIG`), which must exist
//! 2. `$CONFIG_DIR/lectern/config.toml`, when present
//! 3. Built-in defaults
//!
//! Every field is optional; missing ones take their default.

use std::path::{Path, PathBuf};

use lectern_core::{Difficulty, Error, Result};
use lectern_viewer::ViewerOptions;
use serde::{Deserialize, Serialize};

/// Directory name under the platform config directory.
pub const PROJECT_NAME: &str = "lectern";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LecternConfig {
    /// `article-viewer` settings.
    pub viewer: ViewerOptions,
    /// `article-writer` settings.
    pub writer: WriterConfig,
}

/// `article-writer` settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Output path used when `--output` is absent.
    pub output: PathBuf,
    /// Complexity used when `--complexity` is absent.
    pub complexity: Difficulty,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("./output/article.md"),
            complexity: Difficulty::Medium,
        }
    }
}

impl LecternConfig {
    /// Load configuration following the resolution order above.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                Self::from_file(path)
            }
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => {
                    log::debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Read and parse one TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("failed to parse {}: {e}", path.display())))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// `$CONFIG_DIR/lectern/config.toml`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
}
