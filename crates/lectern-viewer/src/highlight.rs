//! Syntax highlighting for fenced code blocks.
//!
//! Wraps `syntect`'s bundled syntaxes and themes. Output uses inline styles,
//! so the viewer page needs no extra stylesheet for code.

use lectern_core::{Error, Result};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Theme used when none is configured.
pub const DEFAULT_THEME: &str = "InspiredGitHub";

/// Loaded syntax definitions plus one theme.
///
/// Loading is the expensive part; build one per run and reuse it for every
/// block.
pub struct Highlighter {
    syntaxes: SyntaxSet,
    theme: Theme,
    theme_name: String,
}

impl std::fmt::Debug for Highlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Highlighter")
            .field("theme", &self.theme_name)
            .finish_non_exhaustive()
    }
}

impl Highlighter {
    /// Load the bundled syntaxes and the named theme.
    ///
    /// Returns a configuration error listing the available themes if
    /// `theme_name` is not one of them.
    pub fn new(theme_name: &str) -> Result<Self> {
        let mut themes = ThemeSet::load_defaults();
        let theme = themes.themes.remove(theme_name).ok_or_else(|| {
            let available: Vec<&str> = themes.themes.keys().map(String::as_str).collect();
            Error::config(format!(
                "unknown highlight theme '{theme_name}' (available: {})",
                available.join(", ")
            ))
        })?;

        log::debug!("Loaded highlight theme '{theme_name}'");

        Ok(Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            theme,
            theme_name: theme_name.to_string(),
        })
    }

    /// Highlight `code` as `language`, falling back to plain text.
    pub fn highlight(&self, code: &str, language: &str) -> Result<String> {
        let syntax = self
            .syntaxes
            .find_syntax_by_token(language)
            .unwrap_or_else(|| {
                if !language.is_empty() {
                    log::debug!("No syntax for '{language}', highlighting as plain text");
                }
                self.syntaxes.find_syntax_plain_text()
            });

        highlighted_html_for_string(code, &self.syntaxes, syntax, &self.theme)
            .map_err(|e| Error::render(format!("failed to highlight {language} block: {e}")))
    }
}
