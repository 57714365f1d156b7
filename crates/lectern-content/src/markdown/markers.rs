//! Line classification for tiered articles.
//!
//! A tiered article is ordinary markdown plus HTML-comment markers that open
//! and close difficulty blocks:
//!
//! ```markdown
//! ## Section Title
//!
//! <!-- simple:start -->
//! **Simple:** An easy explanation.
//! <!-- simple:end -->
//! ```
//!
//! The helpers here recognise those markers, `#`/`##` headings, fenced code
//! delimiters, and the `**Label:**` prefix writers put on a block's first line.
//!
//! # Example
//!
//! ```rust
//! use lectern_content::markdown::markers::{parse_marker, BlockMarker, MarkerKind};
//! use lectern_core::Difficulty;
//!
//! let marker = parse_marker("<!-- medium:start -->").unwrap();
//! assert_eq!(marker, BlockMarker::Known(Difficulty::Medium, MarkerKind::Start));
//! assert!(parse_marker("plain text").is_none());
//! ```

use std::sync::LazyLock;

use lectern_core::Difficulty;
use regex::Regex;

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^<!--\s*([a-z][\w-]*)\s*:\s*(start|end)\s*-->$").expect("Invalid marker regex")
});

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\s+(.+)$").expect("Invalid title regex"));

static SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^##\s+(.+)$").expect("Invalid section heading regex"));

/// Whether a marker opens or closes a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// `LEVEL:start`
    Start,
    /// `LEVEL:end`
    End,
}

/// A recognised `<!-- name:start|end -->` comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockMarker {
    /// Marker for one of the three difficulty levels.
    Known(Difficulty, MarkerKind),
    /// Marker-shaped comment naming something else (ignored by the parser).
    Unknown(String),
}

/// Classify a line as a block marker.
///
/// The whole line (ignoring surrounding whitespace) must be the comment, and
/// its action must be `start` or `end`. Level names and actions are matched
/// case-insensitively.
///
/// ```rust
/// use lectern_content::markdown::markers::{parse_marker, BlockMarker, MarkerKind};
/// use lectern_core::Difficulty;
///
/// assert_eq!(
///     parse_marker("  <!--advanced:END-->  "),
///     Some(BlockMarker::Known(Difficulty::Advanced, MarkerKind::End))
/// );
/// assert_eq!(
///     parse_marker("<!-- expert:start -->"),
///     Some(BlockMarker::Unknown("expert:start".to_string()))
/// );
/// assert_eq!(parse_marker("<!-- just a comment -->"), None);
/// ```
pub fn parse_marker(line: &str) -> Option<BlockMarker> {
    let caps = MARKER_RE.captures(line.trim())?;
    let name = &caps[1];
    let action = &caps[2];

    let kind = if action.eq_ignore_ascii_case("start") {
        MarkerKind::Start
    } else {
        MarkerKind::End
    };

    match name.parse::<Difficulty>() {
        Ok(level) => Some(BlockMarker::Known(level, kind)),
        Err(_) => Some(BlockMarker::Unknown(format!("{name}:{action}"))),
    }
}

/// Whether `line` is a single-line HTML comment, marker or not.
pub fn is_comment_line(line: &str) -> bool {
    let line = line.trim();
    line.len() >= 7 && line.starts_with("<!--") && line.ends_with("-->")
}

/// Render the marker line for `level`.
///
/// ```rust
/// use lectern_content::markdown::markers::{marker_line, MarkerKind};
/// use lectern_core::Difficulty;
///
/// assert_eq!(marker_line(Difficulty::Simple, MarkerKind::Start), "<!-- simple:start -->");
/// ```
pub fn marker_line(level: Difficulty, kind: MarkerKind) -> String {
    let action = match kind {
        MarkerKind::Start => "start",
        MarkerKind::End => "end",
    };
    format!("<!-- {}:{action} -->", level.as_str())
}

/// Text of a level-1 (`# `) heading line.
pub fn title_heading(line: &str) -> Option<&str> {
    TITLE_RE
        .captures(line.trim_end())
        .and_then(|caps| caps.get(1))
        .map(|m| strip_closing_hashes(m.as_str()))
        .filter(|text| !text.is_empty())
}

/// Text of a section (`## `) heading line.
///
/// Only exactly two `#` count: `### Sub` is content.
///
/// ```rust
/// use lectern_content::markdown::markers::section_heading;
///
/// assert_eq!(section_heading("## Best Practices"), Some("Best Practices"));
/// assert_eq!(section_heading("## Closed ##"), Some("Closed"));
/// assert_eq!(section_heading("### Sub"), None);
/// assert_eq!(section_heading("# Title"), None);
/// ```
pub fn section_heading(line: &str) -> Option<&str> {
    SECTION_RE
        .captures(line.trim_end())
        .and_then(|caps| caps.get(1))
        .map(|m| strip_closing_hashes(m.as_str()))
        .filter(|text| !text.is_empty())
}

fn strip_closing_hashes(text: &str) -> &str {
    let trimmed = text.trim();
    let without = trimmed.trim_end_matches('#');
    if without.len() == trimmed.len() {
        return trimmed;
    }
    // A closing sequence must be preceded by whitespace, `# C#` keeps its hash.
    if without.is_empty() || without.ends_with(char::is_whitespace) {
        without.trim_end()
    } else {
        trimmed
    }
}

/// Remove a leading `**Simple:**` / `**Medium:**` / `**Advanced:**` label and
/// the whitespace after it.
///
/// ```rust
/// use lectern_content::markdown::markers::strip_level_label;
///
/// assert_eq!(strip_level_label("**Simple:** Easy words"), "Easy words");
/// assert_eq!(strip_level_label("**Note:** stays"), "**Note:** stays");
/// ```
pub fn strip_level_label(line: &str) -> &str {
    let trimmed = line.trim_start();
    Difficulty::ALL
        .iter()
        .find_map(|level| {
            trimmed
                .strip_prefix("**")
                .and_then(|rest| rest.strip_prefix(level.label()))
                .and_then(|rest| rest.strip_prefix(":**"))
        })
        .map(str::trim_start)
        .unwrap_or(line)
}

/// The `**Label:** ` prefix for `level`.
pub fn level_label(level: Difficulty) -> String {
    format!("**{}:**", level.label())
}

/// Tracks fenced code blocks (```` ``` ```` or `~~~`) across lines.
#[derive(Debug, Clone, Default)]
pub struct FenceState {
    open: Option<(char, usize)>,
}

impl FenceState {
    /// True while inside a fenced code block.
    pub fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Feed one line; returns true if the line opened or closed a fence.
    pub fn update(&mut self, line: &str) -> bool {
        let trimmed = line.trim_start();
        let Some(fence_char) = trimmed.chars().next().filter(|c| *c == '`' || *c == '~') else {
            return false;
        };
        let run = trimmed.chars().take_while(|c| *c == fence_char).count();
        if run < 3 {
            return false;
        }

        match self.open {
            None => {
                self.open = Some((fence_char, run));
                true
            }
            Some((open_char, open_run)) => {
                let rest = &trimmed[run * fence_char.len_utf8()..];
                if open_char == fence_char && run >= open_run && rest.trim().is_empty() {
                    self.open = None;
                    true
                } else {
                    false
                }
            }
        }
    }
}
