//! Writing articles in the difficulty-block convention.
//!
//! The output of [`write_sections`] is exactly what [`parse_article`] reads,
//! so an article survives a write/parse cycle with its section mapping intact.
//!
//! [`parse_article`]: super::parser::parse_article

use lectern_core::{Difficulty, Section};

use super::markers::{level_label, marker_line, MarkerKind};

/// Formatting switches for [`write_sections`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Prefix each non-empty block with its `**Level:**` label.
    pub labels: bool,
    /// Put a `---` rule between sections.
    pub separators: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            labels: true,
            separators: true,
        }
    }
}

impl WriteOptions {
    /// Bare blocks: no labels, no separators.
    pub fn plain() -> Self {
        Self {
            labels: false,
            separators: false,
        }
    }
}

/// Append one difficulty block to `out`.
///
/// ```rust
/// use lectern_content::markdown::write_block;
/// use lectern_core::Difficulty;
///
/// let mut out = String::new();
/// write_block(&mut out, Difficulty::Simple, "Easy.", true);
/// assert_eq!(out, "<!-- simple:start -->\n**Simple:** Easy.\n\n<!-- simple:end -->\n\n");
/// ```
pub fn write_block(out: &mut String, level: Difficulty, text: &str, label: bool) {
    out.push_str(&marker_line(level, MarkerKind::Start));
    out.push('\n');
    if !text.is_empty() {
        if label {
            out.push_str(&level_label(level));
            out.push(' ');
        }
        out.push_str(text);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&marker_line(level, MarkerKind::End));
    out.push_str("\n\n");
}

/// Serialize sections as `##` headings followed by all three blocks.
///
/// Every level is written, empty ones as empty blocks.
pub fn write_sections(sections: &[Section], options: &WriteOptions) -> String {
    let mut out = String::new();
    for (index, section) in sections.iter().enumerate() {
        out.push_str(&format!("## {}\n\n", section.title));
        for (level, text) in section.content.iter() {
            write_block(&mut out, level, text, options.labels);
        }
        if options.separators && index + 1 < sections.len() {
            out.push_str("---\n\n");
        }
    }
    out
}
