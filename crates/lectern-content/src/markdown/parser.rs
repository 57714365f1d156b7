//! Tiered article parsing.
//!
//! Turns markdown with difficulty blocks into an [`Article`]:
//!
//! ```rust
//! use lectern_content::markdown::parse_article;
//! use lectern_core::Difficulty;
//!
//! let markdown = "# Guide\n\n## Intro\n\n<!-- medium:start -->\nHello\n<!-- medium:end -->\n";
//! let article = parse_article(markdown);
//!
//! assert_eq!(article.title, "Guide");
//! assert_eq!(article.sections.len(), 1);
//! assert_eq!(article.sections[0].content.get(Difficulty::Medium), "Hello");
//! assert_eq!(article.sections[0].content.get(Difficulty::Simple), "");
//! ```
//!
//! The scan is line oriented. A `##` heading closes any open block and starts
//! a new section; `<!-- LEVEL:start -->` / `<!-- LEVEL:end -->` open and close
//! blocks; other single-line HTML comments are dropped and everything else
//! inside an open block is collected verbatim. Blocks
//! left open are closed at the next heading or at end of input.

use lectern_core::{Article, Difficulty, Section};

use super::frontmatter::extract_frontmatter;
use super::markers::{
    is_comment_line, parse_marker, section_heading, strip_level_label, title_heading,
    BlockMarker, FenceState, MarkerKind,
};

/// Title used when neither a `#` heading nor a frontmatter title exists.
pub const DEFAULT_TITLE: &str = "Article";

/// Parse a tiered markdown article.
///
/// Never fails: malformed structure degrades to fewer or emptier sections.
///
/// # Behavior
///
/// - Title: first `# ` heading outside code fences and blocks, else the
///   frontmatter `title`, else [`DEFAULT_TITLE`].
/// - Content outside difficulty blocks and before the first `##` is ignored.
/// - The first non-blank line of a block loses its `**Level:**` label.
/// - Whole-line `<!-- ... -->` comments inside a block are dropped, except
///   within a code fence.
/// - A repeated block for the same level replaces the earlier one; an empty
///   block replaces nothing.
pub fn parse_article(markdown: &str) -> Article {
    let frontmatter = extract_frontmatter(markdown);
    let body = frontmatter.body();

    let mut parser = ArticleParser::default();
    for line in body.lines() {
        parser.feed(line);
    }
    let (heading_title, sections) = parser.finish();

    let fields = frontmatter.into_fields();
    let title = heading_title
        .or_else(|| fields.get("title").cloned())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    log::debug!("Parsed article '{title}' with {} sections", sections.len());

    Article {
        title,
        frontmatter: fields,
        sections,
    }
}

/// Block currently being collected.
#[derive(Debug)]
struct OpenBlock {
    level: Difficulty,
    lines: Vec<String>,
    seen_text: bool,
}

impl OpenBlock {
    fn new(level: Difficulty) -> Self {
        Self {
            level,
            lines: Vec::new(),
            seen_text: false,
        }
    }

    fn push(&mut self, line: &str) {
        if !self.seen_text && !line.trim().is_empty() {
            self.seen_text = true;
            self.lines.push(strip_level_label(line).to_string());
        } else {
            self.lines.push(line.to_string());
        }
    }

    fn into_text(self) -> (Difficulty, String) {
        (self.level, self.lines.join("\n").trim().to_string())
    }
}

/// Line-by-line state machine behind [`parse_article`].
#[derive(Debug, Default)]
struct ArticleParser {
    title: Option<String>,
    sections: Vec<Section>,
    current: Option<Section>,
    block: Option<OpenBlock>,
    fence: FenceState,
}

impl ArticleParser {
    fn feed(&mut self, line: &str) {
        if let Some(marker) = parse_marker(line) {
            self.on_marker(marker);
            return;
        }

        let was_in_fence = self.fence.in_fence();
        self.fence.update(line);

        if !was_in_fence {
            if self.block.is_some() && is_comment_line(line) {
                return;
            }
            if let Some(title) = section_heading(line) {
                self.start_section(title);
                return;
            }
            if self.block.is_none()
                && self.title.is_none()
                && let Some(title) = title_heading(line)
            {
                self.title = Some(title.to_string());
                return;
            }
        }

        if self.current.is_some()
            && let Some(block) = self.block.as_mut()
        {
            block.push(line);
        }
    }

    fn on_marker(&mut self, marker: BlockMarker) {
        match marker {
            BlockMarker::Known(level, MarkerKind::Start) => {
                self.close_block();
                if self.current.is_some() {
                    self.block = Some(OpenBlock::new(level));
                } else {
                    log::debug!("Ignoring {level}:start marker outside any section");
                }
            }
            BlockMarker::Known(_, MarkerKind::End) => {
                self.close_block();
            }
            BlockMarker::Unknown(name) => {
                log::debug!("Ignoring unknown block marker '{name}'");
            }
        }
        // Markers always terminate whatever fence a block left open.
        self.fence = FenceState::default();
    }

    fn start_section(&mut self, title: &str) {
        self.close_block();
        if let Some(section) = self.current.take() {
            self.sections.push(section);
        }
        self.current = Some(Section::new(title));
    }

    fn close_block(&mut self) {
        let Some(block) = self.block.take() else {
            return;
        };
        let (level, text) = block.into_text();
        if text.is_empty() {
            return;
        }
        if let Some(section) = self.current.as_mut() {
            section.content.set(level, text);
        }
    }

    fn finish(mut self) -> (Option<String>, Vec<Section>) {
        self.close_block();
        if let Some(section) = self.current.take() {
            self.sections.push(section);
        }
        (self.title, self.sections)
    }
}

// ============================================================================
// Tests
// ============================================================================
