//! Self-contained HTML viewer page.
//!
//! The page embeds every rendering of every section as JSON and switches
//! between them client-side, so it works from a plain file with no server.
//!
//! ```rust
//! use lectern_core::{Article, Section, SectionContent};
//! use lectern_viewer::{ArticleViewer, ViewerOptions};
//!
//! let mut article = Article::new("Guide");
//! article.sections.push(Section::with_content(
//!     "Intro",
//!     SectionContent::new("Easy", "Normal", "Hard"),
//! ));
//!
//! let options = ViewerOptions { highlight: false, ..ViewerOptions::default() };
//! let html = ArticleViewer::new(options).unwrap().build_page(&article).unwrap();
//! assert!(html.contains("<title>Guide</title>"));
//! ```

use std::collections::HashMap;

use lectern_core::{Article, Difficulty, Result, SectionContent};
use serde::{Deserialize, Serialize};

use crate::highlight::{Highlighter, DEFAULT_THEME};
use crate::render::MarkdownRenderer;

const STYLE: &str = include_str!("../assets/viewer.css");
const SCRIPT: &str = include_str!("../assets/viewer.js");

/// Shown when the selected level of a section has no content.
pub const PLACEHOLDER: &str = "Content not available for this difficulty level.";

/// Viewer appearance and behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    /// Level shown before the reader picks one.
    pub default_difficulty: Difficulty,
    /// `localStorage` key the reader's choice is saved under.
    pub storage_key: String,
    /// Line under the title in the page header.
    pub subtitle: String,
    /// Highlight fenced code blocks.
    pub highlight: bool,
    /// Highlight theme name.
    pub theme: String,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            default_difficulty: Difficulty::Medium,
            storage_key: "lectern.difficulty".to_string(),
            subtitle: "Interactive Article with Adjustable Difficulty Levels".to_string(),
            highlight: true,
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

/// One section with each level rendered to HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedSection {
    /// Position in the article
    pub index: usize,
    /// Unique anchor id
    pub id: String,
    /// Heading text (not escaped)
    pub title: String,
    /// HTML per level; empty string where the level has no content
    pub content: SectionContent,
}

/// Builds viewer pages for articles.
#[derive(Debug)]
pub struct ArticleViewer {
    options: ViewerOptions,
    renderer: MarkdownRenderer,
}

impl ArticleViewer {
    /// Create a viewer, loading the highlighter if enabled.
    pub fn new(options: ViewerOptions) -> Result<Self> {
        let renderer = if options.highlight {
            MarkdownRenderer::with_highlighter(Highlighter::new(&options.theme)?)
        } else {
            MarkdownRenderer::plain()
        };
        Ok(Self { options, renderer })
    }

    /// Render every level of every section to HTML.
    ///
    /// Section ids are derived from titles and made unique with a numeric
    /// suffix.
    pub fn render_sections(&self, article: &Article) -> Result<Vec<RenderedSection>> {
        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut rendered = Vec::with_capacity(article.sections.len());

        for (index, section) in article.sections.iter().enumerate() {
            let base = section.id();
            let count = seen.entry(base.clone()).or_insert(0);
            *count += 1;
            let id = if *count == 1 {
                base
            } else {
                format!("{base}-{count}")
            };

            let mut content = SectionContent::default();
            for (level, markdown) in section.content.iter() {
                content.set(level, self.renderer.render(markdown)?);
            }

            rendered.push(RenderedSection {
                index,
                id,
                title: section.title.clone(),
                content,
            });
        }

        Ok(rendered)
    }

    /// Build the complete HTML document for `article`.
    pub fn build_page(&self, article: &Article) -> Result<String> {
        let sections = self.render_sections(article)?;
        let data = embed_json(&sections)?;
        let options = &self.options;
        let title = escape_html(&article.title);

        let mut out = String::with_capacity(STYLE.len() + SCRIPT.len() + data.len() * 2);
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("    <meta charset=\"UTF-8\">\n");
        out.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        out.push_str("    <meta name=\"generator\" content=\"lectern\">\n");
        out.push_str(&format!("    <title>{title}</title>\n"));
        out.push_str(&format!("    <style>\n{STYLE}    </style>\n"));
        out.push_str("</head>\n");
        out.push_str(&format!(
            "<body data-default-difficulty=\"{}\" data-storage-key=\"{}\">\n",
            options.default_difficulty,
            escape_html(&options.storage_key)
        ));
        out.push_str("    <div class=\"container\">\n");
        out.push_str("        <header class=\"header\">\n");
        out.push_str(&format!("            <h1>{title}</h1>\n"));
        if !options.subtitle.is_empty() {
            out.push_str(&format!(
                "            <p>{}</p>\n",
                escape_html(&options.subtitle)
            ));
        }
        out.push_str("        </header>\n");
        out.push_str("        <main class=\"content\">\n");
        write_global_controls(&mut out, options.default_difficulty);
        for section in &sections {
            write_section(&mut out, section, options.default_difficulty);
        }
        out.push_str("        </main>\n");
        out.push_str("    </div>\n");
        out.push_str(&format!(
            "    <script type=\"application/json\" id=\"article-data\">{data}</script>\n"
        ));
        out.push_str(&format!("    <script>\n{SCRIPT}    </script>\n"));
        out.push_str("</body>\n</html>\n");

        Ok(out)
    }
}

/// Build a page with a one-off viewer.
pub fn build_page(article: &Article, options: &ViewerOptions) -> Result<String> {
    ArticleViewer::new(options.clone())?.build_page(article)
}

fn write_global_controls(out: &mut String, default: Difficulty) {
    out.push_str("            <nav class=\"global-controls\" aria-label=\"Difficulty\">\n");
    out.push_str("                <h3>Set all sections to:</h3>\n");
    out.push_str("                <div class=\"global-buttons\">\n");
    for level in Difficulty::ALL {
        out.push_str(&format!(
            "                    <button type=\"button\" class=\"global-btn{}\" data-difficulty=\"{level}\">{}</button>\n",
            active_class(level == default),
            level.label()
        ));
    }
    out.push_str("                </div>\n");
    out.push_str("            </nav>\n");
}

fn write_section(out: &mut String, section: &RenderedSection, default: Difficulty) {
    let index = section.index;
    let shown = section.content.first_available(default);
    let shown_level = shown.map(|(level, _)| level).unwrap_or(default);

    out.push_str(&format!(
        "            <section class=\"section\" id=\"{}\">\n",
        escape_html(&section.id)
    ));
    out.push_str(&format!(
        "                <h2 class=\"section-title\">{}</h2>\n",
        escape_html(&section.title)
    ));
    out.push_str("                <div class=\"difficulty-selector\">\n");
    for level in Difficulty::ALL {
        out.push_str(&format!(
            "                    <button type=\"button\" class=\"difficulty-btn{}\" data-section=\"{index}\" data-difficulty=\"{level}\">{}<span class=\"difficulty-label {level}\">{}</span></button>\n",
            active_class(level == shown_level),
            level.label(),
            level.audience()
        ));
    }
    out.push_str("                </div>\n");
    match shown {
        Some((level, html)) => {
            out.push_str(&format!(
                "                <div class=\"section-content\" id=\"content-{index}\" data-difficulty=\"{level}\">\n{html}                </div>\n"
            ));
        }
        None => {
            out.push_str(&format!(
                "                <div class=\"section-content empty\" id=\"content-{index}\" data-difficulty=\"{default}\">{PLACEHOLDER}</div>\n"
            ));
        }
    }
    out.push_str("            </section>\n");
}

fn active_class(active: bool) -> &'static str {
    if active { " active" } else { "" }
}

/// Serialize sections for a `<script type="application/json">` element.
///
/// `<` is written as `\u003c` so no content can close the element or open a
/// comment inside it; JSON readers decode it back.
fn embed_json(sections: &[RenderedSection]) -> Result<String> {
    let json = serde_json::to_string(sections)?;
    Ok(json.replace('<', "\\u003c"))
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
