//! Markdown to HTML rendering for difficulty blocks.
//!
//! ```rust
//! use lectern_viewer::render::MarkdownRenderer;
//!
//! let renderer = MarkdownRenderer::plain();
//! let html = renderer.render("Some **bold** text").unwrap();
//! assert_eq!(html, "<p>Some <strong>bold</strong> text</p>\n");
//! ```

use lectern_core::Result;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};

use crate::highlight::Highlighter;

/// Renders markdown blocks with optional code highlighting.
#[derive(Debug)]
pub struct MarkdownRenderer {
    options: Options,
    highlighter: Option<Highlighter>,
}

impl MarkdownRenderer {
    /// Renderer that highlights fenced code with `highlighter`.
    pub fn with_highlighter(highlighter: Highlighter) -> Self {
        Self {
            options: default_options(),
            highlighter: Some(highlighter),
        }
    }

    /// Renderer that leaves code blocks as `<pre><code class="language-x">`.
    pub fn plain() -> Self {
        Self {
            options: default_options(),
            highlighter: None,
        }
    }

    /// Render one markdown block to an HTML fragment.
    ///
    /// Empty input renders to an empty string.
    pub fn render(&self, markdown: &str) -> Result<String> {
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        if markdown.trim().is_empty() {
            return Ok(out);
        }

        let parser = Parser::new_ext(markdown, self.options);
        match &self.highlighter {
            Some(highlighter) => {
                let events = highlight_code_blocks(parser, highlighter)?;
                html::push_html(&mut out, events.into_iter());
            }
            None => html::push_html(&mut out, parser),
        }
        Ok(out)
    }
}

fn default_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);
    options
}

/// Replace every code block's events with one pre-rendered HTML event.
fn highlight_code_blocks<'a>(
    parser: Parser<'a>,
    highlighter: &Highlighter,
) -> Result<Vec<Event<'a>>> {
    let mut events = Vec::new();
    let mut code: Option<(String, String)> = None;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let language = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .unwrap_or_default()
                        .to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                code = Some((language, String::new()));
            }
            Event::Text(text) if code.is_some() => {
                if let Some((_, buffer)) = code.as_mut() {
                    buffer.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((language, buffer)) = code.take() {
                    let highlighted = highlighter.highlight(&buffer, &language)?;
                    let wrapped = if language.is_empty() {
                        format!("<div class=\"code-block\">{highlighted}</div>\n")
                    } else {
                        format!(
                            "<div class=\"code-block\" data-lang=\"{}\">{highlighted}</div>\n",
                            crate::page::escape_html(&language)
                        )
                    };
                    events.push(Event::Html(CowStr::from(wrapped)));
                }
            }
            other => events.push(other),
        }
    }

    Ok(events)
}
