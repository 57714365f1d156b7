//! Interactive HTML viewer generation for tiered articles.
//!
//! Each difficulty block is rendered from markdown to HTML (with syntax
//! highlighted code), and all renderings are embedded in one static page
//! whose script lets the reader switch levels per section or globally. The
//! chosen level is remembered in the browser's `localStorage`.
//!
//! # Modules
//!
//! - [`highlight`]: `syntect` wrapper for fenced code
//! - [`render`]: Markdown block to HTML fragment
//! - [`page`]: Page assembly and embedded data
//!
//! # Example
//!
//! ```rust
//! use lectern_content::parse_article;
//! use lectern_viewer::{build_page, ViewerOptions};
//!
//! let article = parse_article("# Demo\n\n## Intro\n<!-- simple:start -->\nHi\n<!-- simple:end -->\n");
//! let html = build_page(&article, &ViewerOptions::default()).unwrap();
//! assert!(html.contains("<title>Demo</title>"));
//! ```

pub mod highlight;
pub mod page;
pub mod render;

pub use highlight::{Highlighter, DEFAULT_THEME};
pub use page::{build_page, escape_html, ArticleViewer, RenderedSection, ViewerOptions, PLACEHOLDER};
pub use render::MarkdownRenderer;
