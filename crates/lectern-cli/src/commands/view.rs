//! `article-viewer`: tiered markdown in, interactive HTML out.

use std::fmt;
use std::path::PathBuf;

use lectern_content::parse_article;
use lectern_core::Result;
use lectern_viewer::ArticleViewer;

use super::{read_file, write_file};
use crate::cli::ViewerArgs;
use crate::config::LecternConfig;

/// What a viewer run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSummary {
    /// Parsed article title.
    pub title: String,
    /// Where the HTML was written.
    pub output: PathBuf,
    /// Number of sections rendered.
    pub sections: usize,
}

impl fmt::Display for ViewSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HTML viewer generated successfully!")?;
        writeln!(f, "  Title: {}", self.title)?;
        writeln!(f, "  Output: {}", self.output.display())?;
        write!(f, "  Sections: {}", self.sections)
    }
}

/// Read, parse, render, and write.
pub async fn run_view(args: &ViewerArgs, config: &LecternConfig) -> Result<ViewSummary> {
    println!("Reading markdown article...");
    let markdown = read_file(&args.markdown).await?;

    println!("Parsing article...");
    let article = parse_article(&markdown);
    log::debug!(
        "Parsed '{}' with {} sections",
        article.title,
        article.sections.len()
    );
    if article.sections.is_empty() {
        log::warn!("{} has no sections", args.markdown.display());
    }

    println!("Generating HTML viewer...");
    let viewer = ArticleViewer::new(config.viewer.clone())?;
    let html = viewer.build_page(&article)?;
    write_file(&args.output, &html).await?;

    Ok(ViewSummary {
        title: article.title,
        output: args.output.clone(),
        sections: article.sections.len(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(dir: &TempDir, markdown: &str) -> ViewerArgs {
        ViewerArgs {
            markdown: dir.path().join(markdown),
            output: dir.path().join("site/index.html"),
            config: None,
            verbose: false,
        }
    }

    #[tokio::test]
    async fn test_run_view_writes_page() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("a.md"),
            "# Guide\n\n## One\n\n<!-- medium:start -->\nHello\n<!-- medium:end -->\n",
        )
        .unwrap();

        let args = args(&dir, "a.md");
        let summary = run_view(&args, &LecternConfig::default()).await.unwrap();
        assert_eq!(summary.title, "Guide");
        assert_eq!(summary.sections, 1);

        let html = std::fs::read_to_string(&args.output).unwrap();
        assert!(html.contains("<title>Guide</title>"));
        assert!(summary.to_string().contains("Sections: 1"));
    }

    #[tokio::test]
    async fn test_run_view_missing_input() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, "missing.md");
        let err = run_view(&args, &LecternConfig::default()).await.unwrap_err();
        assert!(err.is_io());
        assert!(!args.output.exists());
    }

    #[tokio::test]
    async fn test_run_view_bad_theme() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.md"), "# T\n").unwrap();

        let mut config = LecternConfig::default();
        config.viewer.theme = "Nope".to_string();
        let err = run_view(&args(&dir, "a.md"), &config).await.unwrap_err();
        assert!(err.to_string().contains("Nope"));
    }
}
