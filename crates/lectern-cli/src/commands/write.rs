//! `article-writer`: the built-in template rendered as tiered markdown.

use std::fmt;
use std::path::PathBuf;

use lectern_core::{Difficulty, Result};
use lectern_writer::{format_article, generate_article};

use super::write_file;
use crate::cli::WriterArgs;
use crate::config::LecternConfig;

/// What a writer run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    /// Article title.
    pub title: String,
    /// Where the markdown was written.
    pub output: PathBuf,
    /// Requested complexity.
    pub complexity: Difficulty,
    /// Number of template sections written.
    pub sections: usize,
}

impl fmt::Display for WriteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Article generated successfully!")?;
        writeln!(f, "  Title: {}", self.title)?;
        writeln!(f, "  Output: {}", self.output.display())?;
        writeln!(f, "  Complexity: {}", self.complexity)?;
        write!(f, "  Sections: {}", self.sections)
    }
}

/// Generate, format, and write. Flags override config values.
pub async fn run_write(args: &WriterArgs, config: &LecternConfig) -> Result<WriteSummary> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.writer.output.clone());
    let complexity = args.complexity.unwrap_or(config.writer.complexity);

    println!("Generating article...");
    println!("  Topic: {}", args.topic);
    println!("  Output: {}", output.display());
    println!("  Complexity: {complexity}");

    let article = generate_article(&args.topic, complexity);
    write_file(&output, &format_article(&article)).await?;

    Ok(WriteSummary {
        title: article.title,
        output,
        complexity,
        sections: article.sections.len(),
    })
}
