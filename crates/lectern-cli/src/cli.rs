//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;
use lectern_core::Difficulty;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "LECTERN_CONFIG";

/// Generate an interactive HTML viewer for a tiered article
#[derive(Parser, Debug)]
#[command(name = "article-viewer", author, version, about, long_about = None)]
pub struct ViewerArgs {
    /// Path to the tiered markdown article
    #[arg(long)]
    pub markdown: PathBuf,

    /// Path of the HTML file to write
    #[arg(long)]
    pub output: PathBuf,

    /// Configuration file path
    #[arg(short, long, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Generate a tiered markdown article from the built-in template
#[derive(Parser, Debug)]
#[command(name = "article-writer", author, version, about, long_about = None)]
pub struct WriterArgs {
    /// Article topic, used as the title
    #[arg(long)]
    pub topic: String,

    /// Path of the markdown file to write [default: from config]
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Requested complexity: simple, medium, or advanced [default: from config]
    #[arg(long)]
    pub complexity: Option<Difficulty>,

    /// Configuration file path
    #[arg(short, long, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse the process arguments.
///
/// Help and version requests exit 0. Every other argument error prints
/// clap's message to stderr and exits 1.
pub fn parse_args<T: Parser>() -> T {
    T::try_parse().unwrap_or_else(|err| {
        if !err.use_stderr() {
            err.exit();
        }
        let _ = err.print();
        std::process::exit(1);
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_commands_are_well_formed() {
        ViewerArgs::command().debug_assert();
        WriterArgs::command().debug_assert();
    }

    #[test]
    fn test_viewer_requires_both_paths() {
        assert!(ViewerArgs::try_parse_from(["article-viewer", "--markdown", "a.md"]).is_err());
        let args = ViewerArgs::try_parse_from([
            "article-viewer",
            "--markdown",
            "a.md",
            "--output",
            "out/a.html",
        ])
        .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(args.markdown, PathBuf::from("a.md"));
        assert_eq!(args.output, PathBuf::from("out/a.html"));
        assert!(!args.verbose);
    }

    #[test]
    fn test_writer_requires_topic() {
        assert!(WriterArgs::try_parse_from(["article-writer"]).is_err());
    }

    #[test]
    fn test_writer_complexity_is_validated() {
        let args = WriterArgs::try_parse_from([
            "article-writer",
            "--topic",
            "Rust",
            "--complexity",
            "Advanced",
        ])
        .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(args.complexity, Some(Difficulty::Advanced));
        assert_eq!(args.output, None);

        assert!(WriterArgs::try_parse_from([
            "article-writer",
            "--topic",
            "Rust",
            "--complexity",
            "expert",
        ])
        .is_err());
    }

    #[test]
    fn test_help_is_not_an_error_stream() {
        let err = WriterArgs::try_parse_from(["article-writer", "--help"]).unwrap_err();
        assert!(!err.use_stderr());

        let err = WriterArgs::try_parse_from(["article-writer"]).unwrap_err();
        assert!(err.use_stderr());
    }
}
