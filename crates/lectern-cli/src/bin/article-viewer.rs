#![forbid(unsafe_code)]

//! Generate an interactive HTML viewer from a tiered markdown article.

use std::process::ExitCode;

use anyhow::Context;
use lectern_cli::commands::run_view;
use lectern_cli::logging::init_logging;
use lectern_cli::{parse_args, LecternConfig, ViewerArgs};

async fn run(args: ViewerArgs) -> anyhow::Result<()> {
    let config = LecternConfig::load(args.config.as_deref()).context("loading configuration")?;
    let summary = run_view(&args, &config)
        .await
        .with_context(|| format!("generating viewer for {}", args.markdown.display()))?;
    println!("{summary}");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args: ViewerArgs = parse_args();
    init_logging(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "article-viewer failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
