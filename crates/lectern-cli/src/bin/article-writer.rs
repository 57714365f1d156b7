#![forbid(unsafe_code)]

//! Generate a tiered markdown article from the built-in template.

use std::process::ExitCode;

use anyhow::Context;
use lectern_cli::commands::run_write;
use lectern_cli::logging::init_logging;
use lectern_cli::{parse_args, LecternConfig, WriterArgs};

async fn run(args: WriterArgs) -> anyhow::Result<()> {
    let config = LecternConfig::load(args.config.as_deref()).context("loading configuration")?;
    let summary = run_write(&args, &config)
        .await
        .context("writing article")?;
    println!("{summary}");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args: WriterArgs = parse_args();
    init_logging(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "article-writer failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
