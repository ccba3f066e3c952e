//! docsync command-line tool.
//!
//! Overwrites the project's copies of the boilerplate documentation
//! templates with the latest versions from GitHub. There are no
//! subcommands: running the binary performs the full sync.

mod report;
mod style;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use docsync_core::config::SyncConfig;
use docsync_core::sync::{SyncEvent, TemplateSync};

// ---------------------------------------------------------------------------
// CLI argument definitions
// ---------------------------------------------------------------------------

/// Sync boilerplate documentation templates from GitHub.
#[derive(Parser, Debug)]
#[command(
    name = "docsync",
    version,
    about = "Overwrite local documentation templates with the latest upstream versions"
)]
struct Cli {}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> ExitCode {
    // Minimal logging for CLI; RUST_LOG=debug shows fetch and write details.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();

    match run().await {
        Ok(0) => ExitCode::SUCCESS,
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<u8> {
    let project_root =
        std::env::current_dir().context("failed to determine the project directory")?;
    tracing::debug!(project_root = %project_root.display(), "resolved project root");

    let config = SyncConfig::builtin(project_root);
    config.validate().context("invalid sync configuration")?;

    let sync = TemplateSync::from_config(&config).context("failed to create HTTP client")?;

    for line in report::banner(&config.repository) {
        println!("{}", line);
    }

    let summary = sync
        .run_with(|event| match event {
            SyncEvent::Processing(entry) => println!("{}", report::processing(entry)),
            SyncEvent::Finished(outcome) => println!("{}", report::outcome(outcome)),
        })
        .await;

    for line in report::summary(&summary) {
        println!("{}", line);
    }

    Ok(summary.exit_code())
}
