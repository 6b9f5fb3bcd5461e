//! ytmfetch command-line entry point.
//!
//! Parses flags, installs logging, loads the manifest and runs one download
//! pass. A run that completes exits 0 even if some songs failed; only
//! configuration, manifest and report errors change the exit status.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use ytmfetch::cli::{self, Cli};
use ytmfetch::{Downloader, Manifest};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: &Cli) -> ytmfetch::Result<()> {
    let config = cli.into_config()?;
    let songs_path = cli.songs_path(&config);
    tracing::debug!(path = ?songs_path, "loading manifest");

    let manifest = Manifest::load(&songs_path).await?;
    let downloader = Downloader::from_config(config)?;
    let report = downloader.download(&manifest).await;

    if let Some(path) = &cli.report {
        cli::write_report(path, &report).await?;
        tracing::debug!(path = ?path, "report written");
    }

    Ok(())
}

/// `[LEVEL] message` lines on stderr; `RUST_LOG` overrides the level
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
