//! tagtrans command-line front end
//!
//! Stands in for the original settings screen: triggers a dataset refresh
//! and displays the resulting version, or looks tags up through the
//! current store.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tagtrans_common::{init_logging, LoggingConfig};
use tagtrans_updater::{ConfigLoader, RefreshOutcome, TranslationUpdater};
use tracing::info;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the remote dataset and adopt it if newer
    Refresh,
    /// Print the version of the current dataset
    Version,
    /// Translate a tag through the current dataset
    Lookup {
        /// Tag namespace (e.g., artist, language)
        namespace: String,
        /// Tag to translate
        tag: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        level: args.log_level.clone(),
        ..LoggingConfig::default()
    })
    .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let config = match &args.config {
        Some(path) => ConfigLoader::load_config(path)
            .with_context(|| format!("Failed to load configuration from {path}"))?,
        None => ConfigLoader::load().context("Failed to load configuration")?,
    };

    let updater = Arc::new(
        TranslationUpdater::new(config).context("Failed to create translation updater")?,
    );

    if !updater.is_available() {
        println!("No tag-translation dataset configured.");
        return Ok(());
    }

    match args.command {
        Command::Refresh => {
            info!("Refreshing tag-translation dataset");
            let outcome = updater.refresh().await;
            match outcome {
                RefreshOutcome::Updated { version } => {
                    println!("Dataset updated to version {version}");
                }
                RefreshOutcome::Unchanged { version } => {
                    println!("Dataset already up to date (version {version})");
                }
                RefreshOutcome::InFlight => println!("A refresh is already running"),
                RefreshOutcome::Unavailable => println!("No dataset configured"),
                RefreshOutcome::Failed => {
                    println!("Refresh failed; current version {}", updater.current_version());
                }
            }
        }
        Command::Version => {
            updater.warm_up().await;
            println!("{}", updater.current_version());
        }
        Command::Lookup { namespace, tag } => {
            updater.warm_up().await;
            println!("{}", updater.translate(&namespace, &tag));
        }
    }

    Ok(())
}
