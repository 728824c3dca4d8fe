//! Architectural style guessing game.
//!
//! A line-oriented interface over the game engine: every line is a guess,
//! lines starting with `#` are commands.
//!
//! ```bash
//! cargo run -p archistyle -- --catalog data/styles.json --state progress.json
//! ```
//!
//! # Photo Scanning
//!
//! Fill a catalog's `photoUrls` from a directory with one folder per style:
//!
//! ```bash
//! cargo run -p archistyle -- scan-photos --photos public/archistyle_photos --catalog data/styles.json
//! ```

mod assets;
mod headless;

use anyhow::Result;
use clap::{Parser, Subcommand};
use headless::HeadlessConfig;
use std::path::PathBuf;
use std::time::Duration;

/// Guess the architectural style of a building from its photo.
#[derive(Debug, Parser)]
#[command(name = "archistyle", version)]
struct Cli {
    /// Style catalog JSON file. The built-in sample catalog is used when omitted.
    #[arg(long, env = "ARCHISTYLE_CATALOG")]
    catalog: Option<PathBuf>,

    /// Progress state file. Progress is kept in memory when omitted.
    #[arg(long, env = "ARCHISTYLE_STATE")]
    state: Option<PathBuf>,

    /// Fixed random seed for reproducible rounds.
    #[arg(long)]
    seed: Option<u64>,

    /// Hint reveal delay per attribute, in milliseconds.
    #[arg(long, default_value_t = 300)]
    settle_ms: u64,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write sorted photo URLs from per-style folders into a catalog file.
    ScanPhotos {
        /// Directory containing one sub-directory per style.
        #[arg(long)]
        photos: PathBuf,

        /// Catalog JSON file to update in place.
        #[arg(long)]
        catalog: PathBuf,

        /// URL path segment the photo directory is served under.
        #[arg(long, default_value = "archistyle_photos")]
        url_prefix: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::ScanPhotos {
            photos,
            catalog,
            url_prefix,
        }) => {
            let report = assets::scan_photos(&photos, &catalog, &url_prefix)?;
            for (style, count) in &report.updated {
                println!("Updated {count} photos for: {style}");
            }
            for folder in &report.skipped {
                println!("Skipped folder with no matching style: {folder}");
            }
            Ok(())
        }
        None => {
            let config = HeadlessConfig {
                catalog: cli.catalog,
                state: cli.state,
                seed: cli.seed,
                settle_delay_per_hint: Duration::from_millis(cli.settle_ms),
            };
            headless::run_headless(config).await
        }
    }
}
