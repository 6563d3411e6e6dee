//! Explainer CLI binary.
//!
//! Generates one explainer video per invocation:
//! - Loads provider configuration (mock clients fill any gaps)
//! - Runs the script, voiceover and video stages
//! - Writes the report, `latest.json` and `manifest.json`

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, run_explainer};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Provider keys may live in .env
    dotenvy::dotenv().ok();

    // Initialize tracing; RUST_LOG overrides the verbosity flag
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if !run_explainer(&cli).await? {
        std::process::exit(1);
    }

    Ok(())
}
