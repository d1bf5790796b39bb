//! WMATA CLI
//!
//! Command-line access to the WMATA rail and bus API. Prints each payload as
//! pretty JSON.

#![allow(clippy::print_stdout)]

mod commands;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wmata::{HttpWmataClient, WmataConfig};

use crate::commands::Commands;

/// WMATA CLI
#[derive(Parser)]
#[command(name = "wmata")]
#[command(author, version, about = "Query the WMATA rail and bus API", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// API key (overrides WMATA_API_KEY and wmata.toml)
    #[arg(long, env = "WMATA_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Override the API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the client configuration from `wmata.toml`, the environment and flags
///
/// Flags take precedence over the environment, which takes precedence over
/// the file. `vars` replaces the process environment when given.
fn build_config(
    cli: &Cli,
    vars: Option<config::Map<String, String>>,
) -> anyhow::Result<WmataConfig> {
    let mut config = WmataConfig::load_layered(vars, cli.api_key.clone())
        .context("no API key: pass --api-key, set WMATA_API_KEY or add it to wmata.toml")?;

    if let Some(base_url) = &cli.base_url {
        config.base_url.clone_from(base_url);
    }
    if cli.timeout.is_some() {
        config.timeout_secs = cli.timeout;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = build_config(&cli, None)?;
    debug!(?config, "Configuration loaded");
    let client = HttpWmataClient::new(&config)?;

    let payload = commands::run(&cli.command, &client).await?;
    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}
