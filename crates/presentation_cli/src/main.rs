//! GeoNames CLI
//!
//! Command-line interface for one-off GeoNames lookups. Results are printed to
//! stdout as pretty JSON, logs go to stderr.

#![allow(clippy::print_stdout)]

use clap::Parser;
use integration_geonames::GeoNamesClient;
use presentation_cli::{Cli, log_filter_from_verbosity, run, settings};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = settings::load(cli.config.as_deref(), &cli.overrides())?;
    let client = GeoNamesClient::new(config)?;

    let output = run(&cli.command, &client).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
