//! Subcommand definitions and execution

use clap::Subcommand;
use integration_geonames::{ElevationSource, GeoDataClient};
use serde_json::Value;
use tracing::debug;

/// Lookups exposed by the CLI
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Sample terrain elevation at a coordinate pair
    ///
    /// Example: geonames-cli elevation --source srtm3 54.166 -6.083
    Elevation {
        /// Elevation model (srtm1, srtm3, astergdem, gtopo30)
        #[arg(short, long, default_value = "srtm1")]
        source: ElevationSource,

        /// Latitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lng: f64,
    },

    /// Search postal codes by place name
    Postal {
        /// Place name, e.g. "Castlebar"
        place: String,

        /// ISO 3166-1 alpha-2 country code
        country: String,
    },

    /// Search geo-referenced Wikipedia articles
    Wikipedia {
        /// Search text, matched against the article title
        query: String,

        /// ISO 3166-1 alpha-2 country code
        country: String,

        /// Maximum number of results
        #[arg(short = 'n', long, default_value_t = 10)]
        max_rows: u32,
    },
}

/// Execute a command and return its result as JSON
pub async fn run(command: &Command, client: &dyn GeoDataClient) -> anyhow::Result<Value> {
    debug!(?command, "Running command");

    let value = match command {
        Command::Elevation { source, lat, lng } => {
            serde_json::to_value(client.get_elevation(*source, *lat, *lng).await?)?
        },
        Command::Postal { place, country } => {
            serde_json::to_value(client.search_postal_codes(place, country).await?)?
        },
        Command::Wikipedia {
            query,
            country,
            max_rows,
        } => serde_json::to_value(client.search_wikipedia(query, country, *max_rows).await?)?,
    };

    Ok(value)
}
