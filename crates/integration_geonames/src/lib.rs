//! GeoNames web service integration
//!
//! Client for the [GeoNames](https://www.geonames.org/export/web-services.html)
//! JSON web services: elevation sampling (SRTM1, SRTM3, ASTER GDEM, GTOPO30),
//! postal code search and geo-referenced Wikipedia search.
//!
//! # Architecture
//!
//! [`GeoDataClient`] defines the operations, implemented by [`GeoNamesClient`].
//! Every operation runs through one private pipeline that builds the request
//! URL, performs a single GET, checks the status and decodes the JSON body into
//! a domain entity. There is no caching and no retrying.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geonames::{GeoDataClient, GeoNamesClient, GeoNamesConfig};
//!
//! let client = GeoNamesClient::new(GeoNamesConfig::new("my-account"))?;
//!
//! let elevation = client.srtm1(54.166, -6.083).await?;
//! let codes = client.search_postal_codes("Castlebar", "IE").await?;
//! let places = client.search_wikipedia("Castlebar", "IE", 5).await?;
//! ```

mod client;
mod config;
mod error;
mod models;
mod query;

pub use client::{GeoDataClient, GeoNamesClient};
pub use config::{DEFAULT_USER_AGENT, GeoNamesConfig, USERNAME_ENV_VAR};
pub use domain::{Elevation, ElevationSource, Position, PostalCode, WikipediaPlace};
pub use error::GeoNamesError;
pub use query::{QueryParams, build_url, format_coordinate};
