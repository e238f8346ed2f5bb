//! GeoNames web service client
//!
//! HTTP client for the GeoNames JSON endpoints. All operations share one
//! request pipeline: validate, build URL, GET, check status, read body,
//! decode, translate.

use std::time::Duration;

use async_trait::async_trait;
use domain::{Elevation, ElevationSource, Position, PostalCode, WikipediaPlace};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::config::GeoNamesConfig;
use crate::error::GeoNamesError;
use crate::models::{ElevationResponse, PostalCodeResponse, ServiceStatus, WikipediaResponse};
use crate::query::{QueryParams, build_url};

const POSTAL_CODE_SEARCH_ENDPOINT: &str = "postalCodeSearchJSON";
const WIKIPEDIA_SEARCH_ENDPOINT: &str = "wikipediaSearchJSON";

/// Trait for geographic data clients
#[async_trait]
pub trait GeoDataClient: Send + Sync {
    /// Sample the elevation at a coordinate pair from one elevation model
    ///
    /// No-data sentinels are returned as regular values.
    ///
    /// # Errors
    ///
    /// Coordinates outside -90..=90 latitude or -180..=180 longitude are
    /// rejected with [`GeoNamesError::InvalidInput`] before any request is
    /// sent. Otherwise any failure of the request pipeline is returned.
    async fn get_elevation(
        &self,
        source: ElevationSource,
        latitude: f64,
        longitude: f64,
    ) -> Result<Elevation, GeoNamesError>;

    /// Find postal codes for a place name within a country
    ///
    /// # Errors
    ///
    /// An empty or whitespace-only `place_name` is rejected with
    /// [`GeoNamesError::InvalidArgument`] before any request is sent.
    /// `country_code` is passed through unchecked. Otherwise any failure of
    /// the request pipeline is returned.
    async fn search_postal_codes(
        &self,
        place_name: &str,
        country_code: &str,
    ) -> Result<Vec<PostalCode>, GeoNamesError>;

    /// Find geo-referenced Wikipedia articles matching a place name
    ///
    /// # Errors
    ///
    /// A `max_rows` of 0 or an empty or whitespace-only `query` is rejected
    /// with [`GeoNamesError::InvalidArgument`] before any request is sent.
    /// Otherwise any failure of the request pipeline is returned.
    async fn search_wikipedia(
        &self,
        query: &str,
        country_code: &str,
        max_rows: u32,
    ) -> Result<Vec<WikipediaPlace>, GeoNamesError>;
}

/// GeoNames HTTP client implementation
///
/// Immutable after construction; share it behind an `Arc` for concurrent use.
#[derive(Debug, Clone)]
pub struct GeoNamesClient {
    client: Client,
    headers: HeaderMap,
    timeout: Duration,
    config: GeoNamesConfig,
}

impl GeoNamesClient {
    /// Create a new GeoNames client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: GeoNamesConfig) -> Result<Self, GeoNamesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeoNamesError::Configuration(e.to_string()))?;

        Self::with_http_client(config, client)
    }

    /// Create a client that sends requests through a caller-supplied transport
    ///
    /// The configured headers and timeout are still applied to every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_http_client(config: GeoNamesConfig, client: Client) -> Result<Self, GeoNamesError> {
        config.validate().map_err(GeoNamesError::Configuration)?;
        let headers = build_headers(&config)?;

        Ok(Self {
            client,
            headers,
            timeout: Duration::from_secs(config.timeout_secs),
            config,
        })
    }

    /// Create a client whose username comes from `GEONAMES_USER`
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset or empty.
    pub fn from_env() -> Result<Self, GeoNamesError> {
        Self::new(GeoNamesConfig::from_env())
    }

    /// The configuration this client was built with
    #[must_use]
    pub const fn config(&self) -> &GeoNamesConfig {
        &self.config
    }

    /// Elevation from SRTM1 (~30m sample area; -32768 over oceans)
    ///
    /// # Errors
    ///
    /// See [`GeoDataClient::get_elevation`].
    pub async fn srtm1(&self, latitude: f64, longitude: f64) -> Result<Elevation, GeoNamesError> {
        self.get_elevation(ElevationSource::Srtm1, latitude, longitude)
            .await
    }

    /// Elevation from SRTM3 (3-arc-second grid, 60N to 56S; -32768 for no data)
    ///
    /// # Errors
    ///
    /// See [`GeoDataClient::get_elevation`].
    pub async fn srtm3(&self, latitude: f64, longitude: f64) -> Result<Elevation, GeoNamesError> {
        self.get_elevation(ElevationSource::Srtm3, latitude, longitude)
            .await
    }

    /// Elevation from ASTER GDEM (~30m sample area, 83N to 65S; -32768 over oceans)
    ///
    /// # Errors
    ///
    /// See [`GeoDataClient::get_elevation`].
    pub async fn astergdem(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Elevation, GeoNamesError> {
        self.get_elevation(ElevationSource::AsterGdem, latitude, longitude)
            .await
    }

    /// Elevation from GTOPO30 (~1km sample area; -9999 over oceans)
    ///
    /// # Errors
    ///
    /// See [`GeoDataClient::get_elevation`].
    pub async fn gtopo30(&self, latitude: f64, longitude: f64) -> Result<Elevation, GeoNamesError> {
        self.get_elevation(ElevationSource::Gtopo30, latitude, longitude)
            .await
    }

    /// Run one request against `endpoint` and translate the decoded body
    async fn execute<R, T, F>(
        &self,
        endpoint: &str,
        params: QueryParams,
        translate: F,
    ) -> Result<T, GeoNamesError>
    where
        R: DeserializeOwned,
        F: FnOnce(R) -> T + Send,
    {
        let params = params.with("username", self.config.username.as_str());
        let url = build_url(&self.config.base_url, endpoint, &params)?;

        debug!(%endpoint, url = %url, "Sending GeoNames request");

        let response = self
            .client
            .get(url)
            .headers(self.headers.clone())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|source| GeoNamesError::Transport { source })?;

        let status = response.status();
        debug!(status = %status, "Received GeoNames response");

        if status != StatusCode::OK {
            return Err(GeoNamesError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| {
            if source.is_timeout() {
                GeoNamesError::Transport { source }
            } else {
                GeoNamesError::BodyRead { source }
            }
        })?;

        let raw: R = decode_body(&body)?;
        Ok(translate(raw))
    }
}

#[async_trait]
impl GeoDataClient for GeoNamesClient {
    #[instrument(skip(self))]
    async fn get_elevation(
        &self,
        source: ElevationSource,
        latitude: f64,
        longitude: f64,
    ) -> Result<Elevation, GeoNamesError> {
        Position::new(latitude, longitude)?;

        let params = QueryParams::new().with_coordinates(latitude, longitude);
        let elevation = self
            .execute(source.endpoint(), params, |raw: ElevationResponse| {
                raw.into_elevation(source)
            })
            .await?;

        if elevation.is_no_data() {
            debug!(value = elevation.value, "No elevation data for position");
        }
        Ok(elevation)
    }

    #[instrument(skip(self))]
    async fn search_postal_codes(
        &self,
        place_name: &str,
        country_code: &str,
    ) -> Result<Vec<PostalCode>, GeoNamesError> {
        if place_name.trim().is_empty() {
            return Err(GeoNamesError::InvalidArgument(
                "place name must not be empty".to_string(),
            ));
        }

        let params = QueryParams::new()
            .with("placename", place_name)
            .with("country", country_code);

        let codes = self
            .execute(
                POSTAL_CODE_SEARCH_ENDPOINT,
                params,
                PostalCodeResponse::into_postal_codes,
            )
            .await?;

        debug!(count = codes.len(), "Postal codes found");
        Ok(codes)
    }

    #[instrument(skip(self))]
    async fn search_wikipedia(
        &self,
        query: &str,
        country_code: &str,
        max_rows: u32,
    ) -> Result<Vec<WikipediaPlace>, GeoNamesError> {
        if max_rows == 0 {
            return Err(GeoNamesError::InvalidArgument(format!(
                "max_rows must be a positive integer, got {max_rows}"
            )));
        }
        if query.trim().is_empty() {
            return Err(GeoNamesError::InvalidArgument(
                "query must not be empty".to_string(),
            ));
        }

        let params = QueryParams::new()
            .with("q", query)
            .with("title", query)
            .with("countryCode", country_code)
            .with("maxRows", max_rows.to_string());

        let places = self
            .execute(
                WIKIPEDIA_SEARCH_ENDPOINT,
                params,
                WikipediaResponse::into_places,
            )
            .await?;

        debug!(count = places.len(), "Wikipedia places found");
        Ok(places)
    }
}

/// Convert configured header pairs into a `HeaderMap`
fn build_headers(config: &GeoNamesConfig) -> Result<HeaderMap, GeoNamesError> {
    let mut headers = HeaderMap::with_capacity(config.headers.len());
    for (name, value) in &config.headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| GeoNamesError::Configuration(format!("invalid header name {name:?}: {e}")))?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            GeoNamesError::Configuration(format!("invalid value for header {name}: {e}"))
        })?;
        headers.insert(name, value);
    }
    Ok(headers)
}

/// Decode a response body, surfacing the service's in-band error envelope
fn decode_body<R: DeserializeOwned>(body: &[u8]) -> Result<R, GeoNamesError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|source| GeoNamesError::Decode { source })?;

    if let Some(status) = value
        .get("status")
        .and_then(|s| serde_json::from_value::<ServiceStatus>(s.clone()).ok())
    {
        warn!(code = status.value, message = %status.message, "GeoNames reported an error");
        return Err(GeoNamesError::Service {
            code: status.value,
            message: status.message,
        });
    }

    serde_json::from_value(value).map_err(|source| GeoNamesError::Decode { source })
}
