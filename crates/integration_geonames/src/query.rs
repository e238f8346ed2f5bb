//! Request URL construction
//!
//! Parameters are kept in insertion order and form-encoded into the query
//! string, so reserved characters in place names survive the trip.

use url::Url;

use crate::error::GeoNamesError;

/// Render a coordinate with the fixed 3-decimal precision the service expects
#[must_use]
pub fn format_coordinate(value: f64) -> String {
    format!("{value:.3}")
}

/// Ordered, string-keyed query parameters for one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    /// Create an empty parameter set
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a parameter
    #[must_use]
    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.0.push((key, value.into()));
        self
    }

    /// Append `lat` and `lng`, rendered with 3 decimals
    #[must_use]
    pub fn with_coordinates(self, latitude: f64, longitude: f64) -> Self {
        self.with("lat", format_coordinate(latitude))
            .with("lng", format_coordinate(longitude))
    }

    /// Look up the first value for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over the parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Number of parameters
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameters were added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Build `<base_url>/<endpoint>?<params>`
///
/// # Errors
///
/// Returns `InvalidBaseUrl` if the base URL does not parse, and
/// `Configuration` if it is not an http(s) URL.
pub fn build_url(
    base_url: &str,
    endpoint: &str,
    params: &QueryParams,
) -> Result<Url, GeoNamesError> {
    let raw = format!(
        "{}/{}",
        base_url.trim().trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    );

    let mut url = Url::parse(&raw).map_err(|source| GeoNamesError::InvalidBaseUrl {
        url: base_url.to_string(),
        source,
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(GeoNamesError::Configuration(format!(
            "base_url must be an http(s) URL, got {base_url:?}"
        )));
    }

    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params.iter());
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_format_coordinate_pads_and_rounds() {
        assert_eq!(format_coordinate(50.0), "50.000");
        assert_eq!(format_coordinate(55.166), "55.166");
        assert_eq!(format_coordinate(-6.0884), "-6.088");
        assert_eq!(format_coordinate(53.8608123), "53.861");
    }

    #[test]
    fn test_params_keep_insertion_order() {
        let params = QueryParams::new()
            .with_coordinates(50.0, 50.0)
            .with("username", "DummyUser");
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["lat", "lng", "username"]);
        assert_eq!(params.get("lng"), Some("50.000"));
        assert_eq!(params.get("missing"), None);
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_build_url_elevation() {
        let params = QueryParams::new()
            .with_coordinates(50.0, 50.0)
            .with("username", "DummyUser");
        let url = build_url("http://api.geonames.org", "srtm1JSON", &params).unwrap();
        assert_eq!(
            url.as_str(),
            "http://api.geonames.org/srtm1JSON?lat=50.000&lng=50.000&username=DummyUser"
        );
    }

    #[test]
    fn test_build_url_trims_slashes() {
        let params = QueryParams::new().with("username", "u");
        let url = build_url("http://localhost:8080/api/", "/postalCodeSearchJSON", &params).unwrap();
        assert_eq!(url.path(), "/api/postalCodeSearchJSON");
    }

    #[test]
    fn test_build_url_encodes_reserved_characters() {
        let params = QueryParams::new()
            .with("placename", "Fort William & Co")
            .with("country", "UK");
        let url = build_url("http://api.geonames.org", "postalCodeSearchJSON", &params).unwrap();
        assert_eq!(url.query(), Some("placename=Fort+William+%26+Co&country=UK"));

        let decoded: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(decoded[0], ("placename".to_string(), "Fort William & Co".to_string()));
    }

    #[test]
    fn test_build_url_rejects_malformed_base() {
        let err = build_url("not a url", "srtm1JSON", &QueryParams::new()).unwrap_err();
        assert!(matches!(err, GeoNamesError::InvalidBaseUrl { .. }));
        assert!(err.is_local());
    }

    #[test]
    fn test_build_url_rejects_non_http_scheme() {
        let err = build_url("ftp://example.com", "srtm1JSON", &QueryParams::new()).unwrap_err();
        assert!(matches!(err, GeoNamesError::Configuration(_)));
    }

    proptest! {
        #[test]
        fn coordinates_always_render_three_decimals(
            lat in -90.0f64..=90.0f64,
            lng in -180.0f64..=180.0f64
        ) {
            let params = QueryParams::new().with_coordinates(lat, lng);
            for key in ["lat", "lng"] {
                let value = params.get(key).unwrap();
                let (_, decimals) = value.split_once('.').unwrap();
                prop_assert_eq!(decimals.len(), 3);
                prop_assert!(decimals.chars().all(|c| c.is_ascii_digit()));
            }
        }

        #[test]
        fn encoded_values_decode_to_original(place in "[ -~]{1,40}") {
            let params = QueryParams::new().with("placename", place.clone());
            let url = build_url("http://api.geonames.org", "postalCodeSearchJSON", &params).unwrap();
            let decoded: Vec<(String, String)> = url.query_pairs().into_owned().collect();
            prop_assert_eq!(decoded, vec![("placename".to_string(), place)]);
        }
    }
}
