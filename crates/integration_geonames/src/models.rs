//! Raw GeoNames API response shapes
//!
//! Every field defaults when absent or `null` so that partial payloads still
//! decode. Conversion into domain entities renames fields and groups
//! `lat`/`lng` into a [`Position`].

use domain::{Elevation, ElevationSource, Position, PostalCode, WikipediaPlace};
use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response of the `srtm1JSON`, `srtm3JSON`, `astergdemJSON` and `gtopo30JSON`
/// endpoints. Only the key matching the requested source is present.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ElevationResponse {
    pub srtm1: Option<i32>,
    pub srtm3: Option<i32>,
    pub astergdem: Option<i32>,
    pub gtopo30: Option<i32>,
    #[serde(deserialize_with = "null_as_default")]
    pub lat: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub lng: f64,
}

impl ElevationResponse {
    pub fn into_elevation(self, source: ElevationSource) -> Elevation {
        let value = match source {
            ElevationSource::Srtm1 => self.srtm1,
            ElevationSource::Srtm3 => self.srtm3,
            ElevationSource::AsterGdem => self.astergdem,
            ElevationSource::Gtopo30 => self.gtopo30,
        };

        Elevation {
            source,
            position: Position::new_unchecked(self.lat, self.lng),
            value: value.unwrap_or_default(),
        }
    }
}

/// Response of `postalCodeSearchJSON`
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct PostalCodeResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub postal_codes: Vec<RawPostalCode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawPostalCode {
    #[serde(deserialize_with = "null_as_default")]
    pub place_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub admin_name1: String,
    #[serde(deserialize_with = "null_as_default")]
    pub admin_code1: String,
    #[serde(deserialize_with = "null_as_default")]
    pub admin_name2: String,
    #[serde(deserialize_with = "null_as_default")]
    pub admin_code2: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub postal_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lat: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub lng: f64,
}

impl PostalCodeResponse {
    pub fn into_postal_codes(self) -> Vec<PostalCode> {
        self.postal_codes
            .into_iter()
            .map(|raw| PostalCode {
                place_name: raw.place_name,
                admin_name1: raw.admin_name1,
                admin_code1: raw.admin_code1,
                admin_name2: raw.admin_name2,
                admin_code2: raw.admin_code2,
                country_code: raw.country_code,
                postal_code: raw.postal_code,
                position: Position::new_unchecked(raw.lat, raw.lng),
            })
            .collect()
    }
}

/// Response of `wikipediaSearchJSON`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WikipediaResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub geonames: Vec<RawWikipediaEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawWikipediaEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub elevation: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub geo_name_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub feature: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rank: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub lang: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lat: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub lng: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub wikipedia_url: String,
}

impl WikipediaResponse {
    pub fn into_places(self) -> Vec<WikipediaPlace> {
        self.geonames
            .into_iter()
            .map(|raw| WikipediaPlace {
                title: raw.title,
                summary: raw.summary,
                elevation: raw.elevation,
                geoname_id: raw.geo_name_id,
                feature: raw.feature,
                rank: raw.rank,
                language: raw.lang,
                country_code: raw.country_code,
                position: Position::new_unchecked(raw.lat, raw.lng),
                url: raw.wikipedia_url,
            })
            .collect()
    }
}

/// Error envelope GeoNames returns with HTTP 200, e.g.
/// `{"status": {"message": "user account not enabled to use the free webservice", "value": 10}}`
#[derive(Debug, Deserialize)]
pub(crate) struct ServiceStatus {
    pub message: String,
    #[serde(default)]
    pub value: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elevation_picks_requested_source() {
        let raw: ElevationResponse =
            serde_json::from_str(r#"{"srtm1":375,"lng":-6.083,"lat":54.166}"#).unwrap();
        let elevation = raw.into_elevation(ElevationSource::Srtm1);
        assert_eq!(elevation.source, ElevationSource::Srtm1);
        assert_eq!(elevation.value, 375);
        assert!((elevation.position.lat - 54.166).abs() < f64::EPSILON);
        assert!((elevation.position.lng + 6.083).abs() < f64::EPSILON);
    }

    #[test]
    fn test_elevation_missing_value_defaults_to_zero() {
        let raw: ElevationResponse =
            serde_json::from_str(r#"{"srtm3":120,"lng":1.0,"lat":2.0}"#).unwrap();
        assert_eq!(raw.into_elevation(ElevationSource::Gtopo30).value, 0);
    }

    #[test]
    fn test_elevation_empty_object_decodes() {
        let raw: ElevationResponse = serde_json::from_str("{}").unwrap();
        let elevation = raw.into_elevation(ElevationSource::AsterGdem);
        assert_eq!(elevation.value, 0);
        assert_eq!(elevation.position, Position::default());
    }

    #[test]
    fn test_postal_codes_map_all_fields() {
        let json = r#"{"postalCodes":[{
            "adminCode2":"MO","adminCode1":"C","adminName2":"Mayo","lng":-9.3,
            "countryCode":"IE","postalCode":"F23","adminName1":"Connacht",
            "ISO3166-2":"C","placeName":"Castlebar","lat":53.85
        }]}"#;
        let raw: PostalCodeResponse = serde_json::from_str(json).unwrap();
        let codes = raw.into_postal_codes();
        assert_eq!(codes.len(), 1);
        assert_eq!(
            codes[0],
            PostalCode {
                place_name: "Castlebar".to_string(),
                admin_name1: "Connacht".to_string(),
                admin_code1: "C".to_string(),
                admin_name2: "Mayo".to_string(),
                admin_code2: "MO".to_string(),
                country_code: "IE".to_string(),
                postal_code: "F23".to_string(),
                position: Position::new_unchecked(53.85, -9.3),
            }
        );
    }

    #[test]
    fn test_postal_codes_missing_array() {
        let raw: PostalCodeResponse = serde_json::from_str("{}").unwrap();
        assert!(raw.into_postal_codes().is_empty());
    }

    #[test]
    fn test_wikipedia_missing_optional_fields() {
        let json = r#"{"geonames":[{"title":"Castlebar","lat":53.8608,"lng":-9.2988,
            "countryCode":"IE","rank":100,"lang":"en",
            "wikipediaUrl":"en.wikipedia.org/wiki/Castlebar","extra":{"nested":true}}]}"#;
        let raw: WikipediaResponse = serde_json::from_str(json).unwrap();
        let places = raw.into_places();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].title, "Castlebar");
        assert_eq!(places[0].geoname_id, 0);
        assert_eq!(places[0].elevation, 0);
        assert!(places[0].feature.is_empty());
        assert_eq!(places[0].url, "en.wikipedia.org/wiki/Castlebar");
    }

    #[test]
    fn test_explicit_nulls_decode_as_missing() {
        let json = r#"{"geonames":[{"title":"Castlebar","summary":null,"elevation":null,
            "geoNameId":null,"rank":null,"lat":53.8608,"lng":null}]}"#;
        let raw: WikipediaResponse = serde_json::from_str(json).unwrap();
        let places = raw.into_places();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].title, "Castlebar");
        assert!(places[0].summary.is_empty());
        assert_eq!(places[0].elevation, 0);
        assert_eq!(places[0].geoname_id, 0);
        assert!(places[0].position.lng.abs() < f64::EPSILON);

        let raw: PostalCodeResponse = serde_json::from_str(r#"{"postalCodes":null}"#).unwrap();
        assert!(raw.into_postal_codes().is_empty());

        let raw: ElevationResponse =
            serde_json::from_str(r#"{"srtm1":null,"lat":null,"lng":1.5}"#).unwrap();
        let elevation = raw.into_elevation(ElevationSource::Srtm1);
        assert_eq!(elevation.value, 0);
        assert_eq!(elevation.position, Position::new_unchecked(0.0, 1.5));
    }

    #[test]
    fn test_coordinates_decode_exactly() {
        let raw: ElevationResponse =
            serde_json::from_str(r#"{"srtm3":120,"lat":45.5,"lng":19.931045688149446}"#).unwrap();
        assert_eq!(raw.lng.to_bits(), 19.931_045_688_149_446_f64.to_bits());

        let raw: PostalCodeResponse = serde_json::from_str(
            r#"{"postalCodes":[{"placeName":"X","lat":-33.868820587413406,"lng":151.20929964062803}]}"#,
        )
        .unwrap();
        let position = raw.into_postal_codes()[0].position;
        assert_eq!(position.lat.to_bits(), (-33.868_820_587_413_406_f64).to_bits());
        assert_eq!(position.lng.to_bits(), 151.209_299_640_628_03_f64.to_bits());
    }

    #[test]
    fn test_service_status_parsing() {
        let status: ServiceStatus = serde_json::from_str(
            r#"{"message":"invalid user","value":10}"#,
        )
        .unwrap();
        assert_eq!(status.message, "invalid user");
        assert_eq!(status.value, 10);
    }
}
