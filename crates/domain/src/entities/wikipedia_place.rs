//! Wikipedia place entity

use serde::{Deserialize, Serialize};

use crate::value_objects::Position;

/// A geo-referenced Wikipedia article returned by a place search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WikipediaPlace {
    /// Article title
    pub title: String,
    /// Article summary (truncated upstream)
    pub summary: String,
    /// Elevation in meters, 0 when the service has none
    pub elevation: i32,
    /// GeoNames identifier of the place, 0 when not linked
    pub geoname_id: i64,
    /// Feature classification (e.g. `city`, `landmark`)
    pub feature: String,
    /// Relevance rank (1-100)
    pub rank: i32,
    /// Article language code
    pub language: String,
    /// ISO 3166-1 alpha-2 country code
    pub country_code: String,
    /// Article position
    pub position: Position,
    /// Article URL (without scheme, as returned upstream)
    pub url: String,
}
