//! Postal code entity

use serde::{Deserialize, Serialize};

use crate::value_objects::Position;

/// A postal code matching a place name search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostalCode {
    /// Place name the code belongs to
    pub place_name: String,
    /// First-level administrative division name (e.g. province, state)
    pub admin_name1: String,
    /// First-level administrative division code
    pub admin_code1: String,
    /// Second-level administrative division name (e.g. county)
    pub admin_name2: String,
    /// Second-level administrative division code
    pub admin_code2: String,
    /// ISO 3166-1 alpha-2 country code
    pub country_code: String,
    /// The postal code itself
    pub postal_code: String,
    /// Position of the postal code area
    pub position: Position,
}
