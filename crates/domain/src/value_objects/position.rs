//! Geographic position value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in degrees (-90 to 90)
    pub lat: f64,
    /// Longitude in degrees (-180 to 180)
    pub lng: f64,
}

impl Position {
    /// Create a new position with range validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]. NaN is rejected by the same check.
    pub fn new(lat: f64, lng: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(DomainError::InvalidCoordinates { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    /// Create a position without validation
    ///
    /// Used for values reported by the upstream service, which are passed
    /// through as received.
    #[must_use]
    pub const fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let pos = Position::new(53.85, -9.3).expect("valid coordinates");
        assert!((pos.lat - 53.85).abs() < f64::EPSILON);
        assert!((pos.lng + 9.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(Position::new(90.0, 180.0).is_ok());
        assert!(Position::new(-90.0, -180.0).is_ok());
        assert!(Position::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_coordinates() {
        assert!(Position::new(91.0, 0.0).is_err());
        assert!(Position::new(-91.0, 0.0).is_err());
        assert!(Position::new(0.0, 181.0).is_err());
        assert!(Position::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_nan_rejected() {
        assert!(Position::new(f64::NAN, 0.0).is_err());
        assert!(Position::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_unchecked_passes_through() {
        let pos = Position::new_unchecked(120.0, -500.0);
        assert!((pos.lat - 120.0).abs() < f64::EPSILON);
        assert!((pos.lng + 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display() {
        let pos = Position::new_unchecked(54.166, -6.083);
        assert_eq!(pos.to_string(), "54.166000, -6.083000");
    }

    #[test]
    fn test_serialization() {
        let pos = Position::new_unchecked(53.354, -6.2545);
        let json = serde_json::to_string(&pos).expect("serialize");
        assert_eq!(json, r#"{"lat":53.354,"lng":-6.2545}"#);

        let deserialized: Position = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(pos, deserialized);
    }
}
