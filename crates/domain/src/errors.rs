//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates outside the valid latitude/longitude ranges
    #[error(
        "Invalid coordinates ({lat}, {lng}): latitude must be -90 to 90, longitude must be -180 to 180"
    )]
    InvalidCoordinates { lat: f64, lng: f64 },

    /// Elevation source name not recognised
    #[error("Unknown elevation source: {0}")]
    UnknownElevationSource(String),
}
