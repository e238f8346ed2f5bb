//! Elevation sample entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{ElevationSource, Position};

/// Elevation in meters at a sampled position, as reported by one elevation model
///
/// No-data sentinels (see [`ElevationSource::no_data_value`]) are kept verbatim
/// in `value`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Elevation {
    /// Elevation model the value was sampled from
    pub source: ElevationSource,
    /// Position reported back by the service
    pub position: Position,
    /// Elevation in meters, or the source's no-data sentinel
    pub value: i32,
}

impl Elevation {
    /// Whether the value is the source's "no data" sentinel
    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        self.value == self.source.no_data_value()
    }
}
