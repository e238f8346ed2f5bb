//! Elevation source - Identifies the digital elevation model a sample comes from

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Digital elevation models offered by the GeoNames elevation endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElevationSource {
    /// SRTM1, ~30m x 30m sample area
    Srtm1,
    /// SRTM3, 3-arc-second grid (~90m), 60N to 56S
    Srtm3,
    /// ASTER Global DEM, ~30m x 30m, 83N to 65S
    #[serde(rename = "astergdem")]
    AsterGdem,
    /// GTOPO30, 30-arc-second grid (~1km)
    Gtopo30,
}

impl ElevationSource {
    /// All sources, in upstream documentation order
    pub const ALL: [Self; 4] = [Self::Srtm1, Self::Srtm3, Self::AsterGdem, Self::Gtopo30];

    /// Identifier used in upstream JSON payloads and for display
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Srtm1 => "srtm1",
            Self::Srtm3 => "srtm3",
            Self::AsterGdem => "astergdem",
            Self::Gtopo30 => "gtopo30",
        }
    }

    /// Upstream endpoint name, relative to the service base URL
    #[must_use]
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Self::Srtm1 => "srtm1JSON",
            Self::Srtm3 => "srtm3JSON",
            Self::AsterGdem => "astergdemJSON",
            Self::Gtopo30 => "gtopo30JSON",
        }
    }

    /// Value the service reports when no data exists for a point (e.g. oceans)
    #[must_use]
    pub const fn no_data_value(&self) -> i32 {
        match self {
            Self::Srtm1 | Self::Srtm3 | Self::AsterGdem => -32768,
            Self::Gtopo30 => -9999,
        }
    }
}

impl fmt::Display for ElevationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElevationSource {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "srtm1" => Ok(Self::Srtm1),
            "srtm3" => Ok(Self::Srtm3),
            "astergdem" | "aster" => Ok(Self::AsterGdem),
            "gtopo30" | "gtopo" => Ok(Self::Gtopo30),
            _ => Err(DomainError::UnknownElevationSource(s.to_string())),
        }
    }
}
