//! Value Objects - Immutable, identity-less domain primitives

mod elevation_source;
mod position;

pub use elevation_source::ElevationSource;
pub use position::Position;
