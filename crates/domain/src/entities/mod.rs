//! Domain entities - Records returned by geographic lookups

mod elevation;
mod postal_code;
mod wikipedia_place;

pub use elevation::Elevation;
pub use postal_code::PostalCode;
pub use wikipedia_place::WikipediaPlace;
