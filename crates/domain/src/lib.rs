//! Domain layer for the GeoNames client
//!
//! Contains the entities and value objects returned by geographic lookups,
//! and domain errors. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
