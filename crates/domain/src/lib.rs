//! Domain layer for the smart mirror
//!
//! Contains the note entity, the ephemeral weather/news snapshots, display
//! settings, value objects, and domain errors. No I/O happens here.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
