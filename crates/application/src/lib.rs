//! Application layer - Use cases and orchestration
//!
//! Contains the port definitions for weather, news and note storage, and the
//! services the HTTP layer delegates to.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
