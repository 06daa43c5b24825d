//! Smart mirror HTTP presentation layer
//!
//! JSON API consumed by the display: weather and news proxies, the notes
//! collection, and liveness/readiness checks.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse, set_expose_internal_errors};
pub use routes::create_router;
pub use state::AppState;
