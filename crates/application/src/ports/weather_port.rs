//! Weather service port
//!
//! Defines the interface for fetching a reshaped forecast for one location.

use async_trait::async_trait;
use domain::entities::WeatherSnapshot;
use domain::value_objects::UnitSystem;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather lookups
///
/// Implementations make a single upstream call per invocation; there is no
/// caching or retry behind this trait.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Current conditions and the daily forecast for `location`, with every
    /// value already expressed in `units`
    ///
    /// # Errors
    ///
    /// - `Configuration` if no API key is set (no request is made)
    /// - `InvalidRequest` if the upstream rejects the location
    /// - `NotAuthorized` if the upstream rejects the key
    /// - `Upstream` for any other non-success status
    /// - `ExternalService` for transport or decode failures
    async fn get_weather(
        &self,
        location: &str,
        units: UnitSystem,
    ) -> Result<WeatherSnapshot, ApplicationError>;
}
