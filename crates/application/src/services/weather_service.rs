//! Weather service
//!
//! Resolves request defaults and delegates to the weather port.

use std::{fmt, sync::Arc};

use domain::entities::WeatherSnapshot;
use domain::value_objects::UnitSystem;
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::WeatherPort};

/// Location used when a request does not name one
pub const DEFAULT_LOCATION: &str = "Tunis";

/// Service for weather lookups
#[derive(Clone)]
pub struct WeatherService {
    port: Arc<dyn WeatherPort>,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService").finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a new weather service
    #[must_use]
    pub fn new(port: Arc<dyn WeatherPort>) -> Self {
        Self { port }
    }

    /// Weather for the given (optional) location and unit system
    ///
    /// A missing or blank location falls back to [`DEFAULT_LOCATION`]. Units
    /// are metric only when absent or exactly `metric`; any other value
    /// means imperial.
    #[instrument(skip(self))]
    pub async fn get_weather(
        &self,
        location: Option<&str>,
        units: Option<&str>,
    ) -> Result<WeatherSnapshot, ApplicationError> {
        let location = location
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LOCATION);
        let units = UnitSystem::coerce(units);

        debug!(%location, %units, "Fetching weather");
        self.port.get_weather(location, units).await
    }
}
