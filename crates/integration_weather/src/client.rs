//! WeatherAPI.com client
//!
//! HTTP client for the `forecast.json` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::{error::WeatherError, models::ForecastResponse};

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherApiConfig {
    /// API base URL (default: <https://api.weatherapi.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// WeatherAPI.com key. Requests fail with
    /// [`WeatherError::MissingApiKey`] while this is unset.
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Number of forecast days requested (default: 5)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,

    /// Request timeout in seconds (default: none)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://api.weatherapi.com/v1".to_string()
}

const fn default_forecast_days() -> u8 {
    5
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            forecast_days: default_forecast_days(),
            timeout_secs: None,
        }
    }
}

impl WeatherApiConfig {
    /// Whether a non-empty API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }
}

/// Weather client trait for fetching forecast data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Current conditions plus daily forecast for a free-form location
    /// (city name, postcode, `lat,lon`)
    async fn forecast(&self, location: &str) -> Result<ForecastResponse, WeatherError>;
}

/// WeatherAPI.com HTTP client implementation
#[derive(Debug)]
pub struct WeatherApiClient {
    client: Client,
    config: WeatherApiConfig,
}

impl WeatherApiClient {
    /// Create a new client with the given configuration
    ///
    /// A missing API key is not an error here; it is reported per request so
    /// the server can start without one.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherApiConfig) -> Result<Self, WeatherError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Access the configuration
    #[must_use]
    pub const fn config(&self) -> &WeatherApiConfig {
        &self.config
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast.json", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl WeatherClient for WeatherApiClient {
    #[instrument(skip(self))]
    async fn forecast(&self, location: &str) -> Result<ForecastResponse, WeatherError> {
        let api_key = match &self.config.api_key {
            Some(key) if !key.expose_secret().trim().is_empty() => key,
            _ => {
                warn!("Weather API key is not configured");
                return Err(WeatherError::MissingApiKey);
            }
        };

        let url = self.forecast_url();
        let days = self.config.forecast_days.to_string();
        debug!(url = %url, days = %days, "Fetching forecast");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", api_key.expose_secret()),
                ("q", location),
                ("days", days.as_str()),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Weather API returned an error");
            return Err(WeatherError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let forecast: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        debug!(
            location = %forecast.location.name,
            days = forecast.forecast.forecastday.len(),
            "Forecast received"
        );
        Ok(forecast)
    }
}
