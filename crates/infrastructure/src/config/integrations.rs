//! Integration configurations: Weather and News.

use integration_news::NewsApiConfig;
use integration_weather::WeatherApiConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

// ==============================
// Weather Configuration
// ==============================

/// Weather service configuration (WeatherAPI.com)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Number of forecast days
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,

    /// Request timeout in seconds (unset: no timeout)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_weather_base_url() -> String {
    "https://api.weatherapi.com/v1".to_string()
}

const fn default_forecast_days() -> u8 {
    5
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            forecast_days: default_forecast_days(),
            timeout_secs: None,
        }
    }
}

impl WeatherAppConfig {
    /// Whether a non-empty API key is set
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        has_key(self.api_key.as_ref())
    }

    /// Convert to the client configuration
    #[must_use]
    pub fn to_client_config(&self) -> WeatherApiConfig {
        WeatherApiConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            forecast_days: self.forecast_days,
            timeout_secs: self.timeout_secs,
        }
    }
}

// ==============================
// News Configuration
// ==============================

/// News service configuration (NewsAPI.org)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsAppConfig {
    /// API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// API base URL
    #[serde(default = "default_news_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (unset: no timeout)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_news_base_url() -> String {
    "https://newsapi.org/v2".to_string()
}

impl Default for NewsAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_news_base_url(),
            timeout_secs: None,
        }
    }
}

impl NewsAppConfig {
    /// Whether a non-empty API key is set
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        has_key(self.api_key.as_ref())
    }

    /// Convert to the client configuration
    #[must_use]
    pub fn to_client_config(&self) -> NewsApiConfig {
        NewsApiConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

fn has_key(key: Option<&SecretString>) -> bool {
    key.is_some_and(|k| !k.expose_secret().trim().is_empty())
}
