//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `database`: SQLite database settings
//! - `integrations`: WeatherAPI.com and NewsAPI.org
//! - `display`: the mirror display process
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `config.toml`, `SMART_MIRROR_*` environment variables (sections separated
//! by `__`, e.g. `SMART_MIRROR_SERVER__PORT`), and finally the conventional
//! `WEATHER_API_KEY`, `NEWS_API_KEY` and `DATABASE_URL` variables.

mod database;
mod display;
mod integrations;
mod server;

use std::fmt;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use database::DatabaseConfig;
pub use display::DisplayAppConfig;
pub use integrations::{NewsAppConfig, WeatherAppConfig};
pub use server::ServerConfig;

/// Prefix for structured environment overrides
pub const ENV_PREFIX: &str = "SMART_MIRROR";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Application environment (development or production)
///
/// Production hides error details from HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Production environment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Weather configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// News configuration
    #[serde(default)]
    pub news: NewsAppConfig,

    /// Display configuration
    #[serde(default)]
    pub display: DisplayAppConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the given file (extension optional, file
    /// optional) and the environment
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name(path).required(false))
            // Override with environment variables (e.g., SMART_MIRROR_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.apply_conventional_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Apply `WEATHER_API_KEY`, `NEWS_API_KEY` and `DATABASE_URL`
    ///
    /// `lookup` resolves a variable name to its value; empty values are
    /// ignored.
    pub fn apply_conventional_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = lookup("WEATHER_API_KEY") {
            debug!("Using WEATHER_API_KEY from environment");
            self.weather.api_key = Some(SecretString::from(key));
        }
        if let Some(key) = lookup("NEWS_API_KEY") {
            debug!("Using NEWS_API_KEY from environment");
            self.news.api_key = Some(SecretString::from(key));
        }
        if let Some(url) = lookup("DATABASE_URL") {
            debug!("Using DATABASE_URL from environment");
            self.database.set_url(&url);
        }
    }

    /// Whether running in production
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}
