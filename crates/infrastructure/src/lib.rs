//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the SQLite note store
//! and the WeatherAPI.com / NewsAPI.org adapters. Also owns configuration
//! loading and tracing setup.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, DatabaseConfig, DisplayAppConfig, Environment, NewsAppConfig, ServerConfig,
    WeatherAppConfig,
};
pub use persistence::{ConnectionPool, DatabaseError, SqliteNoteStore, create_pool};
pub use telemetry::{LogFormat, TelemetryError, init_tracing};
