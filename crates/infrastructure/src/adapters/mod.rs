//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod news_adapter;
mod weather_adapter;

pub use news_adapter::NewsAdapter;
pub use weather_adapter::WeatherAdapter;
