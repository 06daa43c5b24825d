//! WeatherAPI.com integration
//!
//! Client for the WeatherAPI.com forecast endpoint
//! (<https://www.weatherapi.com/docs/>). One call returns current conditions
//! plus a daily forecast; an API key is required.

pub mod client;
mod error;
mod models;

pub use client::{WeatherApiClient, WeatherApiConfig, WeatherClient};
pub use error::WeatherError;
pub use models::{
    Condition, CurrentConditions, DayConditions, ForecastDay, ForecastResponse, Location,
    icon_code_from_url,
};
