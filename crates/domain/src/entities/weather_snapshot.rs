//! Weather snapshot - Reshaped forecast data for one location
//!
//! Values are already expressed in the requested unit system.

use serde::{Deserialize, Serialize};

use crate::value_objects::WeatherIconKind;

/// One forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    /// Short weekday label ("Mon")
    pub day: String,
    pub high: i32,
    pub low: i32,
    /// Condition code extracted from the icon URL
    pub icon: String,
    pub condition: String,
}

/// Current conditions plus the daily forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// "<name>, <country>"
    pub location: String,
    pub temperature: i32,
    pub description: String,
    /// Relative humidity in percent
    pub humidity: u8,
    pub wind_speed: f64,
    pub icon: String,
    pub forecast: Vec<ForecastDay>,
    pub feels_like: i32,
    pub uv: f64,
    pub visibility: f64,
    /// Local time at the location as reported upstream
    pub local_time: String,
}

impl WeatherSnapshot {
    /// Icon category for the current conditions
    #[must_use]
    pub fn icon_kind(&self) -> WeatherIconKind {
        WeatherIconKind::resolve(&self.icon, &self.description)
    }
}

impl ForecastDay {
    /// Icon category for this day
    #[must_use]
    pub fn icon_kind(&self) -> WeatherIconKind {
        WeatherIconKind::resolve(&self.icon, &self.condition)
    }
}
