//! WeatherAPI.com response models
//!
//! Only the fields the mirror uses are modelled; everything else in the
//! payload is ignored.

use serde::{Deserialize, Serialize};

/// Icon code used when the icon URL yields nothing
const FALLBACK_ICON_CODE: &str = "01d";

/// Extract the condition code from an icon URL
///
/// `//cdn.weatherapi.com/weather/64x64/day/113.png` becomes `"113"`.
#[must_use]
pub fn icon_code_from_url(url: &str) -> String {
    let file = url.rsplit('/').next().unwrap_or_default();
    let code = file.replacen(".png", "", 1);
    if code.is_empty() {
        FALLBACK_ICON_CODE.to_string()
    } else {
        code
    }
}

/// `forecast.json` response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub location: Location,
    pub current: CurrentConditions,
    pub forecast: Forecast,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub region: String,
    pub country: String,
    /// Local time at the location, e.g. `2026-10-19 14:05`
    #[serde(default)]
    pub localtime: String,
}

impl Location {
    /// `"<name>, <country>"`
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    /// Icon URL (protocol-relative)
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub code: u32,
}

impl Condition {
    /// Condition code taken from the icon URL
    #[must_use]
    pub fn icon_code(&self) -> String {
        icon_code_from_url(&self.icon)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: Condition,
    pub wind_kph: f64,
    pub wind_mph: f64,
    pub humidity: u8,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub vis_km: f64,
    pub vis_miles: f64,
    #[serde(default)]
    pub uv: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    /// `YYYY-MM-DD`
    pub date: String,
    pub day: DayConditions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayConditions {
    pub maxtemp_c: f64,
    pub maxtemp_f: f64,
    pub mintemp_c: f64,
    pub mintemp_f: f64,
    pub condition: Condition,
}
