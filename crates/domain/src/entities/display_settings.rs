//! Display settings - What the mirror shows and where weather/news come from
//!
//! Process-local configuration handed to the display composer; nothing
//! persists it.

use serde::{Deserialize, Serialize};

use crate::value_objects::UnitSystem;

/// Display brightness in percent, clamped to `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u16", into = "u8")]
pub struct Brightness(u8);

impl Brightness {
    /// Create a brightness value, clamping to 100
    #[must_use]
    pub fn new(percent: u16) -> Self {
        Self(u8::try_from(percent.min(100)).unwrap_or(100))
    }

    /// Percent value
    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Brightness as a ratio in `0.0..=1.0`
    #[must_use]
    pub fn ratio(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self(80)
    }
}

impl From<u16> for Brightness {
    fn from(value: u16) -> Self {
        Self::new(value)
    }
}

impl From<Brightness> for u8 {
    fn from(value: Brightness) -> Self {
        value.0
    }
}

fn default_location() -> String {
    "Tunis".to_string()
}

fn default_news_categories() -> Vec<String> {
    vec!["technology".to_string()]
}

const fn default_true() -> bool {
    true
}

/// Mirror display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default)]
    pub units: UnitSystem,
    #[serde(default = "default_news_categories")]
    pub news_categories: Vec<String>,
    #[serde(default)]
    pub display_brightness: Brightness,
    #[serde(default = "default_true")]
    pub show_weather: bool,
    #[serde(default = "default_true")]
    pub show_news: bool,
    #[serde(default = "default_true")]
    pub show_clock: bool,
    #[serde(default = "default_true")]
    pub show_notes: bool,
}

impl DisplaySettings {
    /// The category the news widget follows (the first configured one)
    #[must_use]
    pub fn primary_news_category(&self) -> &str {
        self.news_categories
            .first()
            .map_or("technology", String::as_str)
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            location: default_location(),
            units: UnitSystem::default(),
            news_categories: default_news_categories(),
            display_brightness: Brightness::default(),
            show_weather: true,
            show_news: true,
            show_clock: true,
            show_notes: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = DisplaySettings::default();
        assert_eq!(settings.location, "Tunis");
        assert_eq!(settings.units, UnitSystem::Metric);
        assert_eq!(settings.primary_news_category(), "technology");
        assert_eq!(settings.display_brightness.percent(), 80);
        assert!(settings.show_weather && settings.show_news);
        assert!(settings.show_clock && settings.show_notes);
    }

    #[test]
    fn brightness_is_clamped() {
        assert_eq!(Brightness::new(250).percent(), 100);
        assert_eq!(Brightness::new(0).percent(), 0);
        assert!((Brightness::new(50).ratio() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let settings: DisplaySettings =
            serde_json::from_str(r#"{"units":"imperial","showNews":false,"displayBrightness":140}"#)
                .unwrap();
        assert_eq!(settings.units, UnitSystem::Imperial);
        assert!(!settings.show_news);
        assert_eq!(settings.display_brightness.percent(), 100);
        assert_eq!(settings.location, "Tunis");
    }

    #[test]
    fn empty_categories_fall_back() {
        let settings = DisplaySettings {
            news_categories: Vec::new(),
            ..DisplaySettings::default()
        };
        assert_eq!(settings.primary_news_category(), "technology");
    }
}
