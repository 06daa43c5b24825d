//! Display process configuration.

use domain::entities::{Brightness, DisplaySettings};
use domain::value_objects::{DEFAULT_OWNER, OwnerId, UnitSystem};
use serde::{Deserialize, Serialize};

use super::default_true;

/// Configuration for the mirror display binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayAppConfig {
    /// Base URL of the Smart Mirror HTTP API
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Whose notes to show
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Maximum active notes rendered
    #[serde(default = "default_max_notes")]
    pub max_notes: usize,

    /// Maximum articles kept for rotation
    #[serde(default = "default_max_articles")]
    pub max_articles: usize,

    /// Two-letter country code for headlines
    #[serde(default = "default_news_country")]
    pub news_country: String,

    /// Weather location
    #[serde(default = "default_location")]
    pub location: String,

    /// Unit system
    #[serde(default)]
    pub units: UnitSystem,

    /// News categories; the first one is shown
    #[serde(default = "default_news_categories")]
    pub news_categories: Vec<String>,

    /// Brightness in percent (clamped to 100)
    #[serde(default = "default_brightness")]
    pub brightness: u16,

    #[serde(default = "default_true")]
    pub show_weather: bool,

    #[serde(default = "default_true")]
    pub show_news: bool,

    #[serde(default = "default_true")]
    pub show_clock: bool,

    #[serde(default = "default_true")]
    pub show_notes: bool,
}

fn default_server_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

fn default_owner() -> String {
    DEFAULT_OWNER.to_string()
}

const fn default_max_notes() -> usize {
    5
}

const fn default_max_articles() -> usize {
    5
}

fn default_news_country() -> String {
    "us".to_string()
}

fn default_location() -> String {
    "Tunis".to_string()
}

fn default_news_categories() -> Vec<String> {
    vec!["technology".to_string()]
}

const fn default_brightness() -> u16 {
    80
}

impl DisplayAppConfig {
    /// Settings value handed to the composer
    #[must_use]
    pub fn settings(&self) -> DisplaySettings {
        DisplaySettings {
            location: self.location.clone(),
            units: self.units,
            news_categories: self.news_categories.clone(),
            display_brightness: Brightness::new(self.brightness),
            show_weather: self.show_weather,
            show_news: self.show_news,
            show_clock: self.show_clock,
            show_notes: self.show_notes,
        }
    }

    /// Owner as a value object (blank means the default owner)
    #[must_use]
    pub fn owner_id(&self) -> OwnerId {
        OwnerId::new(self.owner.as_str())
    }
}

impl Default for DisplayAppConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            owner: default_owner(),
            max_notes: default_max_notes(),
            max_articles: default_max_articles(),
            news_country: default_news_country(),
            location: default_location(),
            units: UnitSystem::default(),
            news_categories: default_news_categories(),
            brightness: default_brightness(),
            show_weather: true,
            show_news: true,
            show_clock: true,
            show_notes: true,
        }
    }
}
