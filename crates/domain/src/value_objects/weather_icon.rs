//! Weather icon category
//!
//! Maps WeatherAPI.com condition codes and condition text onto a small set of
//! display categories. Both lookups are table driven: codes are checked
//! first (in table order), then condition keywords, then the default.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display category for a weather condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherIconKind {
    /// Sunny / clear
    #[default]
    Sun,
    /// Partly cloudy, cloudy, overcast
    Cloud,
    /// Patchy or light rain
    Drizzle,
    /// Moderate or heavy rain
    Rain,
    /// Snow
    Snow,
    /// Thunder
    Thunder,
    /// Mist, fog
    Fog,
    /// Windy
    Wind,
}

/// Upstream condition codes per category, checked in order
const CODE_TABLE: &[(&[&str], WeatherIconKind)] = &[
    (&["116", "119", "122"], WeatherIconKind::Cloud),
    (&["113"], WeatherIconKind::Sun),
    (&["296", "299", "302", "305"], WeatherIconKind::Drizzle),
    (&["308", "311", "314", "317"], WeatherIconKind::Rain),
    (&["323", "326", "329", "332"], WeatherIconKind::Snow),
    (&["386", "389", "392", "395"], WeatherIconKind::Thunder),
    (&["143", "248", "260"], WeatherIconKind::Fog),
];

/// Lowercase condition keywords per category, checked in order
const KEYWORD_TABLE: &[(&[&str], WeatherIconKind)] = &[
    (&["sunny", "clear"], WeatherIconKind::Sun),
    (&["rain", "shower"], WeatherIconKind::Rain),
    (&["snow", "blizzard"], WeatherIconKind::Snow),
    (&["thunder", "storm"], WeatherIconKind::Thunder),
    (&["cloud", "overcast"], WeatherIconKind::Cloud),
    (&["mist", "fog"], WeatherIconKind::Fog),
    (&["wind"], WeatherIconKind::Wind),
];

impl WeatherIconKind {
    /// Resolve the category for an icon code and optional condition text
    #[must_use]
    pub fn resolve(icon_code: &str, condition: &str) -> Self {
        if let Some(kind) = Self::from_code(icon_code) {
            return kind;
        }
        let condition = condition.to_lowercase();
        KEYWORD_TABLE
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| condition.contains(k)))
            .map_or_else(Self::default, |(_, kind)| *kind)
    }

    /// Look up a category by condition code alone
    ///
    /// Codes are matched by containment since upstream codes are embedded in
    /// icon names.
    #[must_use]
    pub fn from_code(icon_code: &str) -> Option<Self> {
        CODE_TABLE
            .iter()
            .find(|(codes, _)| codes.iter().any(|c| icon_code.contains(c)))
            .map(|(_, kind)| *kind)
    }

    /// Terminal glyph for this category
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Sun => "☀️",
            Self::Cloud => "☁️",
            Self::Drizzle => "🌦️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Thunder => "⛈️",
            Self::Fog => "🌫️",
            Self::Wind => "🌬️",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Cloud => "Cloud",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Thunder => "Thunder",
            Self::Fog => "Fog",
            Self::Wind => "Wind",
        }
    }
}

impl fmt::Display for WeatherIconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
