//! Unit system value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display convention for temperatures and speeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Celsius, km/h, km
    #[default]
    Metric,
    /// Fahrenheit, mph, miles
    Imperial,
}

impl UnitSystem {
    /// Parse a query parameter
    ///
    /// Absent or empty means metric. Otherwise only the exact string
    /// `metric` selects metric; every other value selects imperial.
    #[must_use]
    pub fn coerce(value: Option<&str>) -> Self {
        match value {
            None | Some("" | "metric") => Self::Metric,
            Some(_) => Self::Imperial,
        }
    }

    /// Query/wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    /// Temperature suffix
    #[must_use]
    pub const fn temperature_symbol(&self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    /// Wind speed suffix
    #[must_use]
    pub const fn speed_unit(&self) -> &'static str {
        match self {
            Self::Metric => "km/h",
            Self::Imperial => "mph",
        }
    }

    /// Visibility suffix
    #[must_use]
    pub const fn distance_unit(&self) -> &'static str {
        match self {
            Self::Metric => "km",
            Self::Imperial => "mi",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
