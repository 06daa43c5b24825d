//! Domain entities - Objects with identity and lifecycle, plus the
//! ephemeral snapshots the display renders

mod display_settings;
mod news_article;
mod note;
mod weather_snapshot;

pub use display_settings::{Brightness, DisplaySettings};
pub use news_article::NewsArticle;
pub use note::Note;
pub use weather_snapshot::{ForecastDay, WeatherSnapshot};
