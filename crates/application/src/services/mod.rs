//! Application services - Use case implementations

mod news_service;
mod notes_service;
mod weather_service;

pub use news_service::{DEFAULT_CATEGORY, DEFAULT_COUNTRY, NewsService};
pub use notes_service::NotesService;
pub use weather_service::{DEFAULT_LOCATION, WeatherService};
