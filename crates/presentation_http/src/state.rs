//! Application state shared across handlers

use std::sync::Arc;

use application::ports::{NewsPort, NoteStore, WeatherPort};
use application::{NewsService, NotesService, WeatherService};

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Notes collection
    pub notes: NotesService,
    /// Weather proxy
    pub weather: WeatherService,
    /// Headlines proxy
    pub news: NewsService,
}

impl AppState {
    /// Wire services over the given port implementations
    #[must_use]
    pub fn new(
        store: Arc<dyn NoteStore>,
        weather: Arc<dyn WeatherPort>,
        news: Arc<dyn NewsPort>,
    ) -> Self {
        Self {
            notes: NotesService::new(store),
            weather: WeatherService::new(weather),
            news: NewsService::new(news),
        }
    }
}
