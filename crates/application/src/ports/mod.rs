//! Port definitions
//!
//! Interfaces the application layer expects infrastructure adapters to
//! implement.

mod news_port;
mod note_store;
mod weather_port;

pub use news_port::NewsPort;
pub use note_store::NoteStore;
pub use weather_port::WeatherPort;

#[cfg(test)]
pub use news_port::MockNewsPort;
#[cfg(test)]
pub use note_store::MockNoteStore;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
