//! Value Objects - Immutable, identity-less domain primitives

mod note_id;
mod owner_id;
mod priority;
mod unit_system;
mod weather_icon;

pub use note_id::NoteId;
pub use owner_id::{DEFAULT_OWNER, OwnerId};
pub use priority::Priority;
pub use unit_system::UnitSystem;
pub use weather_icon::WeatherIconKind;
