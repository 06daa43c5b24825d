//! Display widgets
//!
//! Each widget owns its state and timers; none of them share a fetch cache.

pub mod clock;
pub mod news;
pub mod notes;
pub mod weather;

pub use clock::{ClockView, ClockWidget};
pub use news::{NewsRotation, NewsWidget};
pub use notes::{NotesBoard, NotesError, NotesWidget};
pub use weather::WeatherWidget;
