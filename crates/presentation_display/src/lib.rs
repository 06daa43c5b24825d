//! Smart mirror terminal display
//!
//! Polls the mirror API from independent widgets and composes their output
//! into one frame. Notes can be added and toggled from stdin.

pub mod client;
pub mod command;
pub mod composer;
pub mod poller;
pub mod state;
pub mod widgets;

pub use client::{ClientError, MirrorApi, MirrorApiClient};
pub use command::{Command, CommandError};
pub use composer::{Composer, ComposerOptions, Sections, compose};
pub use state::WidgetState;
