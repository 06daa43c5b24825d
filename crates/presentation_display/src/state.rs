//! Per-widget fetch state

use std::fmt::Display;

/// What a polling widget currently has to show
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WidgetState<T> {
    /// No fetch has finished yet
    #[default]
    Loading,
    /// The latest fetch failed
    Failed(String),
    /// The latest fetch succeeded
    Ready(T),
}

impl<T> WidgetState<T> {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for WidgetState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}
