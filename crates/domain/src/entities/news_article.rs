//! News article snapshot

use serde::{Deserialize, Serialize};

/// A headline as shown by the news widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    /// Publication timestamp as sent upstream (ISO 8601)
    pub published_at: String,
    /// Source name
    pub source: String,
    pub url_to_image: Option<String>,
}

impl NewsArticle {
    /// Publication date (`YYYY-MM-DD`) when the timestamp parses
    #[must_use]
    pub fn published_date(&self) -> Option<String> {
        chrono::DateTime::parse_from_rfc3339(&self.published_at)
            .ok()
            .map(|dt| dt.format("%Y-%m-%d").to_string())
    }
}
