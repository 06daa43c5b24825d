//! News service

use std::{fmt, sync::Arc};

use domain::entities::NewsArticle;
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::NewsPort};

/// Category used when a request does not name one
pub const DEFAULT_CATEGORY: &str = "technology";

/// Country used when a request does not name one
pub const DEFAULT_COUNTRY: &str = "us";

/// Service for headline lookups
#[derive(Clone)]
pub struct NewsService {
    port: Arc<dyn NewsPort>,
}

impl fmt::Debug for NewsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsService").finish_non_exhaustive()
    }
}

fn or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(default)
}

impl NewsService {
    /// Create a new news service
    #[must_use]
    pub fn new(port: Arc<dyn NewsPort>) -> Self {
        Self { port }
    }

    /// Top headlines, defaulting to technology news from the US
    #[instrument(skip(self))]
    pub async fn top_headlines(
        &self,
        category: Option<&str>,
        country: Option<&str>,
    ) -> Result<Vec<NewsArticle>, ApplicationError> {
        let category = or_default(category, DEFAULT_CATEGORY);
        let country = or_default(country, DEFAULT_COUNTRY);

        let articles = self.port.top_headlines(category, country).await?;
        debug!(count = articles.len(), %category, %country, "Fetched headlines");
        Ok(articles)
    }
}
