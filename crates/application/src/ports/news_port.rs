//! News service port

use async_trait::async_trait;
use domain::entities::NewsArticle;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for top-headline lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NewsPort: Send + Sync {
    /// Top headlines for a category and two-letter country code
    async fn top_headlines(
        &self,
        category: &str,
        country: &str,
    ) -> Result<Vec<NewsArticle>, ApplicationError>;
}
