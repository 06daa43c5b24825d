//! News adapter - Implements NewsPort using integration_news

use application::error::ApplicationError;
use application::ports::NewsPort;
use async_trait::async_trait;
use domain::entities::NewsArticle;
use integration_news::{ApiArticle, NewsApiClient, NewsApiConfig, NewsClient, NewsError};
use tracing::{debug, instrument};

/// Adapter for headline lookups using NewsAPI.org
#[derive(Debug)]
pub struct NewsAdapter {
    client: NewsApiClient,
}

impl NewsAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: NewsApiConfig) -> Result<Self, ApplicationError> {
        let client =
            NewsApiClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    fn map_error(err: NewsError) -> ApplicationError {
        match err {
            NewsError::MissingApiKey => {
                ApplicationError::Configuration("News API key not configured".into())
            },
            NewsError::Http { status, message } => ApplicationError::Upstream { status, message },
            NewsError::ConnectionFailed(e)
            | NewsError::RequestFailed(e)
            | NewsError::ParseError(e) => ApplicationError::ExternalService(e),
        }
    }

    fn map_article(article: ApiArticle) -> NewsArticle {
        NewsArticle {
            title: article.title.unwrap_or_default(),
            description: article.description,
            url: article.url,
            published_at: article.published_at,
            source: article.source.name,
            url_to_image: article.url_to_image,
        }
    }
}

#[async_trait]
impl NewsPort for NewsAdapter {
    #[instrument(skip(self))]
    async fn top_headlines(
        &self,
        category: &str,
        country: &str,
    ) -> Result<Vec<NewsArticle>, ApplicationError> {
        let response = self
            .client
            .top_headlines(category, country)
            .await
            .map_err(Self::map_error)?;

        debug!(total = response.total_results, "Headlines received");
        Ok(response
            .articles
            .into_iter()
            .map(Self::map_article)
            .collect())
    }
}
