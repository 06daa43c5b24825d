//! NewsAPI.org client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::{
    error::NewsError,
    models::{ErrorResponse, HeadlinesResponse},
};

/// User agent sent with every request; NewsAPI rejects anonymous clients
const USER_AGENT: &str = concat!("smart-mirror/", env!("CARGO_PKG_VERSION"));

/// News service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsApiConfig {
    /// API base URL (default: <https://newsapi.org/v2>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// NewsAPI.org key
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds (default: none)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://newsapi.org/v2".to_string()
}

/// Articles requested per call
pub const PAGE_SIZE: u8 = 10;

impl Default for NewsApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

/// Headline lookups
#[async_trait]
pub trait NewsClient: Send + Sync {
    /// Top headlines for a category and two-letter country code
    async fn top_headlines(
        &self,
        category: &str,
        country: &str,
    ) -> Result<HeadlinesResponse, NewsError>;
}

/// NewsAPI.org HTTP client implementation
#[derive(Debug)]
pub struct NewsApiClient {
    client: Client,
    config: NewsApiConfig,
}

impl NewsApiClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: NewsApiConfig) -> Result<Self, NewsError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| NewsError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn headlines_url(&self) -> String {
        format!("{}/top-headlines", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl NewsClient for NewsApiClient {
    #[instrument(skip(self))]
    async fn top_headlines(
        &self,
        category: &str,
        country: &str,
    ) -> Result<HeadlinesResponse, NewsError> {
        let Some(api_key) = self
            .config
            .api_key
            .as_ref()
            .filter(|k| !k.expose_secret().trim().is_empty())
        else {
            warn!("News API key is not configured");
            return Err(NewsError::MissingApiKey);
        };

        let url = self.headlines_url();
        let page_size = PAGE_SIZE.to_string();
        debug!(url = %url, "Fetching top headlines");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("country", country),
                ("category", category),
                ("apiKey", api_key.expose_secret()),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await
            .map_err(|e| NewsError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| format!("{}: {}", e.code, e.message))
                .unwrap_or(body);
            warn!(status = %status, %message, "News API returned an error");
            return Err(NewsError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let headlines: HeadlinesResponse = response
            .json()
            .await
            .map_err(|e| NewsError::ParseError(e.to_string()))?;

        debug!(count = headlines.articles.len(), "Headlines received");
        Ok(headlines)
    }
}
