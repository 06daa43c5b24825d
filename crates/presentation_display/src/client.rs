//! HTTP client for the mirror API
//!
//! The display never talks to WeatherAPI.com, NewsAPI.org or the database
//! directly; every widget goes through the server's `/api/*` routes.

use async_trait::async_trait;
use domain::entities::{NewsArticle, Note, WeatherSnapshot};
use domain::value_objects::{NoteId, OwnerId, Priority, UnitSystem};
#[cfg(test)]
use mockall::automock;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Errors talking to the mirror API
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP client could not be built
    #[error("Client setup failed: {0}")]
    Setup(String),

    /// Transport-level failure
    #[error("Request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status
    #[error("{message} (HTTP {status})")]
    Api {
        /// Status code
        status: u16,
        /// `error` field of the response body, or the raw body
        message: String,
    },

    /// The response body did not match the expected shape
    #[error("Invalid response: {0}")]
    Decode(String),
}

/// Operations the widgets need from the server
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MirrorApi: Send + Sync {
    async fn weather(
        &self,
        location: &str,
        units: UnitSystem,
    ) -> Result<WeatherSnapshot, ClientError>;

    async fn news(&self, category: &str, country: &str) -> Result<Vec<NewsArticle>, ClientError>;

    async fn notes(&self, owner: &OwnerId) -> Result<Vec<Note>, ClientError>;

    async fn create_note(
        &self,
        owner: &OwnerId,
        content: &str,
        priority: Priority,
    ) -> Result<Note, ClientError>;

    /// `None` when the server knows no note with this id
    async fn set_completed(&self, id: &NoteId, completed: bool)
    -> Result<Option<Note>, ClientError>;
}

#[derive(Deserialize)]
struct ArticlesBody {
    articles: Vec<NewsArticle>,
}

#[derive(Deserialize)]
struct NotesBody {
    notes: Vec<Note>,
}

#[derive(Deserialize)]
struct NoteBody {
    note: Option<Note>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateNoteBody<'a> {
    content: &'a str,
    priority: Priority,
    user_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateNoteBody {
    id: String,
    is_completed: bool,
}

/// reqwest-backed [`MirrorApi`]
#[derive(Debug, Clone)]
pub struct MirrorApiClient {
    client: Client,
    base_url: String,
}

impl MirrorApiClient {
    /// Create a client for the server at `base_url`
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(concat!("smart-mirror-display/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Setup(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            warn!(status = %status, %message, "Mirror API returned an error");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl MirrorApi for MirrorApiClient {
    #[instrument(skip(self))]
    async fn weather(
        &self,
        location: &str,
        units: UnitSystem,
    ) -> Result<WeatherSnapshot, ClientError> {
        let request = self
            .client
            .get(self.url("/api/weather"))
            .query(&[("location", location), ("units", units.as_str())]);
        Self::send(request).await
    }

    #[instrument(skip(self))]
    async fn news(&self, category: &str, country: &str) -> Result<Vec<NewsArticle>, ClientError> {
        let request = self
            .client
            .get(self.url("/api/news"))
            .query(&[("category", category), ("country", country)]);
        let body: ArticlesBody = Self::send(request).await?;
        debug!(count = body.articles.len(), "Fetched headlines");
        Ok(body.articles)
    }

    #[instrument(skip(self), fields(owner = %owner))]
    async fn notes(&self, owner: &OwnerId) -> Result<Vec<Note>, ClientError> {
        let request = self
            .client
            .get(self.url("/api/notes"))
            .query(&[("userId", owner.as_str())]);
        let body: NotesBody = Self::send(request).await?;
        Ok(body.notes)
    }

    #[instrument(skip(self, content), fields(owner = %owner))]
    async fn create_note(
        &self,
        owner: &OwnerId,
        content: &str,
        priority: Priority,
    ) -> Result<Note, ClientError> {
        let request = self.client.post(self.url("/api/notes")).json(&CreateNoteBody {
            content,
            priority,
            user_id: owner.as_str(),
        });
        let body: NoteBody = Self::send(request).await?;
        body.note
            .ok_or_else(|| ClientError::Decode("created note missing from response".into()))
    }

    #[instrument(skip(self))]
    async fn set_completed(
        &self,
        id: &NoteId,
        completed: bool,
    ) -> Result<Option<Note>, ClientError> {
        let request = self.client.patch(self.url("/api/notes")).json(&UpdateNoteBody {
            id: id.to_string(),
            is_completed: completed,
        });
        let body: NoteBody = Self::send(request).await?;
        Ok(body.note)
    }
}
