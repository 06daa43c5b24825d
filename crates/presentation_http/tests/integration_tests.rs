//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::sync::Arc;

use application::{
    error::ApplicationError,
    ports::{NewsPort, NoteStore, WeatherPort},
};
use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use domain::entities::{NewsArticle, Note, WeatherSnapshot};
use domain::value_objects::UnitSystem;
use infrastructure::{DatabaseConfig, SqliteNoteStore, WeatherAdapter, WeatherAppConfig, create_pool};
use parking_lot::Mutex;
use presentation_http::{
    AppState, ErrorResponse, create_router,
    handlers::{
        health::{HealthResponse, ReadinessResponse},
        news::NewsResponse,
        notes::{NoteResponse, NotesResponse},
    },
};
use secrecy::SecretString;
use serde_json::json;
use wiremock::{Mock, MockServer, ResponseTemplate, matchers::method};

// ============================================================================
// Test Fakes
// ============================================================================

/// Weather port that records its last query and returns a canned result
struct FakeWeather {
    failure: Option<fn() -> ApplicationError>,
    last_query: Mutex<Option<(String, UnitSystem)>>,
}

impl FakeWeather {
    fn ok() -> Self {
        Self {
            failure: None,
            last_query: Mutex::new(None),
        }
    }

    fn failing(failure: fn() -> ApplicationError) -> Self {
        Self {
            failure: Some(failure),
            last_query: Mutex::new(None),
        }
    }
}

#[async_trait]
impl WeatherPort for FakeWeather {
    async fn get_weather(
        &self,
        location: &str,
        units: UnitSystem,
    ) -> Result<WeatherSnapshot, ApplicationError> {
        *self.last_query.lock() = Some((location.to_string(), units));
        if let Some(failure) = self.failure {
            return Err(failure());
        }
        Ok(WeatherSnapshot {
            location: format!("{location}, Somewhere"),
            temperature: 21,
            description: "Sunny".to_string(),
            humidity: 40,
            wind_speed: 12.0,
            icon: "113".to_string(),
            forecast: Vec::new(),
            feels_like: 22,
            uv: 5.0,
            visibility: 10.0,
            local_time: "2026-10-19 12:00".to_string(),
        })
    }
}

/// News port returning a fixed article list, or failing
struct FakeNews {
    fail: bool,
}

#[async_trait]
impl NewsPort for FakeNews {
    async fn top_headlines(
        &self,
        category: &str,
        _country: &str,
    ) -> Result<Vec<NewsArticle>, ApplicationError> {
        if self.fail {
            return Err(ApplicationError::Upstream {
                status: 426,
                message: "upgrade required".to_string(),
            });
        }
        Ok(vec![NewsArticle {
            title: format!("{category} headline"),
            description: None,
            url: "https://example.com/a".to_string(),
            published_at: "2026-10-19T08:00:00Z".to_string(),
            source: "Example".to_string(),
            url_to_image: None,
        }])
    }
}

/// Note store whose every call fails
struct BrokenStore;

#[async_trait]
impl NoteStore for BrokenStore {
    async fn find_by_owner(
        &self,
        _owner: &domain::value_objects::OwnerId,
    ) -> Result<Vec<Note>, ApplicationError> {
        Err(ApplicationError::Storage("database is locked".to_string()))
    }

    async fn insert(&self, _note: &Note) -> Result<(), ApplicationError> {
        Err(ApplicationError::Storage("database is locked".to_string()))
    }

    async fn set_completed(
        &self,
        _id: &domain::value_objects::NoteId,
        _completed: bool,
    ) -> Result<Option<Note>, ApplicationError> {
        Err(ApplicationError::Storage("database is locked".to_string()))
    }

    async fn is_healthy(&self) -> bool {
        false
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

fn sqlite_store() -> Arc<dyn NoteStore> {
    let pool = create_pool(&DatabaseConfig::in_memory()).expect("in-memory pool");
    Arc::new(SqliteNoteStore::new(Arc::new(pool)))
}

fn server_with(
    store: Arc<dyn NoteStore>,
    weather: Arc<dyn WeatherPort>,
    news: Arc<dyn NewsPort>,
) -> TestServer {
    let state = AppState::new(store, weather, news);
    TestServer::new(create_router(state)).expect("test server")
}

fn create_test_server() -> TestServer {
    server_with(
        sqlite_store(),
        Arc::new(FakeWeather::ok()),
        Arc::new(FakeNews { fail: false }),
    )
}

// ============================================================================
// Health Tests
// ============================================================================

#[tokio::test]
async fn health_reports_version() {
    let server = create_test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: HealthResponse = response.json();
    assert_eq!(body.status, "ok");
    assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn ready_when_database_is_reachable() {
    let server = create_test_server();

    let response = server.get("/ready").await;
    response.assert_status_ok();
    let body: ReadinessResponse = response.json();
    assert!(body.ready);
    assert!(body.database.healthy);
}

#[tokio::test]
async fn not_ready_when_database_is_down() {
    let server = server_with(
        Arc::new(BrokenStore),
        Arc::new(FakeWeather::ok()),
        Arc::new(FakeNews { fail: false }),
    );

    let response = server.get("/ready").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: ReadinessResponse = response.json();
    assert!(!body.ready);
}

// ============================================================================
// Notes Tests
// ============================================================================

mod notes_tests {
    use super::*;

    #[tokio::test]
    async fn create_note_defaults() {
        let server = create_test_server();

        let response = server
            .post("/api/notes")
            .json(&json!({"content": "buy milk", "userId": "u1"}))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: serde_json::Value = response.json();
        let note = &body["note"];
        assert_eq!(note["content"], "buy milk");
        assert_eq!(note["userId"], "u1");
        assert_eq!(note["priority"], "medium");
        assert_eq!(note["isCompleted"], false);
        assert!(note["id"].as_str().is_some());
        assert!(note["createdAt"].as_str().is_some());
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let server = create_test_server();

        for content in ["A", "B", "C"] {
            server
                .post("/api/notes")
                .json(&json!({"content": content, "userId": "u1"}))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let response = server.get("/api/notes").add_query_param("userId", "u1").await;
        response.assert_status_ok();
        let body: NotesResponse = response.json();
        let contents: Vec<_> = body.notes.iter().map(|n| n.content.as_str()).collect();
        assert_eq!(contents, vec!["C", "B", "A"]);
    }

    #[tokio::test]
    async fn missing_owner_uses_default_user() {
        let server = create_test_server();

        server
            .post("/api/notes")
            .json(&json!({"content": "water plants", "priority": "high"}))
            .await
            .assert_status(StatusCode::CREATED);

        let body: NotesResponse = server.get("/api/notes").await.json();
        assert_eq!(body.notes.len(), 1);
        assert_eq!(body.notes[0].user_id.as_str(), "default-user");
        assert_eq!(body.notes[0].priority.as_str(), "high");
    }

    #[tokio::test]
    async fn toggle_returns_updated_note() {
        let server = create_test_server();

        let created: NoteResponse = server
            .post("/api/notes")
            .json(&json!({"content": "call mom"}))
            .await
            .json();
        let id = created.note.expect("created note").id.to_string();

        let response = server
            .patch("/api/notes")
            .json(&json!({"id": id, "isCompleted": true}))
            .await;
        response.assert_status_ok();
        let body: NoteResponse = response.json();
        let note = body.note.expect("updated note");
        assert!(note.is_completed);
        assert_eq!(note.content, "call mom");
    }

    #[tokio::test]
    async fn toggle_unknown_id_returns_null() {
        let server = create_test_server();

        let response = server
            .patch("/api/notes")
            .json(&json!({"id": "00000000-0000-4000-8000-000000000000", "isCompleted": true}))
            .await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert!(body["note"].is_null());
    }

    #[tokio::test]
    async fn malformed_id_fails_update() {
        let server = create_test_server();

        let response = server
            .patch("/api/notes")
            .json(&json!({"id": "not-a-uuid", "isCompleted": true}))
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "Failed to update note");
        assert_eq!(body.code, "internal_error");
    }

    #[tokio::test]
    async fn empty_content_fails_create() {
        let server = create_test_server();

        let response = server.post("/api/notes").json(&json!({"content": ""})).await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "Failed to create note");
    }

    #[tokio::test]
    async fn unknown_priority_fails_create() {
        let server = create_test_server();

        let response = server
            .post("/api/notes")
            .json(&json!({"content": "x", "priority": "urgent"}))
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "Failed to create note");
    }

    #[tokio::test]
    async fn uppercase_priority_fails_create() {
        let server = create_test_server();

        let response = server
            .post("/api/notes")
            .json(&json!({"content": "x", "priority": "HIGH"}))
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body: NotesResponse = server.get("/api/notes").await.json();
        assert!(body.notes.is_empty());
    }

    #[tokio::test]
    async fn mistyped_body_fails_create() {
        let server = create_test_server();

        let response = server.post("/api/notes").json(&json!({"content": 42})).await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "Failed to create note");
        assert!(body.details.is_some());
    }

    #[tokio::test]
    async fn store_failure_fails_list() {
        let server = server_with(
            Arc::new(BrokenStore),
            Arc::new(FakeWeather::ok()),
            Arc::new(FakeNews { fail: false }),
        );

        let response = server.get("/api/notes").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "Failed to fetch notes");
    }
}

// ============================================================================
// Weather Tests
// ============================================================================

mod weather_tests {
    use super::*;

    fn weather_server(weather: Arc<FakeWeather>) -> TestServer {
        server_with(sqlite_store(), weather, Arc::new(FakeNews { fail: false }))
    }

    #[tokio::test]
    async fn defaults_to_tunis_metric() {
        let weather = Arc::new(FakeWeather::ok());
        let server = weather_server(Arc::clone(&weather));

        let response = server.get("/api/weather").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["temperature"], 21);
        assert_eq!(body["feelsLike"], 22);
        assert_eq!(
            *weather.last_query.lock(),
            Some(("Tunis".to_string(), UnitSystem::Metric))
        );
    }

    #[tokio::test]
    async fn passes_location_and_units() {
        let weather = Arc::new(FakeWeather::ok());
        let server = weather_server(Arc::clone(&weather));

        server
            .get("/api/weather")
            .add_query_param("location", "Paris")
            .add_query_param("units", "imperial")
            .await
            .assert_status_ok();

        assert_eq!(
            *weather.last_query.lock(),
            Some(("Paris".to_string(), UnitSystem::Imperial))
        );
    }

    #[tokio::test]
    async fn units_other_than_exact_metric_are_imperial() {
        let weather = Arc::new(FakeWeather::ok());
        let server = weather_server(Arc::clone(&weather));

        for units in ["Metric", "kelvin", "us"] {
            server
                .get("/api/weather")
                .add_query_param("units", units)
                .await
                .assert_status_ok();
            assert_eq!(
                weather.last_query.lock().as_ref().map(|(_, u)| *u),
                Some(UnitSystem::Imperial),
                "units={units}"
            );
        }

        server
            .get("/api/weather")
            .add_query_param("units", "metric")
            .await
            .assert_status_ok();
        assert_eq!(
            weather.last_query.lock().as_ref().map(|(_, u)| *u),
            Some(UnitSystem::Metric)
        );
    }

    #[tokio::test]
    async fn upstream_failures_are_remapped() {
        let cases: [(fn() -> ApplicationError, StatusCode, &str); 4] = [
            (
                || ApplicationError::InvalidRequest("No matching location".into()),
                StatusCode::BAD_REQUEST,
                "Invalid request or location not found",
            ),
            (
                || ApplicationError::NotAuthorized("key disabled".into()),
                StatusCode::UNAUTHORIZED,
                "Invalid API key or API limit exceeded",
            ),
            (
                || ApplicationError::Upstream {
                    status: 503,
                    message: "down".into(),
                },
                StatusCode::SERVICE_UNAVAILABLE,
                "Weather API request failed",
            ),
            (
                || ApplicationError::ExternalService("connection reset".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch weather data",
            ),
        ];

        for (failure, status, message) in cases {
            let server = weather_server(Arc::new(FakeWeather::failing(failure)));
            let response = server.get("/api/weather").await;
            response.assert_status(status);
            let body: ErrorResponse = response.json();
            assert_eq!(body.error, message);
        }
    }

    #[tokio::test]
    async fn missing_key_fails_without_calling_upstream() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&upstream)
            .await;

        let config = WeatherAppConfig {
            base_url: upstream.uri(),
            ..WeatherAppConfig::default()
        };
        let adapter = WeatherAdapter::with_config(config.to_client_config()).expect("adapter");
        let server = server_with(
            sqlite_store(),
            Arc::new(adapter),
            Arc::new(FakeNews { fail: false }),
        );

        let response = server.get("/api/weather").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "Weather API key not configured");
    }

    #[tokio::test]
    async fn rejected_key_maps_to_unauthorized_end_to_end() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_string("API key has been disabled"))
            .expect(1)
            .mount(&upstream)
            .await;

        let config = WeatherAppConfig {
            base_url: upstream.uri(),
            api_key: Some(SecretString::from("disabled")),
            ..WeatherAppConfig::default()
        };
        let adapter = WeatherAdapter::with_config(config.to_client_config()).expect("adapter");
        let server = server_with(
            sqlite_store(),
            Arc::new(adapter),
            Arc::new(FakeNews { fail: false }),
        );

        let response = server.get("/api/weather").await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }
}

// ============================================================================
// News Tests
// ============================================================================

mod news_tests {
    use super::*;

    #[tokio::test]
    async fn defaults_to_technology() {
        let server = create_test_server();

        let response = server.get("/api/news").await;
        response.assert_status_ok();
        let body: NewsResponse = response.json();
        assert_eq!(body.articles.len(), 1);
        assert_eq!(body.articles[0].title, "technology headline");
    }

    #[tokio::test]
    async fn every_failure_is_a_500() {
        let server = server_with(
            sqlite_store(),
            Arc::new(FakeWeather::ok()),
            Arc::new(FakeNews { fail: true }),
        );

        let response = server.get("/api/news").add_query_param("category", "science").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "Failed to fetch news data");
    }
}
