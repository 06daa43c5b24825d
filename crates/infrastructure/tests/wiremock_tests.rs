//! Integration tests for the weather and news adapters using wiremock
//!
//! Tests cover:
//! - Unit selection when reshaping forecasts
//! - Upstream status mapping to application errors
//! - Missing API keys never reaching the network

#![allow(clippy::expect_used)]

use application::error::ApplicationError;
use application::ports::{NewsPort, WeatherPort};
use domain::value_objects::UnitSystem;
use infrastructure::{NewsAdapter, NewsAppConfig, WeatherAdapter, WeatherAppConfig};
use secrecy::SecretString;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Test Helpers
// ============================================================================

fn forecast_body() -> serde_json::Value {
    serde_json::json!({
        "location": {"name": "Tunis", "country": "Tunisia", "localtime": "2026-10-19 14:05"},
        "current": {
            "temp_c": 24.4, "temp_f": 75.9,
            "condition": {"text": "Sunny", "icon": "//cdn.weatherapi.com/weather/64x64/day/113.png"},
            "wind_kph": 13.0, "wind_mph": 8.1, "humidity": 44,
            "feelslike_c": 25.1, "feelslike_f": 77.2,
            "vis_km": 10.0, "vis_miles": 6.0, "uv": 6.0
        },
        "forecast": {"forecastday": [
            {"date": "2026-10-20", "day": {
                "maxtemp_c": 22.1, "maxtemp_f": 71.8, "mintemp_c": 16.9, "mintemp_f": 62.4,
                "condition": {"text": "Patchy rain", "icon": "//cdn.weatherapi.com/weather/64x64/day/176.png"}
            }}
        ]}
    })
}

fn weather_adapter(server: &MockServer, key: Option<&str>) -> WeatherAdapter {
    let config = WeatherAppConfig {
        base_url: server.uri(),
        api_key: key.map(SecretString::from),
        ..WeatherAppConfig::default()
    };
    WeatherAdapter::with_config(config.to_client_config()).expect("adapter")
}

fn news_adapter(server: &MockServer, key: Option<&str>) -> NewsAdapter {
    let config = NewsAppConfig {
        base_url: server.uri(),
        api_key: key.map(SecretString::from),
        ..NewsAppConfig::default()
    };
    NewsAdapter::with_config(config.to_client_config()).expect("adapter")
}

async fn mount_forecast_status(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(ResponseTemplate::new(status).set_body_string("upstream said no"))
        .mount(server)
        .await;
}

// ============================================================================
// Weather Adapter Tests
// ============================================================================

mod weather_adapter_tests {
    use super::*;

    #[tokio::test]
    async fn metric_snapshot() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast.json"))
            .and(query_param("q", "Tunis"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
            .expect(1)
            .mount(&server)
            .await;

        let snapshot = weather_adapter(&server, Some("k"))
            .get_weather("Tunis", UnitSystem::Metric)
            .await
            .expect("snapshot");

        assert_eq!(snapshot.location, "Tunis, Tunisia");
        assert_eq!(snapshot.temperature, 24);
        assert_eq!(snapshot.feels_like, 25);
        assert_eq!(snapshot.icon, "113");
        assert_eq!(snapshot.forecast.len(), 1);
        assert_eq!(snapshot.forecast[0].day, "Tue");
        assert_eq!(snapshot.forecast[0].high, 22);
        assert_eq!(snapshot.forecast[0].icon, "176");
    }

    #[tokio::test]
    async fn imperial_snapshot() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
            .mount(&server)
            .await;

        let snapshot = weather_adapter(&server, Some("k"))
            .get_weather("Tunis", UnitSystem::Imperial)
            .await
            .expect("snapshot");

        assert_eq!(snapshot.temperature, 76);
        assert_eq!(snapshot.feels_like, 77);
        assert!((snapshot.wind_speed - 8.1).abs() < f64::EPSILON);
        assert_eq!(snapshot.forecast[0].low, 62);
    }

    #[tokio::test]
    async fn missing_key_is_a_configuration_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
            .expect(0)
            .mount(&server)
            .await;

        let result = weather_adapter(&server, None)
            .get_weather("Tunis", UnitSystem::Metric)
            .await;

        match result {
            Err(ApplicationError::Configuration(msg)) => {
                assert_eq!(msg, "Weather API key not configured");
            },
            other => panic!("Expected Configuration error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn bad_request_maps_to_invalid_request() {
        let server = MockServer::start().await;
        mount_forecast_status(&server, 400).await;

        let result = weather_adapter(&server, Some("k"))
            .get_weather("Nowhere", UnitSystem::Metric)
            .await;
        assert!(matches!(result, Err(ApplicationError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn auth_failures_map_to_not_authorized() {
        for status in [401, 403] {
            let server = MockServer::start().await;
            mount_forecast_status(&server, status).await;

            let result = weather_adapter(&server, Some("k"))
                .get_weather("Tunis", UnitSystem::Metric)
                .await;
            assert!(
                matches!(result, Err(ApplicationError::NotAuthorized(_))),
                "status {status}: {result:?}"
            );
        }
    }

    #[tokio::test]
    async fn other_statuses_are_passed_through() {
        let server = MockServer::start().await;
        mount_forecast_status(&server, 503).await;

        let result = weather_adapter(&server, Some("k"))
            .get_weather("Tunis", UnitSystem::Metric)
            .await;
        match result {
            Err(ApplicationError::Upstream { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "upstream said no");
            },
            other => panic!("Expected Upstream error, got: {other:?}"),
        }
    }
}

// ============================================================================
// News Adapter Tests
// ============================================================================

mod news_adapter_tests {
    use super::*;

    #[tokio::test]
    async fn headlines_are_flattened() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/top-headlines"))
            .and(query_param("category", "science"))
            .and(query_param("country", "gb"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "ok",
                "totalResults": 1,
                "articles": [{
                    "source": {"id": null, "name": "Example Daily"},
                    "title": "Comet sighted",
                    "description": null,
                    "url": "https://example.com/comet",
                    "urlToImage": null,
                    "publishedAt": "2026-10-19T07:00:00Z"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let articles = news_adapter(&server, Some("k"))
            .top_headlines("science", "gb")
            .await
            .expect("articles");

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Comet sighted");
        assert_eq!(articles[0].source, "Example Daily");
        assert!(articles[0].description.is_none());
    }

    #[tokio::test]
    async fn missing_key_is_a_configuration_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = news_adapter(&server, None)
            .top_headlines("technology", "us")
            .await;
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
    }

    #[tokio::test]
    async fn upstream_error_keeps_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/top-headlines"))
            .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
                "status": "error",
                "code": "rateLimited",
                "message": "Too many requests"
            })))
            .mount(&server)
            .await;

        let result = news_adapter(&server, Some("k"))
            .top_headlines("technology", "us")
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::Upstream { status: 429, .. })
        ));
    }
}
