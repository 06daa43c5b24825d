//! Integration tests for the news client using wiremock

use integration_news::{NewsApiClient, NewsApiConfig, NewsClient, NewsError};
use secrecy::SecretString;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header_exists, method, path, query_param},
};

fn sample_headlines() -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "totalResults": 2,
        "articles": [
            {
                "source": {"id": "the-verge", "name": "The Verge"},
                "author": "Jane Doe",
                "title": "New chip announced",
                "description": "A faster chip.",
                "url": "https://example.com/chip",
                "urlToImage": "https://example.com/chip.jpg",
                "publishedAt": "2026-10-19T08:00:00Z",
                "content": "..."
            },
            {
                "source": {"id": null, "name": "Example Daily"},
                "author": null,
                "title": "Open source release",
                "description": null,
                "url": "https://example.com/release",
                "urlToImage": null,
                "publishedAt": "2026-10-19T07:00:00Z",
                "content": null
            }
        ]
    })
}

fn create_test_client(mock_server: &MockServer, api_key: Option<&str>) -> NewsApiClient {
    let config = NewsApiConfig {
        base_url: mock_server.uri(),
        api_key: api_key.map(SecretString::from),
        timeout_secs: Some(5),
        ..Default::default()
    };
    #[allow(clippy::expect_used)]
    NewsApiClient::new(config).expect("Failed to create client")
}

#[tokio::test]
async fn test_top_headlines_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .and(query_param("country", "us"))
        .and(query_param("category", "technology"))
        .and(query_param("apiKey", "news-key"))
        .and(query_param("pageSize", "10"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_headlines()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server, Some("news-key"));
    let result = client.top_headlines("technology", "us").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
    let headlines = result.unwrap();
    assert_eq!(headlines.articles.len(), 2);
    assert_eq!(headlines.articles[1].source.name, "Example Daily");
    assert!(headlines.articles[1].description.is_none());
}

#[tokio::test]
async fn test_missing_api_key_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_headlines()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server, None);
    let result = client.top_headlines("technology", "us").await;

    assert!(matches!(result, Err(NewsError::MissingApiKey)));
}

#[tokio::test]
async fn test_unauthorized_carries_upstream_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "status": "error",
            "code": "apiKeyInvalid",
            "message": "Your API key is invalid or incorrect."
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server, Some("wrong"));
    let result = client.top_headlines("technology", "us").await;

    match result {
        Err(NewsError::Http { status, message }) => {
            assert_eq!(status, 401);
            assert!(message.starts_with("apiKeyInvalid"));
        }
        other => panic!("Expected Http error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server, Some("news-key"));
    let result = client.top_headlines("technology", "us").await;

    assert!(matches!(result, Err(NewsError::ParseError(_))));
}
