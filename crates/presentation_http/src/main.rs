//! Smart mirror HTTP server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use application::ports::{NewsPort, NoteStore, WeatherPort};
use axum::http::{HeaderValue, Method};
use infrastructure::{
    AppConfig, LogFormat, NewsAdapter, SqliteNoteStore, WeatherAdapter, create_pool, init_tracing,
};
use presentation_http::{AppState, routes, set_expose_internal_errors};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

const DEFAULT_LOG_FILTER: &str = "smart_mirror_server=info,presentation_http=info,\
                                  infrastructure=info,application=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    let (log_format, format_error) = LogFormat::parse_or_default(&config.server.log_format);
    init_tracing(DEFAULT_LOG_FILTER, log_format)?;
    if let Some(e) = format_error {
        warn!(value = %config.server.log_format, error = %e, "Unknown log format; using text");
    }

    info!("🪞 Smart mirror server v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        environment = %config.environment,
        host = %config.server.host,
        port = config.server.port,
        database = %config.database.path,
        "Configuration loaded"
    );

    set_expose_internal_errors(!config.is_production());

    if !config.weather.has_api_key() {
        warn!("WEATHER_API_KEY is not set; /api/weather will fail");
    }
    if !config.news.has_api_key() {
        warn!("NEWS_API_KEY is not set; /api/news will fail");
    }

    let pool = create_pool(&config.database).context("Failed to open database")?;
    let store: Arc<dyn NoteStore> = Arc::new(SqliteNoteStore::new(Arc::new(pool)));
    let weather: Arc<dyn WeatherPort> =
        Arc::new(WeatherAdapter::with_config(config.weather.to_client_config())?);
    let news: Arc<dyn NewsPort> = Arc::new(NewsAdapter::with_config(config.news.to_client_config())?);

    let state = AppState::new(store, weather, news);

    let mut app = routes::create_router(state)
        .layer(RequestBodyLimitLayer::new(config.server.max_body_size_json_bytes))
        .layer(TraceLayer::new_for_http());

    if config.server.cors_enabled {
        app = app.layer(cors_layer(&config.server.allowed_origins));
    }

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🚀 Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Allow all origins when none are configured
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PATCH])
            .allow_headers(Any)
    }
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);
}
