//! Weather proxy handler

use application::ApplicationError;
use axum::{
    Json,
    extract::{Query, State},
};
use domain::entities::WeatherSnapshot;
use serde::Deserialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// `GET /api/weather` query
#[derive(Debug, Default, Deserialize)]
pub struct WeatherQuery {
    pub location: Option<String>,
    pub units: Option<String>,
}

/// Current conditions and forecast for a location
#[instrument(skip(state))]
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherSnapshot>, ApiError> {
    state
        .weather
        .get_weather(query.location.as_deref(), query.units.as_deref())
        .await
        .map(Json)
        .map_err(weather_error)
}

fn weather_error(err: ApplicationError) -> ApiError {
    match err {
        ApplicationError::Configuration(_) => ApiError::internal("Weather API key not configured"),
        ApplicationError::InvalidRequest(body) => {
            ApiError::bad_request("Invalid request or location not found").with_details(body)
        },
        ApplicationError::NotAuthorized(body) => {
            ApiError::unauthorized("Invalid API key or API limit exceeded").with_details(body)
        },
        ApplicationError::Upstream { status, message } => {
            ApiError::upstream(status, "Weather API request failed").with_details(message)
        },
        other => ApiError::internal("Failed to fetch weather data").with_details(other),
    }
}
