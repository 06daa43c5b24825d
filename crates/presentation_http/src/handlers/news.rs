//! Headlines proxy handler

use axum::{
    Json,
    extract::{Query, State},
};
use domain::entities::NewsArticle;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// `GET /api/news` query
#[derive(Debug, Default, Deserialize)]
pub struct NewsQuery {
    pub category: Option<String>,
    pub country: Option<String>,
}

/// `GET /api/news` response
#[derive(Debug, Serialize, Deserialize)]
pub struct NewsResponse {
    pub articles: Vec<NewsArticle>,
}

/// Top headlines; every failure collapses to one message
#[instrument(skip(state))]
pub async fn get_news(
    State(state): State<AppState>,
    Query(query): Query<NewsQuery>,
) -> Result<Json<NewsResponse>, ApiError> {
    let articles = state
        .news
        .top_headlines(query.category.as_deref(), query.country.as_deref())
        .await
        .map_err(|e| ApiError::internal("Failed to fetch news data").with_details(e))?;

    Ok(Json(NewsResponse { articles }))
}
