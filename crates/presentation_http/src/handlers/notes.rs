//! Notes collection handlers
//!
//! Every failure, including malformed bodies and unknown priorities, is
//! reported as a 500 with the operation's message.

use std::str::FromStr;

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use domain::entities::Note;
use domain::value_objects::{OwnerId, Priority};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

const LIST_FAILED: &str = "Failed to fetch notes";
const CREATE_FAILED: &str = "Failed to create note";
const UPDATE_FAILED: &str = "Failed to update note";

/// `GET /api/notes` query
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesQuery {
    pub user_id: Option<String>,
}

/// `POST /api/notes` body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// `PATCH /api/notes` body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteRequest {
    pub id: String,
    pub is_completed: bool,
}

/// `GET /api/notes` response
#[derive(Debug, Serialize, Deserialize)]
pub struct NotesResponse {
    pub notes: Vec<Note>,
}

/// Single-note response; `note` is `null` when an update matched nothing
#[derive(Debug, Serialize, Deserialize)]
pub struct NoteResponse {
    pub note: Option<Note>,
}

/// List an owner's notes, newest first
#[instrument(skip(state))]
pub async fn list_notes(
    State(state): State<AppState>,
    Query(query): Query<NotesQuery>,
) -> Result<Json<NotesResponse>, ApiError> {
    let owner = OwnerId::from_optional(query.user_id.as_deref());
    let notes = state
        .notes
        .list(&owner)
        .await
        .map_err(|e| ApiError::internal(LIST_FAILED).with_details(e))?;

    Ok(Json(NotesResponse { notes }))
}

/// Create a note
#[instrument(skip(state, body))]
pub async fn create_note(
    State(state): State<AppState>,
    body: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<NoteResponse>), ApiError> {
    let Json(request) =
        body.map_err(|e| ApiError::internal(CREATE_FAILED).with_details(e.body_text()))?;

    let priority = request
        .priority
        .as_deref()
        .map(Priority::from_str)
        .transpose()
        .map_err(|e| ApiError::internal(CREATE_FAILED).with_details(e))?
        .unwrap_or_default();
    let owner = OwnerId::from_optional(request.user_id.as_deref());
    let content = request.content.unwrap_or_default();

    let note = state
        .notes
        .create(owner, &content, priority)
        .await
        .map_err(|e| ApiError::internal(CREATE_FAILED).with_details(e))?;

    Ok((StatusCode::CREATED, Json(NoteResponse { note: Some(note) })))
}

/// Set a note's completion flag by id
#[instrument(skip(state, body))]
pub async fn update_note(
    State(state): State<AppState>,
    body: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> Result<Json<NoteResponse>, ApiError> {
    let Json(request) =
        body.map_err(|e| ApiError::internal(UPDATE_FAILED).with_details(e.body_text()))?;

    let note = state
        .notes
        .set_completed(&request.id, request.is_completed)
        .await
        .map_err(|e| ApiError::internal(UPDATE_FAILED).with_details(e))?;

    Ok(Json(NoteResponse { note }))
}
