//! Character detail HTTP handler.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use crate::{error::AppError, state::AppState};

/// Get a character by catalog id.
///
/// # Endpoint
///
/// `GET /api/characters/{id}`
///
/// # Response
///
/// - **Success (200 OK)**: the character as the catalog describes it
/// - **Error (404)**: no character with this id
pub async fn get_character(
    State(state): State<AppState>,
    Path(character_id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    let character = state
        .catalog
        .character(character_id)
        .await?
        .ok_or(AppError::NotFound("Character"))?;

    Ok(Json(character))
}
