//! Comic catalog HTTP handlers.
//!
//! This module implements:
//! - GET /api/comics - Page through the catalog
//! - GET /api/comics/{id} - Get one comic

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::Value;

use crate::{error::AppError, state::AppState};

/// Paging parameters, forwarded to the catalog untouched.
#[derive(Debug, Deserialize)]
pub struct ComicsQuery {
    #[serde(default = "default_limit")]
    pub limit: u32,

    #[serde(default)]
    pub offset: u32,
}

/// Comics per page when the client does not ask for a size.
fn default_limit() -> u32 {
    12
}

/// List comics.
///
/// # Query Parameters
///
/// - `limit` - page size, defaults to 12
/// - `offset` - number of comics to skip, defaults to 0
///
/// # Response
///
/// - **Success (200 OK)**: the catalog response body, unmodified
/// - **Error**: catalog status passed through, or 502 if it is unreachable
pub async fn list_comics(
    State(state): State<AppState>,
    Query(query): Query<ComicsQuery>,
) -> Result<Json<Value>, AppError> {
    let comics = state.catalog.comics(query.limit, query.offset).await?;
    Ok(Json(comics))
}

/// Get a comic by catalog id.
///
/// # Response
///
/// - **Success (200 OK)**: the comic as the catalog describes it
/// - **Error (404)**: no comic with this id
pub async fn get_comic(
    State(state): State<AppState>,
    Path(comic_id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    let comic = state
        .catalog
        .comic(comic_id)
        .await?
        .ok_or(AppError::NotFound("Comic"))?;

    Ok(Json(comic))
}
