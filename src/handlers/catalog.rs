//! Read handlers for users, characters and planets.

use crate::error::AppError;
use crate::response::{success_many, success_one, users};
use crate::service::CatalogService;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

/// Ids arrive as raw path segments so malformed values get the standard error body.
pub(crate) fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))
}

/// GET /user
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = CatalogService::list_users(&state.pool).await?;
    Ok(users(rows))
}

/// GET /characters
pub async fn list_characters(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rows = CatalogService::list_characters(&state.pool).await?;
    Ok(success_many(rows))
}

/// GET /characters/:id
pub async fn get_character(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = CatalogService::get_character(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("character {}", id)))?;
    Ok(success_one(row))
}

/// GET /planet
pub async fn list_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = CatalogService::list_planets(&state.pool).await?;
    Ok(success_many(rows))
}

/// GET /planet/:id
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = CatalogService::get_planet(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("planet {}", id)))?;
    Ok(success_one(row))
}
