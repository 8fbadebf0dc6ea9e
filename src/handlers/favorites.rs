//! Favorites handlers. The acting user comes from `CurrentUser`.

use crate::error::AppError;
use crate::extractors::CurrentUser;
use crate::handlers::catalog::parse_id;
use crate::models::ItemType;
use crate::response::{created, message, success_many};
use crate::service::FavoriteService;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

/// GET /users/favorites
pub async fn list_favorites(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rows = FavoriteService::list_for_user(&state.pool, user.id).await?;
    Ok(success_many(rows))
}

/// POST /favorite/:item_type/:item_id
pub async fn add_favorite(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path((item_type, item_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let item_type: ItemType = item_type.parse()?;
    let item_id = parse_id(&item_id)?;
    let favorite = FavoriteService::add(&state.pool, user.id, item_type, item_id).await?;
    tracing::info!(user_id = user.id, item_type = %item_type, item_id, "favorite added");
    Ok(created(format!("Favorite {} added", item_type), favorite))
}

/// DELETE /favorite/:item_type/:item_id
pub async fn delete_favorite(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path((item_type, item_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let item_type: ItemType = item_type.parse()?;
    let item_id = parse_id(&item_id)?;
    FavoriteService::remove(&state.pool, user.id, item_type, item_id).await?;
    tracing::info!(user_id = user.id, item_type = %item_type, item_id, "favorite deleted");
    Ok(message(
        StatusCode::OK,
        format!("Favorite {} deleted successfully", item_type),
    ))
}
