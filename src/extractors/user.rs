//! Resolve the acting user from the `X-User-Id` request header.

use crate::error::AppError;
use crate::models::User;
use crate::service::CatalogService;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Header carrying the acting user's id.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// The user a favorites request acts on behalf of. Must exist and be active.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

/// Parse the header value. Missing, blank or non-integer values are unauthorized.
pub fn user_id_from_parts(parts: &Parts) -> Result<i64, AppError> {
    let raw = parts
        .headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Unauthorized(format!("{} header is required", USER_ID_HEADER)))?;
    raw.parse::<i64>()
        .map_err(|_| AppError::Unauthorized(format!("invalid {} header: {}", USER_ID_HEADER, raw)))
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let user_id = user_id_from_parts(parts)?;
        let user = CatalogService::get_user(&state.pool, user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized(format!("unknown user: {}", user_id)))?;
        if !user.is_active {
            return Err(AppError::Forbidden(format!("user {} is inactive", user_id)));
        }
        Ok(CurrentUser(user))
    }
}
