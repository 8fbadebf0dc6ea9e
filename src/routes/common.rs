//! Liveness, readiness (pool and schema) and build info.

use crate::error::AppError;
use crate::state::AppState;
use crate::store::{missing_tables, TABLE_NAMES};
use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
}

#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    tables: usize,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

async fn health() -> impl IntoResponse {
    Json(Liveness { status: "ok" })
}

/// 503 when the pool cannot answer or any favorites table is missing.
async fn ready(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let missing = missing_tables(&state.pool).await.map_err(|e| {
        tracing::warn!(error = %e, "readiness check failed");
        AppError::Unavailable("database unreachable".into())
    })?;
    if !missing.is_empty() {
        return Err(AppError::Unavailable(format!("missing tables: {}", missing.join(", "))));
    }
    Ok(Json(Readiness {
        status: "ok",
        tables: TABLE_NAMES.len(),
    }))
}

async fn version() -> impl IntoResponse {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health, GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{connect_pool, ensure_tables};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn ready_requires_schema() {
        let pool = connect_pool("sqlite::memory:", 1).await.unwrap();
        let state = AppState::new(pool.clone());

        let err = ready(State(state.clone())).await.err().unwrap();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.to_string().contains("favorites"));

        ensure_tables(&pool).await.unwrap();
        let response = ready(State(state)).await.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn ready_reports_closed_pool_as_unavailable() {
        let pool = connect_pool("sqlite::memory:", 1).await.unwrap();
        ensure_tables(&pool).await.unwrap();
        pool.close().await;
        let err = ready(State(AppState::new(pool))).await.err().unwrap();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
