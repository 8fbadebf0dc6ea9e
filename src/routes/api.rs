//! Catalog and favorites routes.

use crate::error::AppError;
use crate::handlers::{
    add_favorite, delete_favorite, get_character, get_planet, list_characters, list_favorites, list_planets,
    list_users,
};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

async fn route_not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(format!("route {}", uri.path()))
}

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/user", get(list_users))
        .route("/characters", get(list_characters))
        .route("/characters/:id", get(get_character))
        .route("/planet", get(list_planets))
        .route("/planet/:id", get(get_planet))
        .route("/users/favorites", get(list_favorites))
        .route(
            "/favorite/:item_type/:item_id",
            post(add_favorite).delete(delete_favorite),
        )
        .fallback(route_not_found)
        .with_state(state)
}
