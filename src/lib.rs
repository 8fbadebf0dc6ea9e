//! Star Wars favorites: REST backend for users, characters, planets and per-user favorites.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{SeedData, SeedReport, Settings};
pub use error::{AppError, ConfigError};
pub use models::{Character, Favorite, ItemType, Planet, User};
pub use routes::{api_routes, app, common_routes};
pub use service::{CatalogService, FavoriteService};
pub use state::AppState;
pub use store::{connect_pool, ensure_tables};
