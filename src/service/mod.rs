//! Data access services. Each call takes the pool explicitly; no global session.

mod catalog;
mod favorites;
pub use catalog::CatalogService;
pub use favorites::FavoriteService;
