//! HTTP handlers for the catalog and per-user favorites.

pub mod catalog;
pub mod favorites;
pub use catalog::*;
pub use favorites::*;
