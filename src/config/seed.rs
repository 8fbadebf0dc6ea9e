//! Seed fixtures: users, characters and planets loaded from a JSON file at startup.

use crate::error::{AppError, ConfigError};
use crate::models::{NewCharacter, NewPlanet, NewUser};
use crate::service::CatalogService;
use serde::Deserialize;
use sqlx::SqlitePool;
use std::path::Path;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<NewUser>,
    #[serde(default)]
    pub characters: Vec<NewCharacter>,
    #[serde(default)]
    pub planets: Vec<NewPlanet>,
}

/// Rows actually inserted; records already present (same id, email, or name and url) are skipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub characters: usize,
    pub planets: usize,
}

impl SeedData {
    pub async fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let seed_err = |reason: String| ConfigError::Seed {
            path: path.display().to_string(),
            reason,
        };
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| seed_err(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| seed_err(e.to_string()))
    }

    /// Insert every record. Safe to rerun: records already present are left untouched.
    pub async fn apply(&self, pool: &SqlitePool) -> Result<SeedReport, AppError> {
        let mut report = SeedReport::default();
        for user in &self.users {
            if CatalogService::insert_user(pool, user).await?.is_some() {
                report.users += 1;
            }
        }
        for character in &self.characters {
            if CatalogService::insert_character(pool, character).await?.is_some() {
                report.characters += 1;
            }
        }
        for planet in &self.planets {
            if CatalogService::insert_planet(pool, planet).await?.is_some() {
                report.planets += 1;
            }
        }
        tracing::info!(
            users = report.users,
            characters = report.characters,
            planets = report.planets,
            "seed applied"
        );
        Ok(report)
    }
}
