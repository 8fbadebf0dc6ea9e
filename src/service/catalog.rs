//! Read access to users, characters and planets, plus inserts used by seeding.

use crate::error::AppError;
use crate::models::{Character, NewCharacter, NewPlanet, NewUser, Planet, User};
use crate::store::{CHARACTER_TABLE, PLANET_TABLE, USER_TABLE};
use sqlx::SqlitePool;

pub struct CatalogService;

impl CatalogService {
    pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>, AppError> {
        let sql = format!("SELECT id, email, password, is_active FROM {} ORDER BY id", USER_TABLE);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, User>(&sql).fetch_all(pool).await?)
    }

    pub async fn get_user(pool: &SqlitePool, id: i64) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT id, email, password, is_active FROM {} WHERE id = ?1", USER_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, User>(&sql).bind(id).fetch_optional(pool).await?)
    }

    pub async fn list_characters(pool: &SqlitePool) -> Result<Vec<Character>, AppError> {
        let sql = format!("SELECT id, name, homeworld, url FROM {} ORDER BY id", CHARACTER_TABLE);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Character>(&sql).fetch_all(pool).await?)
    }

    pub async fn get_character(pool: &SqlitePool, id: i64) -> Result<Option<Character>, AppError> {
        let sql = format!("SELECT id, name, homeworld, url FROM {} WHERE id = ?1", CHARACTER_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Character>(&sql).bind(id).fetch_optional(pool).await?)
    }

    pub async fn list_planets(pool: &SqlitePool) -> Result<Vec<Planet>, AppError> {
        let sql = format!(
            "SELECT id, name, population, climate, terrain, url FROM {} ORDER BY id",
            PLANET_TABLE
        );
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Planet>(&sql).fetch_all(pool).await?)
    }

    pub async fn get_planet(pool: &SqlitePool, id: i64) -> Result<Option<Planet>, AppError> {
        let sql = format!(
            "SELECT id, name, population, climate, terrain, url FROM {} WHERE id = ?1",
            PLANET_TABLE
        );
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Planet>(&sql).bind(id).fetch_optional(pool).await?)
    }

    /// Insert a user. Returns None when the id or the email is already taken.
    pub async fn insert_user(pool: &SqlitePool, user: &NewUser) -> Result<Option<User>, AppError> {
        user.validate()?;
        let sql = format!(
            "INSERT INTO {} (id, email, password, is_active) VALUES (?1, ?2, ?3, ?4) \
             ON CONFLICT DO NOTHING RETURNING id, email, password, is_active",
            USER_TABLE
        );
        tracing::debug!(sql = %sql, email = %user.email, "insert");
        let row = sqlx::query_as::<_, User>(&sql)
            .bind(user.id)
            .bind(&user.email)
            .bind(&user.password)
            .bind(user.is_active)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Insert a character. Returns None when the id is taken or, for id-less records,
    /// when a character with the same name and url exists.
    pub async fn insert_character(pool: &SqlitePool, character: &NewCharacter) -> Result<Option<Character>, AppError> {
        character.validate()?;
        if character.id.is_none() {
            let sql = format!(
                "SELECT EXISTS(SELECT 1 FROM {} WHERE name = ?1 AND url = ?2)",
                CHARACTER_TABLE
            );
            tracing::debug!(sql = %sql, name = %character.name, "query");
            let (exists,): (i64,) = sqlx::query_as(&sql)
                .bind(&character.name)
                .bind(&character.url)
                .fetch_one(pool)
                .await?;
            if exists != 0 {
                return Ok(None);
            }
        }
        let sql = format!(
            "INSERT INTO {} (id, name, homeworld, url) VALUES (?1, ?2, ?3, ?4) \
             ON CONFLICT DO NOTHING RETURNING id, name, homeworld, url",
            CHARACTER_TABLE
        );
        tracing::debug!(sql = %sql, name = %character.name, "insert");
        let row = sqlx::query_as::<_, Character>(&sql)
            .bind(character.id)
            .bind(&character.name)
            .bind(&character.homeworld)
            .bind(&character.url)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Insert a planet. Returns None when the id is taken or, for id-less records,
    /// when a planet with the same name and url exists.
    pub async fn insert_planet(pool: &SqlitePool, planet: &NewPlanet) -> Result<Option<Planet>, AppError> {
        planet.validate()?;
        if planet.id.is_none() {
            let sql = format!(
                "SELECT EXISTS(SELECT 1 FROM {} WHERE name = ?1 AND url IS ?2)",
                PLANET_TABLE
            );
            tracing::debug!(sql = %sql, name = %planet.name, "query");
            let (exists,): (i64,) = sqlx::query_as(&sql)
                .bind(&planet.name)
                .bind(&planet.url)
                .fetch_one(pool)
                .await?;
            if exists != 0 {
                return Ok(None);
            }
        }
        let sql = format!(
            "INSERT INTO {} (id, name, population, climate, terrain, url) VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
             ON CONFLICT DO NOTHING RETURNING id, name, population, climate, terrain, url",
            PLANET_TABLE
        );
        tracing::debug!(sql = %sql, name = %planet.name, "insert");
        let row = sqlx::query_as::<_, Planet>(&sql)
            .bind(planet.id)
            .bind(&planet.name)
            .bind(&planet.population)
            .bind(&planet.climate)
            .bind(&planet.terrain)
            .bind(&planet.url)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }
}
