//! Per-user favorites: list, add, remove.

use crate::error::{is_unique_violation, AppError};
use crate::models::{Favorite, ItemType};
use crate::store::{CHARACTER_TABLE, FAVORITE_TABLE, PLANET_TABLE};
use sqlx::SqlitePool;

pub struct FavoriteService;

impl FavoriteService {
    pub async fn list_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Favorite>, AppError> {
        let sql = format!(
            "SELECT id, user_id, item_type, item_id FROM {} WHERE user_id = ?1 ORDER BY id",
            FAVORITE_TABLE
        );
        tracing::debug!(sql = %sql, user_id, "query");
        Ok(sqlx::query_as::<_, Favorite>(&sql).bind(user_id).fetch_all(pool).await?)
    }

    /// Whether the character or planet a favorite would point at exists.
    pub async fn item_exists(pool: &SqlitePool, item_type: ItemType, item_id: i64) -> Result<bool, AppError> {
        let table = match item_type {
            ItemType::Character => CHARACTER_TABLE,
            ItemType::Planet => PLANET_TABLE,
        };
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?1)", table);
        tracing::debug!(sql = %sql, item_id, "query");
        let (exists,): (i64,) = sqlx::query_as(&sql).bind(item_id).fetch_one(pool).await?;
        Ok(exists != 0)
    }

    /// Add a favorite. The item must exist and the (user, type, item) triple must be new.
    pub async fn add(
        pool: &SqlitePool,
        user_id: i64,
        item_type: ItemType,
        item_id: i64,
    ) -> Result<Favorite, AppError> {
        if !Self::item_exists(pool, item_type, item_id).await? {
            return Err(AppError::NotFound(format!("{} {}", item_type, item_id)));
        }
        let sql = format!(
            "INSERT INTO {} (user_id, item_type, item_id) VALUES (?1, ?2, ?3) \
             RETURNING id, user_id, item_type, item_id",
            FAVORITE_TABLE
        );
        tracing::debug!(sql = %sql, user_id, item_type = %item_type, item_id, "insert");
        sqlx::query_as::<_, Favorite>(&sql)
            .bind(user_id)
            .bind(item_type.as_str())
            .bind(item_id)
            .fetch_one(pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::Conflict(format!("{} {} is already a favorite", item_type, item_id))
                } else {
                    AppError::Db(e)
                }
            })
    }

    /// Remove one favorite. NotFound when the user has no such favorite.
    pub async fn remove(
        pool: &SqlitePool,
        user_id: i64,
        item_type: ItemType,
        item_id: i64,
    ) -> Result<(), AppError> {
        let sql = format!(
            "DELETE FROM {} WHERE user_id = ?1 AND item_type = ?2 AND item_id = ?3",
            FAVORITE_TABLE
        );
        tracing::debug!(sql = %sql, user_id, item_type = %item_type, item_id, "delete");
        let result = sqlx::query(&sql)
            .bind(user_id)
            .bind(item_type.as_str())
            .bind(item_id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("favorite {} {}", item_type, item_id)));
        }
        Ok(())
    }
}
