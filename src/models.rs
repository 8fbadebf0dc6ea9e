//! Stored record types and their JSON representation.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account that owns favorites. The password column is stored but never serialized.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub homeworld: Option<String>,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub population: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub url: Option<String>,
}

/// Kind of record a favorite points at. Stored as lowercase text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Character,
    Planet,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Character => "character",
            ItemType::Planet => "planet",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ItemType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "character" => Ok(ItemType::Character),
            "planet" => Ok(ItemType::Planet),
            _ => Err(AppError::BadRequest(format!(
                "invalid item type: {} (expected character or planet)",
                s
            ))),
        }
    }
}

impl TryFrom<String> for ItemType {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Link between a user and a character or planet.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    #[sqlx(try_from = "String")]
    pub item_type: ItemType,
    pub item_id: i64,
}

pub const EMAIL_MAX_LEN: usize = 120;
pub const PASSWORD_MAX_LEN: usize = 80;

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

fn default_active() -> bool {
    true
}

/// Insertable user. `id` is assigned by the database when omitted.
#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub id: Option<i64>,
    pub email: String,
    pub password: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl NewUser {
    /// Check the column limits before the insert reaches the table constraints.
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("email", &self.email)?;
        if !self.email.contains('@') {
            return Err(AppError::Validation(format!("email must be a valid address: {}", self.email)));
        }
        if self.email.chars().count() > EMAIL_MAX_LEN {
            return Err(AppError::Validation(format!(
                "email must be at most {} characters",
                EMAIL_MAX_LEN
            )));
        }
        require_text("password", &self.password)?;
        if self.password.chars().count() > PASSWORD_MAX_LEN {
            return Err(AppError::Validation(format!(
                "password must be at most {} characters",
                PASSWORD_MAX_LEN
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCharacter {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub homeworld: Option<String>,
    pub url: String,
}

impl NewCharacter {
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("name", &self.name)?;
        require_text("url", &self.url)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPlanet {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub population: Option<String>,
    #[serde(default)]
    pub climate: Option<String>,
    #[serde(default)]
    pub terrain: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl NewPlanet {
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("name", &self.name)
    }
}
