//! Runtime settings read from the environment (optionally via `.env`).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    /// JSON fixtures inserted at startup. None disables seeding.
    pub seed_path: Option<PathBuf>,
}

impl Settings {
    /// Read settings from process environment. Call `dotenvy::dotenv()` first to honor `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        if !database_url.starts_with("sqlite:") {
            return Err(ConfigError::UnsupportedDatabase(database_url));
        }

        let port = match get("PORT") {
            Some(v) => v.parse::<u16>().map_err(|e| ConfigError::InvalidVar {
                name: "PORT",
                reason: format!("{}: {}", v, e),
            })?,
            None => DEFAULT_PORT,
        };

        let max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(v) => {
                let n = v.parse::<u32>().map_err(|e| ConfigError::InvalidVar {
                    name: "DB_MAX_CONNECTIONS",
                    reason: format!("{}: {}", v, e),
                })?;
                if n == 0 {
                    return Err(ConfigError::InvalidVar {
                        name: "DB_MAX_CONNECTIONS",
                        reason: "must be at least 1".into(),
                    });
                }
                n
            }
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Settings {
            database_url,
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            port,
            max_connections,
            seed_path: get("SEED_PATH").map(PathBuf::from),
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::InvalidVar {
                name: "HOST",
                reason: format!("{}: {}", self.host, e),
            })
    }
}
