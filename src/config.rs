use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database = DatabaseConfig {
            url: env::var("DATABASE_URL")
                .context("DATABASE_URL must be set")?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a number")?,
        };

        Ok(Config { database })
    }

    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_url_accessor() {
        let config = Config {
            database: DatabaseConfig {
                url: "sqlite://games.db".to_string(),
                max_connections: 5,
            },
        };

        assert_eq!(config.database_url(), "sqlite://games.db");
    }

    #[test]
    fn test_from_env_reads_database_settings() {
        env::set_var("DATABASE_URL", "sqlite::memory:");
        env::set_var("DATABASE_MAX_CONNECTIONS", "3");

        let config = Config::from_env().expect("config should load from env");
        assert_eq!(config.database_url(), "sqlite::memory:");
        assert_eq!(config.database.max_connections, 3);
    }
}
