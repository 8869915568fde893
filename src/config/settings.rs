use serde::Deserialize;
use thiserror::Error;

use crate::config::env::{self, EnvKey};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    /// When unset the service keeps genres in memory.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub jwt_secret: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            server_host: env::get_or(EnvKey::ServerHost, "0.0.0.0"),
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            database_url: env::get_optional(EnvKey::DatabaseUrl),
            db_max_connections: env::get_parsed(EnvKey::DbMaxConnections, 20),
            jwt_secret: env::get_optional(EnvKey::JwtSecret)
                .ok_or(ConfigError::Missing(EnvKey::JwtSecret.as_str()))?,
        })
    }

    /// Config for an in-memory deployment, used by tests and local runs.
    pub fn in_memory(jwt_secret: impl Into<String>) -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
            database_url: None,
            db_max_connections: 1,
            jwt_secret: jwt_secret.into(),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
