use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerHost,
    ServerPort,
    DatabaseUrl,
    DbMaxConnections,
    JwtSecret,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerHost => "APP_HOST",
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::DatabaseUrl => "DATABASE_URL",
            EnvKey::DbMaxConnections => "DB_MAX_CONNECTIONS",
            EnvKey::JwtSecret => "JWT_SECRET",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

/// Like [`get`], but an unset or blank variable is `None`.
pub fn get_optional(key: EnvKey) -> Option<String> {
    env::var(key.as_str())
        .ok()
        .filter(|value| !value.trim().is_empty())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
