//! Environment-backed configuration.
//!
//! All recognized options are read once at process start into an immutable
//! [`Config`] that is passed into the components needing it; request paths
//! never touch the environment.

/// Full service configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
        }
    }
}

/// HTTP listener address.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_parse_or("PORT", 5000),
        }
    }

    /// Address string for the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// MySQL connection settings.
///
/// Every option defaults when absent; the password defaults to empty.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            host: env_or("MYSQL_HOST", "localhost"),
            user: env_or("MYSQL_USER", "root"),
            password: env_or("MYSQL_PASSWORD", ""),
            database: env_or("MYSQL_DB", "study_buddy"),
            port: env_parse_or("MYSQL_PORT", 3306),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
