use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate};

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection url, e.g. `sqlite://bucketlist.db?mode=rwc` or `postgres://...`
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    /// Apply pending migrations on startup
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
    /// Log every SQL statement at debug level
    #[serde(default)]
    pub sqlx_logging: bool,
}

fn default_url() -> String {
    "sqlite://bucketlist.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    8
}

fn default_run_migrations() -> bool {
    true
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout: default_connect_timeout(),
            run_migrations: default_run_migrations(),
            sqlx_logging: false,
        }
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::ValidationError(
                "database.url cannot be empty".to_string(),
            ));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::ValidationError(
                "database.max_connections must be > 0".to_string(),
            ));
        }
        if self.min_connections > self.max_connections {
            return Err(ConfigError::ValidationError(
                "database.min_connections cannot exceed database.max_connections".to_string(),
            ));
        }
        if self.connect_timeout == 0 {
            return Err(ConfigError::ValidationError(
                "database.connect_timeout must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
