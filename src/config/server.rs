use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Worker threads, one per core unless overridden
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_workers() -> usize {
    num_cpus::get()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::ValidationError(
                "server.host cannot be empty".to_string(),
            ));
        }
        if self.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be > 0".to_string(),
            ));
        }
        if self.workers == 0 {
            return Err(ConfigError::ValidationError(
                "server.workers must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
