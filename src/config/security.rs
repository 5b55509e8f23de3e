use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate};

/// Security configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecurityConfig {
    #[serde(default)]
    pub cors: CorsConfig,
}

/// CORS (Cross-Origin Resource Sharing) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_cors_enabled")]
    pub enabled: bool,
    /// Allowed origins, `*` allows any
    #[serde(default = "default_cors_origins")]
    pub origins: Vec<String>,
    /// Max age in seconds for preflight requests
    #[serde(default = "default_cors_max_age")]
    pub max_age: usize,
}

fn default_cors_enabled() -> bool {
    true
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_cors_max_age() -> usize {
    3600
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: default_cors_enabled(),
            origins: default_cors_origins(),
            max_age: default_cors_max_age(),
        }
    }
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.origins.iter().any(|origin| origin == "*")
    }
}

impl Validate for SecurityConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.cors.validate()
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.origins.is_empty() {
            return Err(ConfigError::ValidationError(
                "security.cors.origins cannot be empty when CORS is enabled".to_string(),
            ));
        }
        Ok(())
    }
}
