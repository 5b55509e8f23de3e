pub mod app;
pub mod auth;
pub mod database;
pub mod observability;
pub mod security;
pub mod server;

use thiserror::Error;

pub use app::{AppConfig, AppMetadata};
pub use auth::{Argon2Config, AuthConfig};
pub use database::DatabaseConfig;
pub use observability::{LogFormat, ObservabilityConfig};
pub use security::{CorsConfig, SecurityConfig};
pub use server::ServerConfig;

/// Configuration loading or validation failure
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Sanity checks run after deserialization
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Load the application configuration from files and environment variables
pub fn load() -> Result<AppConfig, ConfigError> {
    app::load_config()
}
