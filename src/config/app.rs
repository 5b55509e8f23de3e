use serde::{Deserialize, Serialize};

use super::{
    AuthConfig, ConfigError, DatabaseConfig, ObservabilityConfig, SecurityConfig, ServerConfig,
    Validate,
};

/// Environment variable prefix, e.g. `BUCKETLIST__SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "BUCKETLIST";

/// Top-level application configuration that aggregates all config modules
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application metadata
    #[serde(default)]
    pub app: AppMetadata,
    /// Server configuration (host, port, workers)
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration (url, pool sizes, migrations)
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication configuration (tokens, registration policy, Argon2)
    #[serde(default)]
    pub auth: AuthConfig,
    /// Security configuration (CORS)
    #[serde(default)]
    pub security: SecurityConfig,
    /// Observability configuration (log level and format)
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Application metadata configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppMetadata {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_app_version")]
    pub version: String,
    /// development, staging, production
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_app_name() -> String {
    "bucketlist-api".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
            environment: default_environment(),
        }
    }
}

impl Validate for AppMetadata {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::ValidationError(
                "app.name cannot be empty".to_string(),
            ));
        }
        if self.version.is_empty() {
            return Err(ConfigError::ValidationError(
                "app.version cannot be empty".to_string(),
            ));
        }
        if self.environment.is_empty() {
            return Err(ConfigError::ValidationError(
                "app.environment cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.app.validate()?;
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.security.validate()?;
        self.observability.validate()?;
        Ok(())
    }
}

/// Load configuration from files and environment variables
///
/// Precedence (highest to lowest):
/// 1. Environment variables: BUCKETLIST__SERVER__PORT=8080
/// 2. config/local.toml (git-ignored, developer overrides)
/// 3. config/{APP_ENV}.toml (development/staging/production)
/// 4. config/default.toml (base defaults)
pub fn load_config() -> Result<AppConfig, ConfigError> {
    use ::config::{Config, Environment, File};

    let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

    let config = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", env)).required(false))
        .add_source(File::with_name("config/local").required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("security.cors.origins")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate()?;

    Ok(app_config)
}
