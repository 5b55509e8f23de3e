//! Configuration loading tests
//!
//! These mutate process environment variables, so every test is `#[serial]`.

use bucketlist_api::config::*;
use serial_test::serial;
use std::env;

mod utils {
    /// Remove every variable with the BUCKETLIST prefix
    pub fn clean_env_vars() {
        let keys: Vec<String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("BUCKETLIST"))
            .map(|(k, _)| k)
            .collect();

        for key in keys {
            unsafe { std::env::remove_var(&key) };
        }
        unsafe { std::env::remove_var("APP_ENV") };
    }
}

#[test]
#[serial]
fn test_load_default_config_success() {
    utils::clean_env_vars();

    let config = load();
    assert!(config.is_ok(), "Failed to load default configuration: {:?}", config.err());
    let config = config.unwrap();

    assert_eq!(config.app.name, "bucketlist-api");
    assert_eq!(config.app.environment, "development");
    assert_eq!(config.server.port, 8080);
    assert!(config.server.workers > 0);
    assert!(config.database.url.starts_with("sqlite:"));
    assert_eq!(config.auth.token_expiration, 3600);
    assert_eq!(config.auth.min_password_length, 8);
    assert_eq!(config.auth.argon2.memory_cost, 65536);
    assert!(config.security.cors.allows_any_origin());
    assert_eq!(config.observability.log_format, LogFormat::Pretty);
}

#[test]
#[serial]
fn test_env_vars_override_files() {
    utils::clean_env_vars();
    unsafe {
        env::set_var("BUCKETLIST__SERVER__PORT", "9090");
        env::set_var("BUCKETLIST__AUTH__MIN_PASSWORD_LENGTH", "12");
        env::set_var("BUCKETLIST__OBSERVABILITY__LOG_FORMAT", "json");
        env::set_var(
            "BUCKETLIST__SECURITY__CORS__ORIGINS",
            "https://a.example,https://b.example",
        );
    }

    let config = load().unwrap();

    assert_eq!(config.server.port, 9090);
    assert_eq!(config.auth.min_password_length, 12);
    assert_eq!(config.observability.log_format, LogFormat::Json);
    assert_eq!(
        config.security.cors.origins,
        vec!["https://a.example".to_string(), "https://b.example".to_string()]
    );
    assert!(!config.security.cors.allows_any_origin());

    utils::clean_env_vars();
}

#[test]
#[serial]
fn test_invalid_values_are_rejected() {
    utils::clean_env_vars();
    unsafe { env::set_var("BUCKETLIST__AUTH__TOKEN_EXPIRATION", "0") };

    let error = load().unwrap_err();
    assert!(matches!(error, ConfigError::ValidationError(_)));
    assert!(error.to_string().contains("auth.token_expiration"));

    utils::clean_env_vars();
}

#[test]
#[serial]
fn test_unknown_environment_file_is_optional() {
    utils::clean_env_vars();
    unsafe { env::set_var("APP_ENV", "nonexistent") };

    assert!(load().is_ok());

    utils::clean_env_vars();
}
