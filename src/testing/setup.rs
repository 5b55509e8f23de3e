use std::time::Duration;

use rand::Rng;
use sea_orm::{DatabaseConnection, DbErr};

use crate::config::auth::{Argon2Config, AuthConfig};
use crate::database;
use crate::entities::v1::{tokens, users};
use crate::models::v1::user::{StoreError, UserStore};
use crate::security::password::{HashError, Hasher, PasswordHasher};

/// Password every user from [`create_test_user`] is registered with
pub const PASSWORD: &str = "password";

/// Returns an in-memory SQLite database with all migrations applied
///
/// Every call opens a fresh database, so tests never see each other's rows.
///
/// # Panics
/// Panics if the connection or a migration fails. Tests should fail fast when
/// their setup is broken.
///
/// # Example
/// ```no_run
/// use bucketlist_api::testing::setup;
///
/// #[tokio::test]
/// async fn test_something() {
///     let db = setup::database().await;
///     // Use db for testing
/// }
/// ```
pub async fn database() -> DatabaseConnection {
    database::memory()
        .await
        .expect("Failed to open in-memory database")
}

/// Auth settings with Argon2 parameters cut down for tests
///
/// - memory_cost: 19456 KB (19 MB instead of 64 MB)
/// - time_cost: 1 iteration (instead of 3)
/// - parallelism: 1 lane (instead of 4)
/// - hash_length: 32 bytes (same as production)
pub fn auth_config() -> AuthConfig {
    AuthConfig {
        argon2: Argon2Config {
            memory_cost: 19456,
            time_cost: 1,
            parallelism: 1,
            hash_length: 32,
        },
        ..AuthConfig::default()
    }
}

/// Returns a PasswordHasher built from [`auth_config`]
///
/// Hashes the same way production does, only much faster.
pub fn password_hasher() -> Result<PasswordHasher, HashError> {
    PasswordHasher::from_config(&auth_config())
}

/// Helper to create a test user with a random email
///
/// The password is always [`PASSWORD`].
///
/// # Example
/// ```no_run
/// use bucketlist_api::testing::setup;
///
/// #[tokio::test]
/// async fn test_user_creation() {
///     let db = setup::database().await;
///     let hasher = setup::password_hasher().unwrap();
///
///     let user1 = setup::create_test_user(&db, &hasher).await.unwrap();
///     let user2 = setup::create_test_user(&db, &hasher).await.unwrap();
///
///     assert_ne!(user1.email, user2.email);
/// }
/// ```
pub async fn create_test_user(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
) -> Result<users::Model, DbErr> {
    let random_suffix: u32 = rand::thread_rng().r#gen();
    let email = format!("test_{}@example.com", random_suffix);
    let password = hasher.hash(PASSWORD).expect("Failed to hash password");

    match db.create(&email, password).await {
        Ok(user) => Ok(user),
        Err(StoreError::Database(e)) => Err(e),
        Err(StoreError::Conflict) => Err(DbErr::Custom(format!("{email} already exists"))),
    }
}

/// Issue a one hour token for `user` and return it as a bearer string
pub async fn bearer(db: &DatabaseConnection, user: &users::Model) -> Result<String, DbErr> {
    let token = tokens::Model::issue(db, user.id, Duration::from_secs(60 * 60)).await?;

    Ok(token.bearer())
}
