//! Connection setup and migrations

use std::time::Duration;

use bucketlist_api_migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::config::DatabaseConfig;

/// Open a connection pool according to `config`, applying migrations when enabled
#[::tracing::instrument(skip(config), fields(max_connections = config.max_connections))]
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());

    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(options).await?;

    if config.run_migrations {
        migrate(&db).await?;
    }

    ::tracing::info!("Database connected");

    Ok(db)
}

/// In-memory SQLite with every migration applied
///
/// The pool is pinned to a single connection because each SQLite
/// `:memory:` connection is its own database.
pub async fn memory() -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());

    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options).await?;

    migrate(&db).await?;

    Ok(db)
}

pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    ::tracing::debug!("Applying pending migrations");

    Migrator::up(db, None).await
}
