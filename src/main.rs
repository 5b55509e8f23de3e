use anyhow::Context;

use bucketlist_api::security::PasswordHasher;
use bucketlist_api::{config, database, server, telemetry};

#[actix::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load().context("Failed to load configuration")?;

    telemetry::init(&config.observability);

    ::tracing::info!(
        name = %config.app.name,
        version = %config.app.version,
        environment = %config.app.environment,
        "Configuration loaded"
    );

    let db = database::connect(&config.database)
        .await
        .context("Failed to connect to database")?;
    let hasher =
        PasswordHasher::from_config(&config.auth).context("Invalid Argon2 parameters")?;

    server::run(config, db, hasher)?
        .await
        .context("HTTP server terminated with an error")
}
