//! HTTP server bootstrap

use std::io;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use sea_orm::DatabaseConnection;

use crate::config::{AppConfig, CorsConfig};
use crate::entities::v1::tokens;
use crate::metrics::{AppMetrics, MetricsMiddleware};
use crate::router;
use crate::security::PasswordHasher;

fn cors(config: &CorsConfig) -> Cors {
    if !config.enabled {
        return Cors::default();
    }

    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(config.max_age);

    if config.allows_any_origin() {
        return cors.allow_any_origin();
    }

    config
        .origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

/// Periodically delete expired tokens until the system stops
pub fn spawn_token_cleanup(db: DatabaseConnection, metrics: AppMetrics, every: Duration) {
    actix::spawn(async move {
        let mut interval = actix::clock::interval(every);

        loop {
            interval.tick().await;

            match tokens::Model::purge_expired(&db).await {
                Ok(0) => {}
                Ok(purged) => {
                    metrics.record_tokens_purged(purged);
                    ::tracing::info!(purged, "Expired tokens removed");
                }
                Err(e) => ::tracing::error!(error = %e, "Failed to purge expired tokens"),
            }
        }
    });
}

/// Bind the HTTP server with all shared state and start the token sweeper
pub fn run(config: AppConfig, db: DatabaseConnection, hasher: PasswordHasher) -> io::Result<Server> {
    let metrics = AppMetrics::with_metadata(Some(&config.app));

    spawn_token_cleanup(
        db.clone(),
        metrics.clone(),
        Duration::from_secs(config.auth.token_cleanup_interval),
    );

    let db = Data::new(db);
    let hasher = Data::new(hasher);
    let auth = Data::new(config.auth.clone());
    let cors_config = config.security.cors.clone();
    let metrics_data = Data::new(metrics.clone());

    let (host, port) = config.server.address();
    ::tracing::info!(%host, port, workers = config.server.workers, "Starting HTTP server");

    let server = HttpServer::new(move || {
        App::new()
            .wrap(MetricsMiddleware::new(metrics.clone()))
            .wrap(cors(&cors_config))
            .wrap(Logger::default())
            .app_data(db.clone())
            .app_data(hasher.clone())
            .app_data(auth.clone())
            .app_data(metrics_data.clone())
            .configure(router::route)
    })
    .workers(config.server.workers)
    .bind((host, port))?
    .run();

    Ok(server)
}
