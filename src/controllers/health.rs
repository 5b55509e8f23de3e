//! Health check endpoints
//!
//! `/health` only proves the process answers; `/health/db` also pings the
//! database.

use actix_web::web::{Data, Json};
use actix_web::{HttpResponse, Responder};
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LivenessResponse {
    /// Service status
    pub status: String,
    /// Timestamp of the check
    pub timestamp: DateTime<Utc>,
}

/// Health check response including the database
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Application version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// Liveness check endpoint
///
/// Always 200 while the process is serving requests.
#[utoipa::path(
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = LivenessResponse),
    )
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    ::tracing::debug!("Liveness check: healthy");

    Json(LivenessResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}

/// Health check including database connectivity
#[utoipa::path(
    tag = "Health",
    responses(
        (status = 200, description = "Service and database are healthy", body = HealthResponse),
        (status = 503, description = "Database unavailable", body = HealthResponse),
    )
)]
#[get("/health/db")]
pub async fn health_db(db: Data<DatabaseConnection>) -> impl Responder {
    let connected = match db.ping().await {
        Ok(()) => true,
        Err(e) => {
            ::tracing::warn!(error = %e, "Database ping failed");
            false
        }
    };

    let response = HealthResponse {
        status: if connected { "healthy" } else { "unhealthy" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if connected { "connected" } else { "disconnected" }.to_string(),
    };

    if connected {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
