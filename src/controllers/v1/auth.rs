use actix_web::web::Data;
use actix_web::Responder;
use sea_orm::DatabaseConnection;

use crate::config::auth::AuthConfig;
use crate::errors::{Error, Message};
use crate::metrics::AppMetrics;
use crate::middlewares::v1::auth::Auth;
use crate::requests::FormFields;
use crate::requests::v1::auth::{LoginRequest, RegisterRequest};
use crate::responses::v1::auth::{LoggedIn, Registered};
use crate::security::PasswordHasher;
use crate::services;
use crate::services::v1::auth::register::{
    CONFLICT, RegistrationOutcome, RegistrationPolicy,
};

/// Register a new user
///
/// Either field may be left out; each missing, empty or malformed combination
/// has its own 400 message.
///
/// Fail if a user with this email already exists
#[utoipa::path(
    tag = "Auth",
    request_body(content = RegisterRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        Registered,
        (status = 400, description = "Invalid or missing fields", body = Message),
        (status = 409, description = "Email already registered", body = Message),
        (status = 500, description = "Internal server error", body = Message),
    )
)]
#[post("/api/v1/auth/register")]
pub async fn register(
    db: Data<DatabaseConnection>,
    hasher: Data<PasswordHasher>,
    config: Data<AuthConfig>,
    metrics: Data<AppMetrics>,
    FormFields(request): FormFields<RegisterRequest>,
) -> Result<impl Responder, Error> {
    let policy = RegistrationPolicy::from(config.get_ref());
    let outcome =
        services::v1::auth::register::register(db.get_ref(), hasher.get_ref(), &policy, &request)
            .await?;

    metrics.record_registration(outcome.label());

    match outcome {
        RegistrationOutcome::Created(user) => Ok(Registered::from(user)),
        RegistrationOutcome::Conflict => Err(Error::conflict(CONFLICT)),
        RegistrationOutcome::Rejected(rejection) => Err(rejection.into()),
    }
}

/// Create a new session
///
/// Fail if:
/// - email or password is missing
/// - email not found or password is incorrect
#[utoipa::path(
    tag = "Auth",
    request_body(content = LoginRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        LoggedIn,
        (status = 400, description = "Missing credentials", body = Message),
        (status = 401, description = "Invalid credentials", body = Message),
        (status = 500, description = "Internal server error", body = Message),
    )
)]
#[post("/api/v1/auth/login")]
pub async fn login(
    db: Data<DatabaseConnection>,
    hasher: Data<PasswordHasher>,
    config: Data<AuthConfig>,
    metrics: Data<AppMetrics>,
    FormFields(request): FormFields<LoginRequest>,
) -> Result<impl Responder, Error> {
    let response =
        services::v1::auth::login::login(&db, &hasher, &config, Some(metrics.get_ref()), request).await?;
    Ok(response)
}

/// Destroy current session
///
/// Only the token sent with this request is revoked.
#[utoipa::path(
    tag = "Auth",
    security(("token" = [])),
    responses(
        Message,
        (status = 401, description = "Missing, invalid or expired token", body = Message),
        (status = 500, description = "Internal server error", body = Message),
    )
)]
#[post("/api/v1/auth/logout")]
pub async fn logout(auth: Auth, db: Data<DatabaseConnection>) -> Result<impl Responder, Error> {
    let response = services::v1::auth::logout::logout(auth, &db).await?;
    Ok(response)
}
