use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::config::auth::AuthConfig;
use crate::entities::v1::{tokens, users};
use crate::errors::Error;
use crate::metrics::AppMetrics;
use crate::requests::v1::auth::LoginRequest;
use crate::responses::v1::auth::LoggedIn;
use crate::security::PasswordHasher;

pub const MISSING_CREDENTIALS: &str = "Email address and password are required.";
pub const INVALID_CREDENTIALS: &str = "Invalid email or password, Please try again.";

/// Verify the credentials and issue a bearer token
///
/// Unknown email and wrong password produce the same 401.
#[::tracing::instrument(skip_all, fields(email = ?request.email))]
pub async fn login(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
    config: &AuthConfig,
    metrics: Option<&AppMetrics>,
    request: LoginRequest,
) -> Result<LoggedIn, Error> {
    let (email, password) = request
        .credentials()
        .ok_or_else(|| Error::bad_request(MISSING_CREDENTIALS))?;

    let user = match users::Model::find_by_email(db, email).await? {
        Some(user) => user,
        None => {
            ::tracing::debug!("Unknown email");
            record(metrics, false);

            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        }
    };

    let verified = hasher.verify(password, &user.password).map_err(|e| {
        ::tracing::error!(user_id = %user.id, error = %e, "Stored password hash is unreadable");
        Error::internal("Internal server error")
    })?;

    if !verified {
        ::tracing::debug!(user_id = %user.id, "Wrong password");
        record(metrics, false);

        return Err(Error::unauthorized(INVALID_CREDENTIALS));
    }

    let lifetime = Duration::from_secs(config.token_expiration);
    let token = tokens::Model::issue(db, user.id, lifetime).await?;

    record(metrics, true);
    ::tracing::info!(user_id = %user.id, "User logged in");

    Ok(LoggedIn::new(token.bearer()))
}

fn record(metrics: Option<&AppMetrics>, success: bool) {
    if let Some(metrics) = metrics {
        metrics.record_login_attempt(success);
    }
}
