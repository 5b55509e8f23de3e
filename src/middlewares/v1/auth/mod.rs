use std::future::Future;
use std::pin::Pin;
use std::time::Instant;

use actix_web::dev::Payload;
use actix_web::web::Data;
use actix_web::{FromRequest, HttpRequest};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::entities::v1::tokens;
use crate::errors::Error;
use crate::helpers::now;
use crate::responses::v1::user::User;

/// Caller resolved from an `Authorization: Bearer <token>` header
///
/// Extracting it fails with 401 when the header is missing or malformed, or
/// when the token is unknown or expired.
#[derive(Clone, Debug)]
pub struct Auth {
    /// Token the request was made with
    pub id: Uuid,
    pub user: User,
}

fn reject(message: &'static str) -> Pin<Box<dyn Future<Output = Result<Auth, Error>>>> {
    Box::pin(async move {
        ::tracing::debug!(reason = message, "Authentication rejected");

        Err(Error::unauthorized(message))
    })
}

impl FromRequest for Auth {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let start = Instant::now();

        let db = match req.app_data::<Data<DatabaseConnection>>().cloned() {
            Some(db) => db,
            None => {
                return Box::pin(async move {
                    ::tracing::error!("Failed to get database connection");

                    Err(Error::internal("Internal server error"))
                });
            }
        };

        let header = match req.headers().get("Authorization") {
            Some(header) => header,
            None => return reject("Authorization header is missing."),
        };

        let header = match header.to_str() {
            Ok(header) => header,
            Err(_) => return reject("Invalid authorization header."),
        };

        let token = match header.strip_prefix("Bearer ") {
            Some(token) => token.trim(),
            None => return reject("Invalid authorization header."),
        };

        let id = match tokens::Model::parse_bearer(token) {
            Some(id) => id,
            None => return reject("Invalid token."),
        };

        Box::pin(async move {
            let (token, user) = match tokens::Model::find_with_user(&db, id).await? {
                Some(found) => found,
                None => {
                    ::tracing::debug!(token_id = %id, "Token not found");

                    return Err(Error::unauthorized("Invalid token."));
                }
            };

            if token.is_expired_at(now()) {
                ::tracing::debug!(token_id = %id, "Token expired");

                return Err(Error::unauthorized("Token expired. Please log in again."));
            }

            ::tracing::debug!(user_id = %user.id, "Authentication took: {:?}", start.elapsed());

            Ok(Auth {
                id: token.id,
                user: user.into(),
            })
        })
    }
}
