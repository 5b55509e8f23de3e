use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, ResponseError};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::{IntoResponses, ToSchema};

/// Error returned by every handler in this crate.
///
/// Each variant renders as `{"message": "..."}` with its status code.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{message}")]
    BadRequest { message: String },
    #[error("{message}")]
    Unauthorized { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Conflict { message: String },
    #[error("{message}")]
    InternalServerError { message: String },
}

impl Error {
    pub fn bad_request<T: ToString>(message: T) -> Self {
        Self::BadRequest {
            message: message.to_string(),
        }
    }

    pub fn unauthorized<T: ToString>(message: T) -> Self {
        Self::Unauthorized {
            message: message.to_string(),
        }
    }

    pub fn not_found<T: ToString>(message: T) -> Self {
        Self::NotFound {
            message: message.to_string(),
        }
    }

    pub fn conflict<T: ToString>(message: T) -> Self {
        Self::Conflict {
            message: message.to_string(),
        }
    }

    pub fn internal<T: ToString>(message: T) -> Self {
        Self::InternalServerError {
            message: message.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest { message }
            | Self::Unauthorized { message }
            | Self::NotFound { message }
            | Self::Conflict { message }
            | Self::InternalServerError { message } => message,
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status_code()).json(Message::new(self.message()))
    }
}

impl From<DbErr> for Error {
    fn from(error: DbErr) -> Self {
        ::tracing::error!(error = %error, "Database operation failed");

        Self::internal("Internal server error")
    }
}

/// Plain `{"message": "..."}` body.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, IntoResponses, PartialEq, Eq)]
#[response(status = 200, description = "OK")]
pub struct Message {
    #[schema(example = "You registered successfully. Please log in.")]
    pub message: String,
}

impl Message {
    pub fn new<T: ToString>(message: T) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Responder for Message {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(self)
    }
}
