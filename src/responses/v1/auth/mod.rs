use actix_web::body::BoxBody;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::{IntoResponses, ToSchema};
use uuid::Uuid;

use crate::responses::v1::user::User;

pub const REGISTERED: &str = "You registered successfully. Please log in.";
pub const LOGGED_IN: &str = "You logged in successfully.";
pub const LOGGED_OUT: &str = "You logged out successfully.";

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, IntoResponses, PartialEq, Eq)]
#[response(status = 201, description = "Registered")]
pub struct Registered {
    #[schema(example = "You registered successfully. Please log in.")]
    pub message: String,
    #[schema()]
    pub id: Uuid,
    #[schema(example = "test@example.com")]
    pub email: String,
}

impl From<User> for Registered {
    fn from(user: User) -> Self {
        Self {
            message: REGISTERED.to_string(),
            id: user.id,
            email: user.email,
        }
    }
}

impl Responder for Registered {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Created().json(self)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, IntoResponses, PartialEq, Eq)]
#[response(status = 200, description = "Authenticated")]
pub struct LoggedIn {
    #[schema(example = "You logged in successfully.")]
    pub message: String,
    /// Bearer credential for the `Authorization` header
    #[schema(example = "3f2a9c0d5e8b4a7c9d1e2f3a4b5c6d7e")]
    pub access_token: String,
}

impl LoggedIn {
    pub fn new(access_token: String) -> Self {
        Self {
            message: LOGGED_IN.to_string(),
            access_token,
        }
    }
}

impl Responder for LoggedIn {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(self)
    }
}
