use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Form body of `POST /api/v1/auth/register`
///
/// Both fields are optional on the wire: an absent field and an empty one are
/// reported differently.
#[derive(Clone, Default, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct RegisterRequest {
    #[schema(example = "test@example.com")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[schema(example = "test_password")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl RegisterRequest {
    pub fn new<E: ToString, P: ToString>(email: E, password: P) -> Self {
        Self {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }
}

/// Form body of `POST /api/v1/auth/login`
#[derive(Clone, Default, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct LoginRequest {
    #[schema(example = "user@test.com")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[schema(example = "test1234")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn new<E: ToString, P: ToString>(email: E, password: P) -> Self {
        Self {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    /// Both credentials when present and non-empty
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.email.as_deref(), self.password.as_deref()) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Some((email, password))
            }
            _ => None,
        }
    }
}
