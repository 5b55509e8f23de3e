use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Public view of a user; never carries the password hash
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct User {
    #[schema()]
    pub id: Uuid,
    #[schema(example = "test@example.com")]
    pub email: String,
    #[schema(example = "2024-01-01T00:00:00")]
    pub created_at: NaiveDateTime,
}
