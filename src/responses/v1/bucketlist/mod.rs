use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoResponses, ToSchema};
use uuid::Uuid;

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, IntoResponses, PartialEq, Eq, Hash)]
#[response(status = 200, description = "OK")]
pub struct Bucketlist {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Go to Grand canyon for camping")]
    pub name: String,
    #[schema(example = "2024-01-01T00:00:00")]
    pub date_created: NaiveDateTime,
    #[schema(example = "2024-01-01T00:00:00")]
    pub date_modified: NaiveDateTime,
    /// Owner id
    #[schema()]
    pub created_by: Uuid,
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, IntoResponses, PartialEq, Eq)]
#[response(status = 200, description = "OK")]
pub struct BucketlistPaginationResponse {
    pub total: u64,
    pub page: u64,
    pub pages: u64,
    pub data: Vec<Bucketlist>,
}
