use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::errors::Error;

pub const DEFAULT_LIMIT: u64 = 20;
pub const MAX_LIMIT: u64 = 100;

/// Form body for creating or renaming a bucketlist
#[derive(Clone, Debug, Default, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct BucketlistRequest {
    #[schema(example = "Go to Grand canyon for camping")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl BucketlistRequest {
    pub fn new<T: ToString>(name: T) -> Self {
        Self {
            name: Some(name.to_string()),
        }
    }

    /// The trimmed name, or the 400 explaining why there is none
    pub fn validate(&self) -> Result<&str, Error> {
        match self.name.as_deref().map(str::trim) {
            None => Err(Error::bad_request("Bucketlist name not provided.")),
            Some("") => Err(Error::bad_request("Bucketlist name is empty.")),
            Some(name) => Ok(name),
        }
    }
}

/// Query string of `GET /bucketlists/`
#[derive(Clone, Debug, Default, Deserialize, Serialize, IntoParams, PartialEq, Eq)]
#[into_params(parameter_in = Query)]
pub struct BucketlistPaginationRequest {
    /// Substring to look for in bucketlist names
    pub q: Option<String>,
    /// 1-based page number
    pub page: Option<u64>,
    /// Page size, at most 100
    pub limit: Option<u64>,
}

impl BucketlistPaginationRequest {
    pub fn validate(&self) -> Result<(), Error> {
        if self.page == Some(0) {
            return Err(Error::bad_request("Page must be at least 1."));
        }
        if self.limit == Some(0) {
            return Err(Error::bad_request("Limit must be at least 1."));
        }

        self.offset().map(|_| ())
    }

    pub fn search(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }

    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Rows to skip; pages that land beyond a signed 64-bit offset are a 400
    pub fn offset(&self) -> Result<u64, Error> {
        (self.page() - 1)
            .checked_mul(self.limit())
            .filter(|offset| i64::try_from(*offset).is_ok())
            .ok_or_else(|| Error::bad_request("Page is out of range."))
    }
}
