//! Integration tests for the HTTP API
//!
//! Every test builds the full router on its own in-memory database.

pub mod auth_flow;
pub mod bucketlist_test;
pub mod health_test;
pub mod registration_test;
