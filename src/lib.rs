#[macro_use(get, post, put, delete)]
extern crate actix_web;

pub mod api;
pub mod config;
pub mod controllers;
pub mod database;
pub mod entities;
pub mod errors;
pub mod helpers;
pub mod metrics;
pub mod middlewares;
pub mod models;
pub mod requests;
pub mod responses;
pub mod router;
pub mod security;
pub mod server;
pub mod services;
pub mod telemetry;

// Testing utilities (always available for integration tests)
pub mod testing;

// Re-export commonly used types for convenience
pub use errors::{Error, Message};
pub use metrics::{AppMetrics, MetricsMiddleware};
pub use middlewares::v1::auth::Auth;
pub use models::v1::user::{StoreError, UserStore};
