pub mod auth;
pub mod bucketlist;
pub mod user;
