pub mod auth;
pub mod bucketlist;
