pub mod bucketlist;
pub mod token;
pub mod user;
