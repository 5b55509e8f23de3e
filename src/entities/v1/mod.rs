pub mod bucketlists;
pub mod tokens;
pub mod users;
