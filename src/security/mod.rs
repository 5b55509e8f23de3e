pub mod password;
pub mod validation;

pub use password::{HashError, Hasher, PasswordHasher};
pub use validation::Validator;
