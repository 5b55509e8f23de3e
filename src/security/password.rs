use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher as Argon2Hasher, PasswordVerifier, SaltString},
};
use rand::rngs::OsRng;
use thiserror::Error;

use crate::config::auth::AuthConfig;

/// Password hashing or hash parsing failure
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Password hashing failed: {0}")]
pub struct HashError(pub String);

impl From<argon2::password_hash::Error> for HashError {
    fn from(error: argon2::password_hash::Error) -> Self {
        Self(error.to_string())
    }
}

/// Turns a plaintext password into an opaque string safe to persist
pub trait Hasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, HashError>;
}

/// Argon2id password hasher
///
/// Produces PHC strings (`$argon2id$v=19$m=65536,t=3,p=4$<salt>$<hash>`) with a
/// fresh salt per call, so hashing the same password twice yields different
/// strings that both verify.
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Build a hasher from the Argon2 parameters in `config`
    ///
    /// # Errors
    /// Returns error if the parameters are out of Argon2's accepted range
    #[tracing::instrument(skip(config))]
    pub fn from_config(config: &AuthConfig) -> Result<Self, HashError> {
        let params = Params::new(
            config.argon2.memory_cost,
            config.argon2.time_cost,
            config.argon2.parallelism,
            Some(config.argon2.hash_length as usize),
        )
        .map_err(|e| HashError(e.to_string()))?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        Ok(Self { argon2 })
    }

    /// Verify a password against a PHC hash
    ///
    /// `Ok(false)` means the password is wrong; `Err` means the stored hash is
    /// not a valid PHC string.
    #[tracing::instrument(skip(self, password, hash))]
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let parsed_hash = PasswordHash::new(hash)?;
        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(_) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Whether `hash` was produced with parameters other than this hasher's
    #[tracing::instrument(skip(self, hash))]
    pub fn needs_rehash(&self, hash: &str) -> Result<bool, HashError> {
        let parsed_hash = PasswordHash::new(hash)?;

        if parsed_hash.algorithm.as_str() != "argon2id" {
            return Ok(true);
        }

        let m_cost = parsed_hash.params.get_decimal("m").unwrap_or(0);
        let t_cost = parsed_hash.params.get_decimal("t").unwrap_or(0);
        let p_cost = parsed_hash.params.get_decimal("p").unwrap_or(0);

        let current = self.argon2.params();

        Ok(m_cost != current.m_cost() || t_cost != current.t_cost() || p_cost != current.p_cost())
    }
}

impl Hasher for PasswordHasher {
    #[tracing::instrument(skip(self, password))]
    fn hash(&self, password: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self.argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(hash.to_string())
    }
}
