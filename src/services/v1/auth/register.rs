//! Registration: classify the submitted credentials, then create the user.
//!
//! Classification is a pure function of the two raw fields and the
//! [`RegistrationPolicy`]. Rules are checked in table order and the first
//! match wins. Only a pair that passes every rule reaches the [`UserStore`].

use actix_web::http::StatusCode;

use crate::config::auth::AuthConfig;
use crate::errors::Error;
use crate::models::v1::user::{StoreError, UserStore};
use crate::requests::v1::auth::RegisterRequest;
use crate::responses::v1::user::User;
use crate::security::{Hasher, Validator};

pub const CONFLICT: &str = "User already exists. Please login.";

/// Why a registration request was turned away before touching the store
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    BothMissing,
    EmailMissing,
    PasswordMissing,
    BothEmpty,
    EmailEmpty,
    PasswordEmpty,
    BothInvalid,
    InvalidEmail,
    PasswordTooShort,
}

impl Rejection {
    pub fn message(&self) -> &'static str {
        match self {
            Self::BothMissing => "Email address and password not provided.",
            Self::EmailMissing => "Email address not provided.",
            Self::PasswordMissing => "Password not provided.",
            Self::BothEmpty => "Email address and password is empty.",
            Self::EmailEmpty => "Email address is empty.",
            Self::PasswordEmpty => "Password is empty.",
            Self::BothInvalid => "Invalid email address and short password.",
            Self::InvalidEmail => "Invalid email address.",
            Self::PasswordTooShort => "Password too short.",
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// Metric label
    pub fn label(&self) -> &'static str {
        match self {
            Self::BothMissing => "both_missing",
            Self::EmailMissing => "email_missing",
            Self::PasswordMissing => "password_missing",
            Self::BothEmpty => "both_empty",
            Self::EmailEmpty => "email_empty",
            Self::PasswordEmpty => "password_empty",
            Self::BothInvalid => "both_invalid",
            Self::InvalidEmail => "invalid_email",
            Self::PasswordTooShort => "password_too_short",
        }
    }
}

impl From<Rejection> for Error {
    fn from(rejection: Rejection) -> Self {
        Error::bad_request(rejection.message())
    }
}

/// State of one submitted field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    Absent,
    Empty,
    Filled,
}

impl Field {
    fn of(value: Option<&str>) -> Self {
        match value {
            None => Self::Absent,
            Some("") => Self::Empty,
            Some(_) => Self::Filled,
        }
    }
}

/// Everything the rules look at. `malformed_email` and `short_password` are
/// only ever set for filled fields.
#[derive(Clone, Copy, Debug)]
struct Facts {
    email: Field,
    password: Field,
    malformed_email: bool,
    short_password: bool,
}

type Rule = (fn(&Facts) -> bool, Rejection);

const RULES: [Rule; 9] = [
    (
        |f: &Facts| f.email == Field::Absent && f.password == Field::Absent,
        Rejection::BothMissing,
    ),
    (|f: &Facts| f.email == Field::Absent, Rejection::EmailMissing),
    (|f: &Facts| f.password == Field::Absent, Rejection::PasswordMissing),
    (
        |f: &Facts| f.email == Field::Empty && f.password == Field::Empty,
        Rejection::BothEmpty,
    ),
    (|f: &Facts| f.email == Field::Empty, Rejection::EmailEmpty),
    (|f: &Facts| f.password == Field::Empty, Rejection::PasswordEmpty),
    (
        |f: &Facts| f.malformed_email && f.short_password,
        Rejection::BothInvalid,
    ),
    (|f: &Facts| f.malformed_email, Rejection::InvalidEmail),
    (|f: &Facts| f.short_password, Rejection::PasswordTooShort),
];

/// Tunables of the classification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistrationPolicy {
    /// Counted in characters, not bytes
    pub min_password_length: usize,
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self {
            min_password_length: 8,
        }
    }
}

impl From<&AuthConfig> for RegistrationPolicy {
    fn from(config: &AuthConfig) -> Self {
        Self {
            min_password_length: config.min_password_length,
        }
    }
}

/// Accepted `(email, password)` or the first rule that rejects them
pub fn classify<'a>(
    request: &'a RegisterRequest,
    policy: &RegistrationPolicy,
) -> Result<(&'a str, &'a str), Rejection> {
    let email = request.email.as_deref();
    let password = request.password.as_deref();

    let facts = Facts {
        email: Field::of(email),
        password: Field::of(password),
        malformed_email: email
            .filter(|email| !email.is_empty())
            .is_some_and(|email| !Validator::validate_email(email)),
        short_password: password
            .filter(|password| !password.is_empty())
            .is_some_and(|password| {
                !Validator::validate_password_length(password, policy.min_password_length)
            }),
    };

    if let Some((_, rejection)) = RULES.iter().find(|(applies, _)| applies(&facts)) {
        return Err(*rejection);
    }

    match (email, password) {
        (Some(email), Some(password)) => Ok((email, password)),
        // every absent field is caught by the first three rules
        _ => Err(Rejection::BothMissing),
    }
}

/// Terminal result of a registration attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Created(User),
    Conflict,
    Rejected(Rejection),
}

impl RegistrationOutcome {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Created(_) => StatusCode::CREATED,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Rejected(rejection) => rejection.status(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Created(_) => "created",
            Self::Conflict => "conflict",
            Self::Rejected(rejection) => rejection.label(),
        }
    }
}

/// Classify `request` and, when it is acceptable and the email is free,
/// persist the user with a hashed password.
///
/// Only store and hashing failures are errors; every classification lands in
/// [`RegistrationOutcome`].
#[::tracing::instrument(skip_all, fields(email = ?request.email))]
pub async fn register<S, H>(
    store: &S,
    hasher: &H,
    policy: &RegistrationPolicy,
    request: &RegisterRequest,
) -> Result<RegistrationOutcome, Error>
where
    S: UserStore + ?Sized,
    H: Hasher + ?Sized,
{
    let (email, password) = match classify(request, policy) {
        Ok(credentials) => credentials,
        Err(rejection) => {
            ::tracing::debug!(reason = rejection.label(), "Registration rejected");
            return Ok(RegistrationOutcome::Rejected(rejection));
        }
    };

    if store.exists(email).await.map_err(store_error)? {
        ::tracing::debug!("Email already registered");
        return Ok(RegistrationOutcome::Conflict);
    }

    let hashed = hasher.hash(password).map_err(|e| {
        ::tracing::error!(error = %e, "Failed to hash password");
        Error::internal("Internal server error")
    })?;

    match store.create(email, hashed).await {
        Ok(user) => {
            ::tracing::info!(user_id = %user.id, "User registered");
            Ok(RegistrationOutcome::Created(user.into()))
        }
        Err(StoreError::Conflict) => {
            ::tracing::debug!("Lost registration race on unique email");
            Ok(RegistrationOutcome::Conflict)
        }
        Err(e) => Err(store_error(e)),
    }
}

fn store_error(error: StoreError) -> Error {
    match error {
        StoreError::Conflict => Error::conflict(CONFLICT),
        StoreError::Database(e) => e.into(),
    }
}
