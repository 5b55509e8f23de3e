use once_cell::sync::Lazy;
use regex::Regex;

/// `local@label.label[.label...]`: one `@`, non-empty local part, at least two
/// non-empty dot-separated domain labels, no whitespace anywhere.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.]+(?:\.[^@\s.]+)+$").expect("email pattern is a valid regex")
});

/// Field-level checks shared by the request validators
pub struct Validator;

impl Validator {
    /// Structural email check
    ///
    /// This is a shape check, not RFC 5322 validation.
    ///
    /// # Example
    /// ```
    /// use bucketlist_api::security::Validator;
    ///
    /// assert!(Validator::validate_email("email@company.co"));
    /// assert!(!Validator::validate_email("email"));
    /// ```
    pub fn validate_email(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }

    /// Whether `password` has at least `min` characters
    ///
    /// Counts Unicode scalar values, not bytes.
    pub fn validate_password_length(password: &str, min: usize) -> bool {
        password.chars().count() >= min
    }
}
