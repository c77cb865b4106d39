//! Field-level validation of registration candidates.

use regex::Regex;
use secrecy::ExposeSecret;
use std::collections::BTreeMap;

use super::User;

const MIN_PASSWORD_LENGTH: usize = 5;

/// Validation result keyed by form field name.
///
/// Errors are only ever added; nothing in the workflow removes a message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `message` to `field`.
    pub fn reject(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.0.values().any(|messages| !messages.is_empty())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.has_errors()
    }

    /// Messages attached to `field`, empty when the field is valid.
    #[must_use]
    pub fn field(&self, field: &str) -> &[String] {
        self.0.get(field).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

/// Produces field errors for a candidate user.
pub trait Validator: Send + Sync {
    fn validate(&self, user: &User) -> FieldErrors;
}

/// Default rules: required email in a valid format, a password of at least
/// five characters, and a first and last name.
#[derive(Clone, Copy, Debug, Default)]
pub struct UserValidator;

impl Validator for UserValidator {
    fn validate(&self, user: &User) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if user.email.is_empty() {
            errors.reject("email", "*Please provide an email");
        } else if !valid_email(&user.email) {
            errors.reject("email", "*Please provide a valid Email");
        }

        let password = user.password.expose_secret();
        if password.is_empty() {
            errors.reject("password", "*Please provide your password");
        } else if password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.reject("password", "*Your password must have at least 5 characters");
        }

        if user.name.is_empty() {
            errors.reject("name", "*Please provide your name");
        }

        if user.last_name.is_empty() {
            errors.reject("lastName", "*Please provide your last name");
        }

        errors
    }
}

/// Basic email format check on already-normalized input.
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}
