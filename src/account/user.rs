use secrecy::{ExposeSecret, SecretString};
use uuid::Uuid;

/// A registered (or about to be registered) account holder.
///
/// `password` holds the raw form input on a candidate and the argon2 PHC
/// string on a record loaded from a store.
#[derive(Clone, Debug, Default)]
pub struct User {
    pub id: Option<Uuid>,
    pub email: String,
    pub password: SecretString,
    pub name: String,
    pub last_name: String,
    pub active: bool,
}

impl User {
    /// Build a candidate from raw form input. The email is normalized.
    #[must_use]
    pub fn candidate(email: &str, password: &str, name: &str, last_name: &str) -> Self {
        Self {
            id: None,
            email: normalize_email(email),
            password: SecretString::from(password),
            name: name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            active: false,
        }
    }

    /// True when every field still holds its default value (an empty form).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.id.is_none()
            && self.email.is_empty()
            && self.password.expose_secret().is_empty()
            && self.name.is_empty()
            && self.last_name.is_empty()
            && !self.active
    }
}

/// Emails are compared case-insensitively and without surrounding whitespace.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email(" Alice@Example.COM "), "alice@example.com");
    }

    #[test]
    fn default_user_is_blank() {
        assert!(User::default().is_blank());
    }

    #[test]
    fn candidate_is_not_blank() {
        let user = User::candidate(" A@X.com", "secret", " Ada ", "Lovelace");
        assert!(!user.is_blank());
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.name, "Ada");
        assert_eq!(user.password.expose_secret(), "secret");
    }

    #[test]
    fn debug_output_redacts_password() {
        let user = User::candidate("a@x.com", "hunter2", "Ada", "Lovelace");
        assert!(!format!("{user:?}").contains("hunter2"));
    }
}
