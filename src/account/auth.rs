/// Display name carried by unauthenticated requests.
pub const ANONYMOUS_PRINCIPAL: &str = "anonymousUser";

/// Authentication state of the current request.
///
/// Resolved once per request by the HTTP layer and handed to every workflow
/// operation that needs it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Authentication {
    Anonymous,
    /// Authenticated principal, identified by email.
    Authenticated(String),
}

impl Authentication {
    /// Principal name used to resolve the user record.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Anonymous => ANONYMOUS_PRINCIPAL,
            Self::Authenticated(email) => email,
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_uses_display_name() {
        let auth = Authentication::Anonymous;
        assert_eq!(auth.name(), "anonymousUser");
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn authenticated_uses_email() {
        let auth = Authentication::Authenticated("a@x.com".to_string());
        assert_eq!(auth.name(), "a@x.com");
        assert!(auth.is_authenticated());
    }
}
