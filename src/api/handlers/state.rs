//! Shared handler state and session configuration.

use std::sync::Arc;

use crate::account::{AccountWorkflow, UserValidator, Validator};
use crate::store::{IdentityStore, SessionStore};

const DEFAULT_SESSION_TTL_SECONDS: i64 = 12 * 60 * 60;

#[derive(Clone, Debug)]
pub struct SessionConfig {
    ttl_seconds: i64,
    cookie_secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_SESSION_TTL_SECONDS,
            cookie_secure: false,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ttl_seconds(mut self, seconds: i64) -> Self {
        self.ttl_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_cookie_secure(mut self, secure: bool) -> Self {
        self.cookie_secure = secure;
        self
    }

    #[must_use]
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    #[must_use]
    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure
    }
}

/// Everything the account handlers need, injected as an `Extension`.
pub struct AppState {
    workflow: AccountWorkflow,
    identities: Arc<dyn IdentityStore>,
    sessions: Arc<dyn SessionStore>,
    validator: Arc<dyn Validator>,
    session_config: SessionConfig,
}

impl AppState {
    #[must_use]
    pub fn new(
        identities: Arc<dyn IdentityStore>,
        sessions: Arc<dyn SessionStore>,
        session_config: SessionConfig,
    ) -> Self {
        Self {
            workflow: AccountWorkflow::new(identities.clone()),
            identities,
            sessions,
            validator: Arc::new(UserValidator),
            session_config,
        }
    }

    #[must_use]
    pub fn with_validator(mut self, validator: Arc<dyn Validator>) -> Self {
        self.validator = validator;
        self
    }

    #[must_use]
    pub fn workflow(&self) -> &AccountWorkflow {
        &self.workflow
    }

    #[must_use]
    pub fn identities(&self) -> &dyn IdentityStore {
        self.identities.as_ref()
    }

    #[must_use]
    pub fn sessions(&self) -> &dyn SessionStore {
        self.sessions.as_ref()
    }

    #[must_use]
    pub fn validator(&self) -> &dyn Validator {
        self.validator.as_ref()
    }

    #[must_use]
    pub fn session_config(&self) -> &SessionConfig {
        &self.session_config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("session_config", &self.session_config)
            .finish_non_exhaustive()
    }
}
