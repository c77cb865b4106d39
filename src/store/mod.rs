//! Persistence seams for user records and login sessions.
//!
//! Two implementations ship with the crate: [`PgStore`] backed by Postgres
//! (`sql/schema.sql`) and [`MemoryStore`] for tests and local development.
//! Both enforce email uniqueness atomically and report [`Error::Conflict`].

use async_trait::async_trait;
use thiserror::Error;

use crate::account::User;

mod credentials;
mod memory;
mod postgres;

pub use credentials::{
    Credentials, generate_session_token, hash_session_token, verify_login, verify_password,
};
pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum Error {
    #[error("a user with this email already exists")]
    Conflict,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("failed to hash password: {0}")]
    PasswordHash(String),
    #[error("failed to generate session token")]
    SessionToken,
    #[error("session TTL out of range: {0} seconds")]
    SessionTtl(i64),
}

/// Longest session a store will open: one year.
pub const MAX_SESSION_TTL_SECONDS: i64 = 365 * 24 * 60 * 60;

/// Reject TTLs the stores cannot turn into an expiry.
///
/// # Errors
/// Returns [`Error::SessionTtl`] when `ttl_seconds` exceeds
/// [`MAX_SESSION_TTL_SECONDS`].
pub fn check_session_ttl(ttl_seconds: i64) -> Result<i64, Error> {
    if ttl_seconds > MAX_SESSION_TTL_SECONDS {
        return Err(Error::SessionTtl(ttl_seconds));
    }
    Ok(ttl_seconds)
}

/// Lookup and persistence of [`User`] records.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Find a user by (normalized) email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error>;

    /// Persist a new active user, hashing its password.
    ///
    /// Returns [`Error::Conflict`] when the email is already taken.
    async fn save(&self, user: &User) -> Result<User, Error>;

    /// Check that the backing storage is reachable.
    async fn ping(&self) -> Result<(), Error> {
        Ok(())
    }
}

/// Login sessions keyed by an opaque token; only token hashes are stored.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Open a session for `email`, returning the raw token for the cookie.
    async fn create_session(&self, email: &str, ttl_seconds: i64) -> Result<String, Error>;

    /// Email of the active user owning `token`, if the session is still valid.
    async fn lookup_session(&self, token: &str) -> Result<Option<String>, Error>;

    async fn delete_session(&self, token: &str) -> Result<(), Error>;
}
