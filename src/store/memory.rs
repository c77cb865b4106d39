use async_trait::async_trait;
use secrecy::SecretString;
use std::collections::{HashMap, hash_map::Entry};
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{
    Credentials, Error, IdentityStore, SessionStore, check_session_ttl, generate_session_token,
    hash_session_token,
};
use crate::account::User;

struct SessionEntry {
    email: String,
    expires_at: Instant,
}

/// Process-local store; contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    credentials: Credentials,
    users: RwLock<HashMap<String, User>>,
    sessions: RwLock<HashMap<Vec<u8>, SessionEntry>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            credentials,
            ..Self::default()
        }
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    /// Sessions still held, expired ones included until they are purged.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl IdentityStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn save(&self, user: &User) -> Result<User, Error> {
        let password = self.credentials.hash_password(&user.password)?;

        let mut users = self.users.write().await;
        match users.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(Error::Conflict),
            Entry::Vacant(slot) => {
                let saved = User {
                    id: Some(Uuid::now_v7()),
                    email: user.email.clone(),
                    password: SecretString::from(password),
                    name: user.name.clone(),
                    last_name: user.last_name.clone(),
                    active: true,
                };
                slot.insert(saved.clone());
                Ok(saved)
            }
        }
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn create_session(&self, email: &str, ttl_seconds: i64) -> Result<String, Error> {
        let ttl_seconds = check_session_ttl(ttl_seconds)?;
        let now = Instant::now();
        let expires_at = now
            .checked_add(Duration::from_secs(u64::try_from(ttl_seconds).unwrap_or(0)))
            .ok_or(Error::SessionTtl(ttl_seconds))?;

        let token = generate_session_token()?;
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, entry| entry.expires_at > now);
        sessions.insert(
            hash_session_token(&token),
            SessionEntry {
                email: email.to_string(),
                expires_at,
            },
        );
        Ok(token)
    }

    async fn lookup_session(&self, token: &str) -> Result<Option<String>, Error> {
        let token_hash = hash_session_token(token);
        let email = {
            let mut sessions = self.sessions.write().await;
            let now = Instant::now();
            match sessions
                .get(&token_hash)
                .map(|entry| (entry.expires_at > now, entry.email.clone()))
            {
                Some((true, email)) => email,
                Some((false, _)) => {
                    sessions.remove(&token_hash);
                    return Ok(None);
                }
                None => return Ok(None),
            }
        };

        // Same rule as Postgres: only active users keep their sessions.
        let users = self.users.read().await;
        Ok(users
            .get(&email)
            .filter(|user| user.active)
            .map(|user| user.email.clone()))
    }

    async fn delete_session(&self, token: &str) -> Result<(), Error> {
        self.sessions
            .write()
            .await
            .remove(&hash_session_token(token));
        Ok(())
    }
}
