use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use base64::Engine;
use rand::{RngCore, rngs::OsRng};
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use std::sync::OnceLock;

use super::Error;

/// Argon2 password hasher shared by the store implementations.
#[derive(Clone, Default)]
pub struct Credentials {
    argon2: Argon2<'static>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("params", self.argon2.params())
            .finish()
    }
}

impl Credentials {
    /// Minimal cost parameters, for tests only.
    #[must_use]
    pub fn fast() -> Self {
        let params = Params::new(Params::MIN_M_COST, Params::MIN_T_COST, 1, None)
            .unwrap_or_default();
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }

    /// Hash a password into a PHC string.
    ///
    /// # Errors
    /// Returns an error if argon2 rejects the input.
    pub fn hash_password(&self, password: &SecretString) -> Result<String, Error> {
        let mut salt_bytes = [0u8; 16];
        OsRng
            .try_fill_bytes(&mut salt_bytes)
            .map_err(|err| Error::PasswordHash(err.to_string()))?;
        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|err| Error::PasswordHash(err.to_string()))?;
        self.argon2
            .hash_password(password.expose_secret().as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| Error::PasswordHash(err.to_string()))
    }
}

/// Check `password` against a stored PHC string. Malformed hashes never match.
#[must_use]
pub fn verify_password(password: &str, phc: &str) -> bool {
    PasswordHash::new(phc).is_ok_and(|parsed| {
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
}

/// Hash checked when the email is unknown, so a miss costs one argon2 run
/// just like a wrong password.
static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

fn dummy_hash() -> Option<&'static str> {
    DUMMY_HASH
        .get_or_init(|| {
            Credentials::default()
                .hash_password(&SecretString::from("doorman-unknown-user"))
                .ok()
        })
        .as_deref()
}

/// Check a login attempt against the stored hash of the matching user, if any.
/// A missing user is verified against a dummy hash and never matches.
#[must_use]
pub fn verify_login(password: &str, stored: Option<&str>) -> bool {
    match stored {
        Some(phc) => verify_password(password, phc),
        None => {
            if let Some(phc) = dummy_hash() {
                let _ = verify_password(password, phc);
            }
            false
        }
    }
}

/// Create a new random session token for the cookie.
///
/// # Errors
/// Returns an error if the OS random source fails.
pub fn generate_session_token() -> Result<String, Error> {
    let mut bytes = [0u8; 32];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|_| Error::SessionToken)?;
    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes))
}

/// Hash a session token so the raw token is never stored.
#[must_use]
pub fn hash_session_token(token: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.finalize().to_vec()
}
