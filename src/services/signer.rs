//! Request signing for the comic catalog API.
//!
//! Every catalog request carries three query parameters:
//!
//! - `ts`: a millisecond timestamp
//! - `apikey`: the public key
//! - `hash`: `md5(ts + private_key + public_key)` as lowercase hex
//!
//! The catalog recomputes the hash from the same three inputs and owns any
//! freshness policy; nothing here expires tokens.
//!
//! The private key is only ever fed into the digest. It is never logged and
//! never appears in `Debug` output.

use std::fmt;

use md5::{Digest, Md5};
use secrecy::{ExposeSecret, SecretString};

use crate::error::ConfigurationError;

/// Sign a catalog request in one call.
///
/// # Returns
///
/// The query-string fragment `ts=<now>&apikey=<public_key>&hash=<digest>`.
///
/// # Errors
///
/// `ConfigurationError::Missing` if either key is empty. An empty string is
/// never returned in place of a token.
pub fn sign(private_key: &str, public_key: &str, now: i64) -> Result<String, ConfigurationError> {
    let signer = Signer::new(public_key, SecretString::from(private_key))?;
    Ok(signer.token(now).to_string())
}

/// Holds the catalog keys and produces signed tokens.
///
/// Built once from configuration and shared by the catalog client.
#[derive(Clone)]
pub struct Signer {
    public_key: String,
    private_key: SecretString,
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

impl Signer {
    /// # Errors
    ///
    /// Returns `ConfigurationError::Missing` when either key is empty.
    pub fn new(
        public_key: impl Into<String>,
        private_key: SecretString,
    ) -> Result<Self, ConfigurationError> {
        let public_key = public_key.into();
        if public_key.is_empty() {
            return Err(ConfigurationError::Missing("public key"));
        }
        if private_key.expose_secret().is_empty() {
            return Err(ConfigurationError::Missing("private key"));
        }

        Ok(Self {
            public_key,
            private_key,
        })
    }

    /// Token for an explicit millisecond timestamp.
    pub fn token(&self, ts: i64) -> AuthToken {
        let mut hasher = Md5::new();
        // ts || private || public, no separators
        hasher.update(ts.to_string().as_bytes());
        hasher.update(self.private_key.expose_secret().as_bytes());
        hasher.update(self.public_key.as_bytes());

        let hash = hex::encode(hasher.finalize());
        tracing::debug!(ts, "signed catalog request");

        AuthToken {
            ts,
            apikey: self.public_key.clone(),
            hash,
        }
    }

    /// [`sign`] with these keys, stamped with the current wall-clock time.
    pub fn sign_now(&self) -> Result<String, ConfigurationError> {
        sign(
            self.private_key.expose_secret(),
            &self.public_key,
            chrono::Utc::now().timestamp_millis(),
        )
    }
}

/// Signed credentials for one catalog request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub ts: i64,
    pub apikey: String,
    pub hash: String,
}

impl fmt::Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ts={}&apikey={}&hash={}", self.ts, self.apikey, self.hash)
    }
}
