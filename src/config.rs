//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to deserialize environment variables into a raw
//! struct, which is then validated into the type-safe [`Config`].

use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

use crate::error::ConfigurationError;

/// Variables exactly as they appear in the environment.
///
/// Field names are converted by envy: `marvel_api_url` -> `MARVEL_API_URL`.
#[derive(Deserialize)]
struct RawConfig {
    marvel_api_url: Option<String>,
    marvel_api_public_key: Option<String>,
    marvel_api_private_key: Option<String>,

    #[serde(default = "default_port")]
    server_port: u16,

    #[serde(default = "default_timeout_secs")]
    marvel_api_timeout_secs: u64,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

fn default_timeout_secs() -> u64 {
    10
}

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `MARVEL_API_URL` (required): base URL of the comic catalog API
/// - `MARVEL_API_PUBLIC_KEY` (required): public key sent with every request
/// - `MARVEL_API_PRIVATE_KEY` (required): private key, only ever hashed
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `MARVEL_API_TIMEOUT_SECS` (optional): catalog request timeout, defaults to 10
#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub catalog: CatalogConfig,
}

/// Connection settings for the comic catalog API.
///
/// `Debug` prints the private key as `[REDACTED]` through `SecretString`.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: Url,
    pub public_key: String,
    pub private_key: SecretString,
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and validates them.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required variable is missing or empty
    /// - `MARVEL_API_URL` is not an absolute URL
    /// - A numeric variable cannot be parsed
    pub fn from_env() -> Result<Self, ConfigurationError> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        Self::from_raw(envy::from_env::<RawConfig>()?)
    }

    /// Build configuration from an explicit list of variables.
    pub fn from_iter<I>(vars: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self::from_raw(envy::from_iter::<_, RawConfig>(vars)?)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigurationError> {
        let base_url = required(raw.marvel_api_url, "MARVEL_API_URL")?;
        let base_url = Url::parse(&base_url)
            .map_err(|e| ConfigurationError::Invalid("MARVEL_API_URL", e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigurationError::Invalid(
                "MARVEL_API_URL",
                "not a base URL".to_string(),
            ));
        }

        let public_key = required(raw.marvel_api_public_key, "MARVEL_API_PUBLIC_KEY")?;
        let private_key = required(raw.marvel_api_private_key, "MARVEL_API_PRIVATE_KEY")?;

        Ok(Self {
            server_port: raw.server_port,
            catalog: CatalogConfig {
                base_url,
                public_key,
                private_key: SecretString::from(private_key),
                timeout: Duration::from_secs(raw.marvel_api_timeout_secs),
            },
        })
    }
}

/// Treat an empty variable the same as an absent one.
fn required(value: Option<String>, name: &'static str) -> Result<String, ConfigurationError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigurationError::Missing(name)),
    }
}
