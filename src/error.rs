//! Error types and HTTP error response handling.
//!
//! This module defines the configuration errors raised at startup and the
//! errors returned by the catalog routes, plus how the latter are converted
//! into HTTP responses with appropriate status codes and JSON bodies.
//!
//! Checkout failures are not errors here: they are ordinary data carried by
//! [`CheckoutOutcome`](crate::models::checkout::CheckoutOutcome).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Required configuration is missing or malformed.
///
/// Raised while loading [`Config`](crate::config::Config) and by
/// [`sign`](crate::services::signer::sign) for empty keys. It prevents the
/// dependent request instead of letting a malformed one go out.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// A required value is absent or empty.
    #[error("Missing configuration value: {0}")]
    Missing(&'static str),

    /// A value is present but cannot be used.
    #[error("Invalid configuration value {0}: {1}")]
    Invalid(&'static str, String),

    /// The environment could not be deserialized (e.g. a non-numeric port).
    #[error("Environment error: {0}")]
    Env(#[from] envy::Error),
}

/// Application-wide error type for the catalog routes.
///
/// # Error Categories
///
/// - **Upstream Errors**: the catalog API was unreachable or answered non-2xx
/// - **Signing Errors**: a catalog request could not be signed
/// - **Resource Errors**: the requested comic or character does not exist
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The catalog API could not be reached or its body could not be decoded.
    ///
    /// Returns HTTP 502 Bad Gateway.
    #[error("Catalog request failed: {0}")]
    Upstream(#[source] reqwest::Error),

    /// The catalog API answered with a non-success status.
    ///
    /// The upstream status is passed through to the caller.
    #[error("Catalog API responded with {0}")]
    UpstreamStatus(StatusCode),

    /// A catalog request could not be signed.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Catalog request could not be signed: {0}")]
    Signing(#[from] ConfigurationError),

    /// The catalog has no entry with the requested id.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("{0} not found")]
    NotFound(&'static str),
}

/// The request URL is dropped from the error: its query carries the signed
/// `ts`/`apikey`/`hash` and would otherwise end up in logs.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Upstream(err.without_url())
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": "error_type",
///   "message": "Human-readable error message"
/// }
/// ```
///
/// This is the same flat shape the checkout endpoint uses, so the front end
/// reads every failure the same way.
///
/// # Status Code Mapping
///
/// - `Upstream` → 502 Bad Gateway
/// - `UpstreamStatus` → upstream status
/// - `Signing` → 500 Internal Server Error
/// - `NotFound` → 404 Not Found
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Upstream(ref err) => {
                tracing::warn!(error = %err, "catalog API unreachable");
                (
                    StatusCode::BAD_GATEWAY,
                    "upstream_unavailable",
                    "The comic catalog is currently unavailable".to_string(),
                )
            }
            AppError::UpstreamStatus(status) => (
                status,
                "upstream_error",
                "Failed to fetch data from the comic catalog".to_string(),
            ),
            AppError::Signing(ref err) => {
                tracing::error!(error = %err, "catalog request signing failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "signing_failed",
                    "The comic catalog request could not be signed".to_string(),
                )
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
        };

        let body = Json(json!({
            "error": code,
            "message": message
        }));

        (status, body).into_response()
    }
}
