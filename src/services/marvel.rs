//! Client for the comic catalog API.
//!
//! Every request is signed with a fresh [`sign`](super::signer::sign) query
//! and sent as a plain GET. Responses are JSON and reach callers unmodified,
//! except single-resource lookups which unwrap the first result.
//!
//! # Error Handling
//!
//! - Non-2xx status → `AppError::UpstreamStatus` (passed through to the caller)
//! - Connection failure, timeout or undecodable body → `AppError::Upstream`
//!
//! There are no retries here.

use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::CatalogConfig;
use crate::error::{AppError, ConfigurationError};
use crate::models::catalog::DataWrapper;
use crate::services::signer::Signer;

#[derive(Debug, Clone)]
pub struct MarvelClient {
    http: reqwest::Client,
    base_url: Url,
    signer: Signer,
}

impl MarvelClient {
    /// Build the client once at startup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if a key is empty or the HTTP client
    /// cannot be built.
    pub fn new(config: &CatalogConfig) -> Result<Self, ConfigurationError> {
        let signer = Signer::new(config.public_key.clone(), config.private_key.clone())?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigurationError::Invalid("MARVEL_API_TIMEOUT_SECS", e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            signer,
        })
    }

    /// `GET {base}/comics?limit=..&offset=..`, passed through as-is.
    pub async fn comics(&self, limit: u32, offset: u32) -> Result<Value, AppError> {
        let params = [("limit", limit.to_string()), ("offset", offset.to_string())];
        self.get_json(self.signed_url(&["comics"], &params)?).await
    }

    /// `GET {base}/comics/{id}`; `None` when the catalog has no such comic.
    pub async fn comic(&self, id: u64) -> Result<Option<Value>, AppError> {
        self.first(&["comics", &id.to_string()]).await
    }

    /// `GET {base}/characters/{id}`; `None` when the catalog has no such character.
    pub async fn character(&self, id: u64) -> Result<Option<Value>, AppError> {
        self.first(&["characters", &id.to_string()]).await
    }

    async fn first(&self, segments: &[&str]) -> Result<Option<Value>, AppError> {
        let wrapper: DataWrapper<Value> = match self.get_json(self.signed_url(segments, &[])?).await
        {
            Ok(wrapper) => wrapper,
            // The catalog answers 404 for unknown ids
            Err(AppError::UpstreamStatus(StatusCode::NOT_FOUND)) => return Ok(None),
            Err(e) => return Err(e),
        };

        tracing::debug!(total = wrapper.data.total, "catalog lookup");
        Ok(wrapper.into_first())
    }

    /// Append `segments` to the base path, then the signed query, then `params`.
    fn signed_url(&self, segments: &[&str], params: &[(&str, String)]) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        // Config rejects cannot-be-a-base URLs, so this always succeeds
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }

        url.set_query(Some(&self.signer.sign_now()?));
        url.query_pairs_mut().extend_pairs(params);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        // Log the path only; the query carries the signature. Transport
        // errors drop the URL in `From<reqwest::Error> for AppError`.
        let path = url.path().to_string();

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, path = %path, "catalog API rejected request");
            return Err(AppError::UpstreamStatus(status));
        }

        Ok(response.json::<T>().await?)
    }
}
