//! Shared application state handed to every handler.

use crate::config::Config;
use crate::error::ConfigurationError;
use crate::services::marvel::MarvelClient;

#[derive(Debug, Clone)]
pub struct AppState {
    /// Signed client for the comic catalog API
    pub catalog: MarvelClient,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, ConfigurationError> {
        Ok(Self {
            catalog: MarvelClient::new(&config.catalog)?,
        })
    }
}
