//! Application state shared across handlers.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::AdminConfig;

/// Application state shared across all handlers.
///
/// Cheap to clone; the inner state is reference-counted.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    api: ApiClient,
}

impl AppState {
    /// Create application state from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the backend client cannot be built.
    pub fn from_config(config: AdminConfig) -> Result<Self, crate::config::ConfigError> {
        let api = ApiClient::from_config(&config.services)?;
        Ok(Self::new(config, api))
    }

    /// Create application state from parts.
    #[must_use]
    pub fn new(config: AdminConfig, api: ApiClient) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, api }),
        }
    }

    /// Dashboard configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Backend service client.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }
}
