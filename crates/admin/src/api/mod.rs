//! Typed client for the order, product, and customer backend services.
//!
//! # Architecture
//!
//! - [`EndpointRegistry`] - Resource domain to base URL and path prefix
//! - [`RequestExecutor`] - One HTTP call per invocation, normalized errors
//! - [`Request`] - Method, path, and optional JSON body
//! - [`ApiClient`] - Hands out per-domain services over the two above
//!
//! # Example
//!
//! ```rust,ignore
//! use backoffice_admin::api::ApiClient;
//! use backoffice_admin::config::ServicesConfig;
//!
//! let client = ApiClient::from_config(&ServicesConfig::from_env()?)?;
//! let products = client.products().list_products().await?;
//! ```

mod error;
mod executor;
mod registry;
mod request;

use std::sync::Arc;

pub use error::{ErrorKind, HttpErrorKind, RequestError};
pub use executor::RequestExecutor;
pub use registry::{EndpointDescriptor, EndpointRegistry};
pub use request::Request;

use backoffice_core::Resource;

use crate::config::{ConfigError, ServicesConfig};
use crate::services::{CustomerService, OrderService, ProductService, ResourceService};

/// Entry point for backend calls.
///
/// Cheap to clone; every clone shares the registry and connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    registry: Arc<EndpointRegistry>,
    executor: RequestExecutor,
}

impl ApiClient {
    /// Build a client from service configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEndpoint` if a domain has no endpoint, or
    /// `ConfigError::HttpClient` if the HTTP client cannot be built.
    pub fn from_config(config: &ServicesConfig) -> Result<Self, ConfigError> {
        let registry = EndpointRegistry::from_config(config)?;
        let executor = RequestExecutor::new(config)?;
        Ok(Self::new(registry, executor))
    }

    /// Build a client from an existing registry and executor.
    #[must_use]
    pub fn new(registry: EndpointRegistry, executor: RequestExecutor) -> Self {
        Self {
            registry: Arc::new(registry),
            executor,
        }
    }

    /// The endpoint registry this client resolves against.
    #[must_use]
    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    /// Generic service for any resource type.
    #[must_use]
    pub fn resource<R: Resource>(&self) -> ResourceService<R> {
        ResourceService::new(Arc::clone(&self.registry), self.executor.clone())
    }

    /// Product service.
    #[must_use]
    pub fn products(&self) -> ProductService {
        ProductService::new(self.resource())
    }

    /// Order service.
    #[must_use]
    pub fn orders(&self) -> OrderService {
        OrderService::new(self.resource())
    }

    /// Customer service.
    #[must_use]
    pub fn customers(&self) -> CustomerService {
        CustomerService::new(self.resource())
    }
}
