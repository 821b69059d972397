//! Generic CRUD over one resource domain.

use std::marker::PhantomData;
use std::sync::Arc;

use backoffice_core::Resource;
use tracing::instrument;

use crate::api::{EndpointDescriptor, EndpointRegistry, Request, RequestError, RequestExecutor};

/// CRUD operations for resource type `R`.
///
/// Every operation resolves `R::DOMAIN` once and performs exactly one backend
/// call. Ids are passed through as opaque path segments and inputs are sent
/// as-is; validation belongs to the backend.
pub struct ResourceService<R> {
    registry: Arc<EndpointRegistry>,
    executor: RequestExecutor,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            executor: self.executor.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> std::fmt::Debug for ResourceService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceService")
            .field("domain", &R::DOMAIN)
            .field("endpoint", self.endpoint())
            .finish_non_exhaustive()
    }
}

impl<R: Resource> ResourceService<R> {
    pub(crate) const fn new(registry: Arc<EndpointRegistry>, executor: RequestExecutor) -> Self {
        Self {
            registry,
            executor,
            _resource: PhantomData,
        }
    }

    /// Endpoint this service targets.
    #[must_use]
    pub fn endpoint(&self) -> &EndpointDescriptor {
        self.registry.resolve(R::DOMAIN)
    }

    /// Fetch every record, in the order the backend returns them.
    ///
    /// # Errors
    ///
    /// Propagates the executor's `RequestError` unchanged.
    #[instrument(skip(self), fields(domain = %R::DOMAIN))]
    pub async fn list(&self) -> Result<Vec<R::Record>, RequestError> {
        let endpoint = self.endpoint();
        self.executor
            .execute(endpoint.base_url(), Request::get(endpoint.collection_path()))
            .await
    }

    /// Fetch one record by id.
    ///
    /// # Errors
    ///
    /// Returns a 404 `RequestError::Http` if the backend has no such record.
    #[instrument(skip(self, id), fields(domain = %R::DOMAIN, id = %id.as_ref()))]
    pub async fn get(&self, id: &R::Id) -> Result<R::Record, RequestError> {
        let endpoint = self.endpoint();
        self.executor
            .execute(endpoint.base_url(), Request::get(endpoint.item_path(id.as_ref())))
            .await
    }

    /// Create a record and return the backend's representation of it.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::Encode` if `input` cannot be serialized, or
    /// whatever the executor reports.
    #[instrument(skip(self, input), fields(domain = %R::DOMAIN))]
    pub async fn create(&self, input: &R::Input) -> Result<R::Record, RequestError> {
        let endpoint = self.endpoint();
        let request = Request::post(endpoint.collection_path(), input)?;
        self.executor.execute(endpoint.base_url(), request).await
    }

    /// Replace a record and return the updated representation.
    ///
    /// # Errors
    ///
    /// Returns a 404 `RequestError::Http` if the backend has no such record.
    #[instrument(skip(self, id, input), fields(domain = %R::DOMAIN, id = %id.as_ref()))]
    pub async fn update(&self, id: &R::Id, input: &R::Input) -> Result<R::Record, RequestError> {
        let endpoint = self.endpoint();
        let request = Request::put(endpoint.item_path(id.as_ref()), input)?;
        self.executor.execute(endpoint.base_url(), request).await
    }

    /// Delete a record.
    ///
    /// # Errors
    ///
    /// Returns a 404 `RequestError::Http` if the backend has no such record.
    #[instrument(skip(self, id), fields(domain = %R::DOMAIN, id = %id.as_ref()))]
    pub async fn delete(&self, id: &R::Id) -> Result<(), RequestError> {
        let endpoint = self.endpoint();
        self.executor
            .execute_empty(endpoint.base_url(), Request::delete(endpoint.item_path(id.as_ref())))
            .await
    }
}
