//! Order service operations.

use backoffice_core::{Order, OrderId, OrderInput};

use super::ResourceService;
use crate::api::RequestError;

/// Operations against the order service.
#[derive(Debug, Clone)]
pub struct OrderService {
    inner: ResourceService<Order>,
}

impl OrderService {
    pub(crate) const fn new(inner: ResourceService<Order>) -> Self {
        Self { inner }
    }

    /// List all orders.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` if the order service call fails.
    pub async fn list_orders(&self) -> Result<Vec<Order>, RequestError> {
        self.inner.list().await
    }

    /// Get an order by id.
    ///
    /// # Errors
    ///
    /// Returns a not-found `RequestError` if the order does not exist.
    pub async fn get_order(&self, id: &OrderId) -> Result<Order, RequestError> {
        self.inner.get(id).await
    }

    /// Create an order.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` if the order service rejects the input.
    pub async fn create_order(&self, input: &OrderInput) -> Result<Order, RequestError> {
        self.inner.create(input).await
    }

    /// Replace an order.
    ///
    /// # Errors
    ///
    /// Returns a not-found `RequestError` if the order does not exist.
    pub async fn update_order(&self, id: &OrderId, input: &OrderInput) -> Result<Order, RequestError> {
        self.inner.update(id, input).await
    }

    /// Delete an order.
    ///
    /// # Errors
    ///
    /// Returns a not-found `RequestError` if the order does not exist.
    pub async fn delete_order(&self, id: &OrderId) -> Result<(), RequestError> {
        self.inner.delete(id).await
    }
}
