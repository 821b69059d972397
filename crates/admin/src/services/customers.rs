//! Customer service operations.

use backoffice_core::{Customer, CustomerId, CustomerInput};

use super::ResourceService;
use crate::api::RequestError;

/// Operations against the customer service.
#[derive(Debug, Clone)]
pub struct CustomerService {
    inner: ResourceService<Customer>,
}

impl CustomerService {
    pub(crate) const fn new(inner: ResourceService<Customer>) -> Self {
        Self { inner }
    }

    /// List all customers.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` if the customer service call fails.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, RequestError> {
        self.inner.list().await
    }

    /// Get a customer by id.
    ///
    /// # Errors
    ///
    /// Returns a not-found `RequestError` if the customer does not exist.
    pub async fn get_customer(&self, id: &CustomerId) -> Result<Customer, RequestError> {
        self.inner.get(id).await
    }

    /// Create a customer.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` if the customer service rejects the input.
    pub async fn create_customer(&self, input: &CustomerInput) -> Result<Customer, RequestError> {
        self.inner.create(input).await
    }

    /// Replace a customer.
    ///
    /// # Errors
    ///
    /// Returns a not-found `RequestError` if the customer does not exist.
    pub async fn update_customer(
        &self,
        id: &CustomerId,
        input: &CustomerInput,
    ) -> Result<Customer, RequestError> {
        self.inner.update(id, input).await
    }

    /// Delete a customer.
    ///
    /// # Errors
    ///
    /// Returns a not-found `RequestError` if the customer does not exist.
    pub async fn delete_customer(&self, id: &CustomerId) -> Result<(), RequestError> {
        self.inner.delete(id).await
    }
}
