//! Product service operations.

use backoffice_core::{Product, ProductId, ProductInput};

use super::ResourceService;
use crate::api::RequestError;

/// Catalog operations against the product service.
#[derive(Debug, Clone)]
pub struct ProductService {
    inner: ResourceService<Product>,
}

impl ProductService {
    pub(crate) const fn new(inner: ResourceService<Product>) -> Self {
        Self { inner }
    }

    /// List all products.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` if the product service call fails.
    pub async fn list_products(&self) -> Result<Vec<Product>, RequestError> {
        self.inner.list().await
    }

    /// Get a product by id.
    ///
    /// # Errors
    ///
    /// Returns a not-found `RequestError` if the product does not exist.
    pub async fn get_product(&self, id: &ProductId) -> Result<Product, RequestError> {
        self.inner.get(id).await
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` if the product service rejects the input.
    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, RequestError> {
        self.inner.create(input).await
    }

    /// Replace a product.
    ///
    /// # Errors
    ///
    /// Returns a not-found `RequestError` if the product does not exist.
    pub async fn update_product(
        &self,
        id: &ProductId,
        input: &ProductInput,
    ) -> Result<Product, RequestError> {
        self.inner.update(id, input).await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns a not-found `RequestError` if the product does not exist.
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), RequestError> {
        self.inner.delete(id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use httpmock::prelude::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    use super::*;
    use crate::api::ErrorKind;
    use crate::services::test_client;

    fn widget_input() -> ProductInput {
        ProductInput {
            name: "Widget".to_string(),
            sku: "W-1".to_string(),
            price: Decimal::new(999, 2),
            available_quantity: 5,
        }
    }

    #[tokio::test]
    async fn test_create_product_returns_backend_body() {
        let server = MockServer::start_async().await;
        let body = json!({
            "productId": "p1",
            "name": "Widget",
            "sku": "W-1",
            "price": 9.99,
            "availableQuantity": 5
        });
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/products").json_body(json!({
                    "name": "Widget",
                    "sku": "W-1",
                    "price": 9.99,
                    "availableQuantity": 5
                }));
                then.status(201).json_body(body.clone());
            })
            .await;

        let product = test_client(&server)
            .products()
            .create_product(&widget_input())
            .await
            .unwrap();

        assert_eq!(serde_json::to_value(&product).unwrap(), body);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(PUT).path("/products/missing");
                then.status(404).json_body(json!({"message": "product not found"}));
            })
            .await;

        let err = test_client(&server)
            .products()
            .update_product(&ProductId::new("missing"), &widget_input())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_products_preserves_order() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products");
                then.status(200).json_body(json!([
                    {"productId": "p2", "name": "B", "sku": "B-1", "price": 1, "availableQuantity": 1},
                    {"productId": "p1", "name": "A", "sku": "A-1", "price": 2.5, "availableQuantity": 0}
                ]));
            })
            .await;

        let products = test_client(&server).products().list_products().await.unwrap();

        let ids: Vec<_> = products.iter().map(|p| p.product_id.as_str()).collect();
        assert_eq!(ids, ["p2", "p1"]);
    }
}
