//! Resource services against mock backends.

#![allow(clippy::unwrap_used)]

use backoffice_admin::api::{ApiClient, ErrorKind, RequestError};
use backoffice_admin::config::ServicesConfig;
use backoffice_core::{
    CustomerId, OrderId, OrderInput, OrderLine, OrderStatus, ProductId, ProductInput,
    ResourceDomain,
};
use backoffice_integration_tests::api_client;
use httpmock::prelude::*;
use rust_decimal::Decimal;
use serde_json::json;

fn widget_input() -> ProductInput {
    ProductInput {
        name: "Widget".to_string(),
        sku: "W-1".to_string(),
        price: Decimal::new(999, 2),
        available_quantity: 5,
    }
}

#[tokio::test]
async fn test_create_product_round_trips_backend_body() {
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
            when.method(POST)
                .path("/products")
                .header("content-type", "application/json")
                .json_body(json!({
                    "name": "Widget",
                    "sku": "W-1",
                    "price": 9.99,
                    "availableQuantity": 5
                }));
            then.status(201).json_body(body.clone());
        })
        .await;

    let product = api_client(&server)
        .products()
        .create_product(&widget_input())
        .await
        .unwrap();

    assert_eq!(product.product_id, ProductId::new("p1"));
    assert_eq!(product.price, Decimal::new(999, 2));
    assert_eq!(serde_json::to_value(&product).unwrap(), body);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_missing_product_is_not_found() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT).path("/products/nope");
            then.status(404).json_body(json!({"message": "no product nope"}));
        })
        .await;

    let err = api_client(&server)
        .products()
        .update_product(&ProductId::new("nope"), &widget_input())
        .await
        .unwrap_err();

    assert!(matches!(err, RequestError::Http { .. }));
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_missing_customer_is_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/customers/ghost");
            then.status(404);
        })
        .await;

    let result = api_client(&server)
        .customers()
        .delete_customer(&CustomerId::new("ghost"))
        .await;

    assert!(result.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_unreachable_product_service_is_network_error() {
    let server = MockServer::start_async().await;
    let base_url = server.base_url();
    let config = ServicesConfig::from_base_urls([
        (ResourceDomain::Order, base_url.as_str()),
        (ResourceDomain::Product, "http://127.0.0.1:1"),
        (ResourceDomain::Customer, base_url.as_str()),
    ])
    .unwrap();
    let client = ApiClient::from_config(&config).unwrap();

    let err = client.products().list_products().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Network);
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products/p1");
            then.status(200).json_body(json!({"productId": "p1", "name": "Widget"}));
        })
        .await;

    let err = api_client(&server)
        .products()
        .get_product(&ProductId::new("p1"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn test_server_error_keeps_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/orders");
            then.status(502).body("bad gateway upstream");
        })
        .await;

    let err = api_client(&server).orders().list_orders().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ServerError);
    assert_eq!(err.status().map(|s| s.as_u16()), Some(502));
    assert_eq!(err.message(), "bad gateway upstream");
}

#[tokio::test]
async fn test_order_lifecycle() {
    let server = MockServer::start_async().await;
    let order = json!({
        "orderId": "o1",
        "customerId": "c1",
        "status": "PENDING",
        "lines": [{"productId": "p1", "quantity": 3, "unitPrice": 2.5}],
        "total": 7.5,
        "createdAt": "2026-03-01T10:00:00Z"
    });
    let create = server
        .mock_async(|when, then| {
            when.method(POST).path("/orders").json_body(json!({
                "customerId": "c1",
                "status": "PENDING",
                "lines": [{"productId": "p1", "quantity": 3, "unitPrice": 2.5}]
            }));
            then.status(201).json_body(order.clone());
        })
        .await;
    let update = server
        .mock_async(|when, then| {
            when.method(PUT).path("/orders/o1").json_body(json!({
                "customerId": "c1",
                "status": "FULFILLED",
                "lines": [{"productId": "p1", "quantity": 3, "unitPrice": 2.5}]
            }));
            then.status(200).json_body(json!({
                "orderId": "o1",
                "customerId": "c1",
                "status": "FULFILLED",
                "lines": [{"productId": "p1", "quantity": 3, "unitPrice": 2.5}],
                "total": 7.5
            }));
        })
        .await;

    let orders = api_client(&server).orders();
    let mut input = OrderInput {
        customer_id: CustomerId::new("c1"),
        status: OrderStatus::Pending,
        lines: vec![OrderLine {
            product_id: ProductId::new("p1"),
            quantity: 3,
            unit_price: Decimal::new(25, 1),
        }],
    };

    let created = orders.create_order(&input).await.unwrap();
    assert_eq!(created.order_id, OrderId::new("o1"));
    assert_eq!(created.total, Decimal::new(75, 1));
    assert!(created.created_at.is_some());

    input.status = OrderStatus::Fulfilled;
    let updated = orders.update_order(&created.order_id, &input).await.unwrap();
    assert_eq!(updated.status, OrderStatus::Fulfilled);

    create.assert_async().await;
    update.assert_async().await;
}

#[tokio::test]
async fn test_list_customers_keeps_backend_order() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/customers");
            then.status(200).json_body(json!([
                {"customerId": "c3", "firstName": "Grace", "lastName": "Hopper", "email": "grace@example.com"},
                {"customerId": "c1", "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com", "phone": "+44 20 7946 0000"}
            ]));
        })
        .await;

    let customers = api_client(&server).customers().list_customers().await.unwrap();

    let ids: Vec<_> = customers.iter().map(|c| c.customer_id.as_str()).collect();
    assert_eq!(ids, ["c3", "c1"]);
    assert_eq!(customers[1].phone.as_deref(), Some("+44 20 7946 0000"));
}

#[test]
fn test_registry_resolution_is_stable() {
    let config = ServicesConfig::from_base_urls([
        (ResourceDomain::Order, "http://localhost:8081"),
        (ResourceDomain::Product, "http://localhost:8082"),
        (ResourceDomain::Customer, "http://localhost:8083"),
    ])
    .unwrap();
    let client = ApiClient::from_config(&config).unwrap();

    for domain in ResourceDomain::ALL {
        assert!(std::ptr::eq(
            client.registry().resolve(domain),
            client.clone().registry().resolve(domain)
        ));
    }
}
