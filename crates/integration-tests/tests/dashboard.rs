//! Dashboard routes end to end: guard, handlers, and error rendering.

#![allow(clippy::unwrap_used)]

use backoffice_core::Role;
use backoffice_integration_tests::{LOGIN_PATH, TestDashboard};
use httpmock::prelude::*;
use reqwest::{StatusCode, header::LOCATION};
use serde_json::{Value, json};

fn location(response: &reqwest::Response) -> &str {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_health_is_public() {
    let dashboard = TestDashboard::start().await;

    let response = dashboard.client.get(dashboard.url("/health")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_anonymous_request_redirects_with_next() {
    let dashboard = TestDashboard::start().await;
    let backend = dashboard
        .backend
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(200).json_body(json!([]));
        })
        .await;

    let response = dashboard
        .client
        .get(dashboard.url("/products?page=2"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        format!("{LOGIN_PATH}?next=%2Fproducts%3Fpage%3D2")
    );
    backend.assert_calls_async(0).await;
}

#[tokio::test]
async fn test_viewer_can_read() {
    let dashboard = TestDashboard::start().await;
    dashboard
        .backend
        .mock_async(|when, then| {
            when.method(GET).path("/customers/c1");
            then.status(200).json_body(json!({
                "customerId": "c1",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com"
            }));
        })
        .await;
    dashboard.login(&[Role::Viewer]).await;

    let response = dashboard
        .client
        .get(dashboard.url("/customers/c1"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["email"], "ada@example.com");
}

#[tokio::test]
async fn test_viewer_cannot_write() {
    let dashboard = TestDashboard::start().await;
    let backend = dashboard
        .backend
        .mock_async(|when, then| {
            when.method(DELETE).path("/orders/o1");
            then.status(204);
        })
        .await;
    dashboard.login(&[Role::Viewer]).await;

    let response = dashboard
        .client
        .delete(dashboard.url("/orders/o1"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with(LOGIN_PATH));
    backend.assert_calls_async(0).await;
}

#[tokio::test]
async fn test_logout_sends_next_request_to_login() {
    let dashboard = TestDashboard::start().await;
    let backend = dashboard
        .backend
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(200).json_body(json!([]));
        })
        .await;
    dashboard.login(&[Role::Viewer]).await;

    let response = dashboard.client.get(dashboard.url("/products")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    dashboard.logout().await;

    let response = dashboard.client.get(dashboard.url("/products")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("{LOGIN_PATH}?next=%2Fproducts"));
    backend.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_admin_creates_product() {
    let dashboard = TestDashboard::start().await;
    let backend = dashboard
        .backend
        .mock_async(|when, then| {
            when.method(POST).path("/products");
            then.status(201).json_body(json!({
                "productId": "p1",
                "name": "Widget",
                "sku": "W-1",
                "price": 9.99,
                "availableQuantity": 5
            }));
        })
        .await;
    dashboard.login(&[Role::Admin, Role::Viewer]).await;

    let response = dashboard
        .client
        .post(dashboard.url("/products"))
        .json(&json!({"name": "Widget", "sku": "W-1", "price": 9.99, "availableQuantity": 5}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["productId"], "p1");
    backend.assert_async().await;
}

#[tokio::test]
async fn test_delete_returns_no_content() {
    let dashboard = TestDashboard::start().await;
    dashboard
        .backend
        .mock_async(|when, then| {
            when.method(DELETE).path("/customers/c9");
            then.status(204);
        })
        .await;
    dashboard.login(&[Role::SuperAdmin]).await;

    let response = dashboard
        .client
        .delete(dashboard.url("/customers/c9"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_backend_not_found_passes_through() {
    let dashboard = TestDashboard::start().await;
    dashboard
        .backend
        .mock_async(|when, then| {
            when.method(GET).path("/orders/missing");
            then.status(404).json_body(json!({"message": "order missing not found"}));
        })
        .await;
    dashboard.login(&[Role::Viewer]).await;

    let response = dashboard
        .client
        .get(dashboard.url("/orders/missing"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"kind": "not_found", "message": "order missing not found", "status": 404})
    );
}

#[tokio::test]
async fn test_backend_failure_is_bad_gateway() {
    let dashboard = TestDashboard::start().await;
    dashboard
        .backend
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(500).body("database on fire");
        })
        .await;
    dashboard.login(&[Role::Viewer]).await;

    let response = dashboard
        .client
        .get(dashboard.url("/products"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["kind"], "server_error");
    assert_eq!(body["status"], 502);
}
