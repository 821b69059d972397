//! HTTP route handlers for the dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health               - Health check
//!
//! # Reads (Staff: super admin, admin, viewer)
//! GET    /{collection}         - List records
//! GET    /{collection}/{id}    - Show one record
//!
//! # Writes (Editors: super admin, admin)
//! POST   /{collection}         - Create a record
//! PUT    /{collection}/{id}    - Replace a record
//! DELETE /{collection}/{id}    - Delete a record (204)
//! ```
//!
//! `{collection}` is one of `orders`, `products`, `customers`. Denied
//! requests are redirected to the configured login path.

pub mod resources;

use axum::{Router, routing::get};
use backoffice_core::{Customer, Order, Product};

use crate::state::AppState;

/// Build all dashboard routes.
#[must_use]
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(resources::resource_routes::<Order>())
        .merge(resources::resource_routes::<Product>())
        .merge(resources::resource_routes::<Customer>())
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}
