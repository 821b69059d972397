//! Backoffice dashboard library.
//!
//! Typed client for the order, product, and customer backend services, and
//! the role-gated axum host that exposes them to operators.
//!
//! # Modules
//!
//! - [`api`] - Endpoint registry, request executor, `ApiClient`
//! - [`services`] - Per-domain CRUD services
//! - [`middleware`] - Access guard, role extractors, sessions
//! - [`routes`] - JSON handlers
//!
//! The binary in `main.rs` wires these together; tests build the same router
//! through [`app`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::Router;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::create_session_layer;
use crate::state::AppState;

/// Build the dashboard router with its session and tracing layers.
///
/// Sentry layers are added by the binary, outside this router.
#[must_use]
pub fn app(state: AppState) -> Router {
    with_layers(routes::routes(), state)
}

/// Apply the session and tracing layers to `router` and attach `state`.
///
/// Exposed so tests can add their own routes under the same layers.
#[must_use]
pub fn with_layers(router: Router<AppState>, state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());

    router
        .layer(session_layer)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
                        span.record("latency_ms", latency_ms);
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}
