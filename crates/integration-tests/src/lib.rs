//! Integration test support for the backoffice client and dashboard.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p backoffice-integration-tests
//! ```
//!
//! Backends are `httpmock` servers; the dashboard runs in-process on an
//! ephemeral port. Nothing external is required.
//!
//! # Test Categories
//!
//! - `services` - Resource services against mock backends
//! - `dashboard` - Role-gated HTTP routes end to end

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use axum::{Json, http::StatusCode, routing::post};
use backoffice_admin::api::ApiClient;
use backoffice_admin::config::{AdminConfig, ServicesConfig};
use backoffice_admin::middleware::auth::{clear_principal, set_principal};
use backoffice_admin::state::AppState;
use backoffice_core::{Principal, ResourceDomain, Role};
use httpmock::MockServer;
use tower_sessions::Session;

/// Login path the test dashboard redirects to.
pub const LOGIN_PATH: &str = "/auth/login";

/// Path of the test-only route that stores or clears the session principal.
const TEST_LOGIN_PATH: &str = "/test/session";

/// Service configuration pointing every domain at `server`.
pub fn services_config(server: &MockServer) -> ServicesConfig {
    let base_url = server.base_url();
    ServicesConfig::from_base_urls(ResourceDomain::ALL.map(|domain| (domain, base_url.as_str())))
        .unwrap()
}

/// API client pointing every domain at `server`.
pub fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::from_config(&services_config(server)).unwrap()
}

/// A dashboard running in-process against a mock backend.
pub struct TestDashboard {
    /// Mock backend serving every domain.
    pub backend: MockServer,
    /// Client with a cookie store that does not follow redirects.
    pub client: reqwest::Client,
    base_url: String,
}

impl TestDashboard {
    /// Start a mock backend and a dashboard bound to an ephemeral port.
    pub async fn start() -> Self {
        let backend = MockServer::start_async().await;

        let config = AdminConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            base_url: "http://localhost".to_string(),
            login_path: LOGIN_PATH.to_string(),
            services: services_config(&backend),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 0.0,
            sentry_traces_sample_rate: 0.0,
        };
        let state = AppState::from_config(config).unwrap();

        let router = backoffice_admin::routes::routes()
            .route(TEST_LOGIN_PATH, post(store_principal).delete(forget_principal));
        let app = backoffice_admin::with_layers(router, state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();

        Self {
            backend,
            client,
            base_url: format!("http://{addr}"),
        }
    }

    /// Absolute URL for a dashboard path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Sign in as a principal holding `roles`.
    pub async fn login(&self, roles: &[Role]) {
        let principal = Principal::new("op-1", "Test Operator", roles.to_vec());
        let response = self
            .client
            .post(self.url(TEST_LOGIN_PATH))
            .json(&principal)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);
    }

    /// Sign out, keeping the session cookie.
    pub async fn logout(&self) {
        let response = self
            .client
            .delete(self.url(TEST_LOGIN_PATH))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);
    }
}

/// Stands in for the identity collaborator.
async fn store_principal(session: Session, Json(principal): Json<Principal>) -> StatusCode {
    match set_principal(&session, &principal).await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Stands in for the identity collaborator's sign-out.
async fn forget_principal(session: Session) -> StatusCode {
    match clear_principal(&session).await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
