//! Request executor: the single function that talks to backend services.

use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use super::error::{RequestError, error_message};
use super::request::{Request, join_url};
use crate::config::{ConfigError, ServicesConfig};

const CLIENT_USER_AGENT: &str = concat!("backoffice-admin/", env!("CARGO_PKG_VERSION"));

/// Performs one HTTP call per invocation and normalizes the outcome.
///
/// Holds no per-call state: no cache, no retry, no in-flight dedup. Cloning
/// is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct RequestExecutor {
    inner: Arc<RequestExecutorInner>,
}

struct RequestExecutorInner {
    client: reqwest::Client,
    api_token: Option<SecretString>,
}

impl std::fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestExecutor")
            .field(
                "api_token",
                &self.inner.api_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish_non_exhaustive()
    }
}

impl RequestExecutor {
    /// Create an executor from service configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::HttpClient` if the HTTP client cannot be built.
    pub fn new(config: &ServicesConfig) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(RequestExecutorInner {
                client,
                api_token: config.api_token.clone(),
            }),
        })
    }

    /// Execute `request` against `base_url` and decode a `T` from the body.
    ///
    /// # Errors
    ///
    /// - `RequestError::Network` if no response was received
    /// - `RequestError::Http` for a non-2xx status (status preserved)
    /// - `RequestError::Decode` if the body is not a valid `T`
    pub async fn execute<T: DeserializeOwned>(
        &self,
        base_url: &Url,
        request: Request,
    ) -> Result<T, RequestError> {
        let body = self.send(base_url, request).await?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "Backend response did not match the expected shape");
            RequestError::decode(&e)
        })
    }

    /// Execute `request` and discard any success body.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute), minus `Decode`.
    pub async fn execute_empty(&self, base_url: &Url, request: Request) -> Result<(), RequestError> {
        self.send(base_url, request).await.map(|_| ())
    }

    /// Perform the call and return the raw body of a 2xx response.
    #[instrument(
        name = "backend_request",
        skip(self, base_url, request),
        fields(method = %request.method(), url = tracing::field::Empty, status = tracing::field::Empty)
    )]
    async fn send(&self, base_url: &Url, request: Request) -> Result<Vec<u8>, RequestError> {
        let (method, path, body) = request.into_parts();
        let url = join_url(base_url.as_str(), &path);
        tracing::Span::current().record("url", url.as_str());

        let mut builder = self.inner.client.request(method, &url);
        if let Some(token) = &self.inner.api_token {
            builder = builder.bearer_auth(token.expose_secret());
        }
        if let Some(bytes) = body {
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(bytes);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, "Backend request failed before a response arrived");
            RequestError::network(&e)
        })?;

        let status = response.status();
        tracing::Span::current().record("status", status.as_u16());

        let bytes = response.bytes().await.map_err(|e| {
            warn!(error = %e, "Failed to read backend response body");
            RequestError::network(&e)
        })?;

        if !status.is_success() {
            let message = error_message(status, &String::from_utf8_lossy(&bytes));
            warn!(%status, %message, "Backend returned an error status");
            return Err(RequestError::Http { status, message });
        }

        debug!(%status, bytes = bytes.len(), "Backend request succeeded");
        Ok(bytes.to_vec())
    }
}
