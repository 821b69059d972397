//! Per-call request envelope.

use reqwest::Method;
use serde::Serialize;

use super::error::RequestError;

/// Method, path and optional JSON body for a single backend call.
///
/// Only the body-carrying constructors (`post`, `put`, `patch`) accept a
/// payload, so a GET or DELETE with a body cannot be built.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    path: String,
    body: Option<Vec<u8>>,
}

impl Request {
    /// A GET request (the default method).
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self::without_body(Method::GET, path)
    }

    /// A GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(path)
    }

    /// A DELETE request.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::without_body(Method::DELETE, path)
    }

    /// A POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::Encode` if `body` cannot be serialized.
    pub fn post<B: Serialize + ?Sized>(
        path: impl Into<String>,
        body: &B,
    ) -> Result<Self, RequestError> {
        Self::with_body(Method::POST, path, body)
    }

    /// A PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::Encode` if `body` cannot be serialized.
    pub fn put<B: Serialize + ?Sized>(
        path: impl Into<String>,
        body: &B,
    ) -> Result<Self, RequestError> {
        Self::with_body(Method::PUT, path, body)
    }

    /// A PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::Encode` if `body` cannot be serialized.
    pub fn patch<B: Serialize + ?Sized>(
        path: impl Into<String>,
        body: &B,
    ) -> Result<Self, RequestError> {
        Self::with_body(Method::PATCH, path, body)
    }

    fn without_body(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    fn with_body<B: Serialize + ?Sized>(
        method: Method,
        path: impl Into<String>,
        body: &B,
    ) -> Result<Self, RequestError> {
        let bytes = serde_json::to_vec(body).map_err(|e| RequestError::Encode {
            message: e.to_string(),
        })?;

        Ok(Self {
            method,
            path: path.into(),
            body: Some(bytes),
        })
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Path appended to the base URL.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Serialized JSON body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    pub(crate) fn into_parts(self) -> (Method, String, Option<Vec<u8>>) {
        (self.method, self.path, self.body)
    }
}

/// Join a base URL and a path with exactly one slash between them.
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path.is_empty() {
        base.to_string()
    } else if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
