//! Error types for backend service calls.

use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Errors produced by the request executor and propagated unchanged by the
/// resource services.
///
/// Every failure is a single discrete outcome; nothing is retried.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Transport failure: no response was received.
    #[error("network error: {message}")]
    Network {
        /// Transport error description.
        message: String,
    },

    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http {
        /// Status returned by the backend.
        status: StatusCode,
        /// Backend-provided message, or the canonical reason phrase.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("decode error: {message}")]
    Decode {
        /// Deserialization error description.
        message: String,
    },

    /// The request body could not be serialized.
    #[error("encode error: {message}")]
    Encode {
        /// Serialization error description.
        message: String,
    },
}

/// Classification of a non-success HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HttpErrorKind {
    /// 400
    BadRequest,
    /// 401
    Unauthorized,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 5xx
    ServerError,
    /// Any other non-success status.
    Other,
}

impl HttpErrorKind {
    /// Classify a status code.
    #[must_use]
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::BadRequest,
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden,
            StatusCode::NOT_FOUND => Self::NotFound,
            s if s.is_server_error() => Self::ServerError,
            _ => Self::Other,
        }
    }
}

/// Flat discriminant of a [`RequestError`] for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Network,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    ServerError,
    Http,
    Decode,
    Encode,
}

impl RequestError {
    pub(crate) fn network(err: &reqwest::Error) -> Self {
        Self::Network {
            message: describe_transport_error(err),
        }
    }

    pub(crate) fn decode(err: &serde_json::Error) -> Self {
        Self::Decode {
            message: err.to_string(),
        }
    }

    /// Kind of failure, with HTTP statuses classified.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network { .. } => ErrorKind::Network,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Encode { .. } => ErrorKind::Encode,
            Self::Http { status, .. } => match HttpErrorKind::from_status(*status) {
                HttpErrorKind::BadRequest => ErrorKind::BadRequest,
                HttpErrorKind::Unauthorized => ErrorKind::Unauthorized,
                HttpErrorKind::Forbidden => ErrorKind::Forbidden,
                HttpErrorKind::NotFound => ErrorKind::NotFound,
                HttpErrorKind::ServerError => ErrorKind::ServerError,
                HttpErrorKind::Other => ErrorKind::Http,
            },
        }
    }

    /// HTTP status, when the backend answered.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Classified HTTP status, when the backend answered.
    #[must_use]
    pub fn http_kind(&self) -> Option<HttpErrorKind> {
        self.status().map(HttpErrorKind::from_status)
    }

    /// Human-readable detail without the kind prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Network { message }
            | Self::Http { message, .. }
            | Self::Decode { message }
            | Self::Encode { message } => message,
        }
    }

    /// Whether the backend reported the resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.http_kind() == Some(HttpErrorKind::NotFound)
    }
}

/// Error body shapes commonly returned by the backends.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Longest message kept from an error body, in characters.
const MAX_ERROR_MESSAGE_CHARS: usize = 512;

/// Pick the most useful message for a failed response.
///
/// Bodies longer than [`MAX_ERROR_MESSAGE_CHARS`] are cut on a character
/// boundary and suffixed with `...`.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    let trimmed = body.trim();

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(trimmed)
        && let Some(message) = parsed.message.or(parsed.error)
    {
        return truncate_message(&message);
    }

    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown status")
            .to_string()
    } else {
        truncate_message(trimmed)
    }
}

fn truncate_message(message: &str) -> String {
    if message.chars().count() <= MAX_ERROR_MESSAGE_CHARS {
        return message.to_string();
    }
    let mut kept: String = message.chars().take(MAX_ERROR_MESSAGE_CHARS).collect();
    kept.push_str("...");
    kept
}

fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_connect() {
        format!("connection failed: {err}")
    } else if err.is_timeout() {
        format!("timed out: {err}")
    } else {
        err.to_string()
    }
}
