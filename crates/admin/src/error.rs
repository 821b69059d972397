//! Unified error handling for the dashboard.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use backoffice_core::Principal;

use crate::api::{ErrorKind, HttpErrorKind, RequestError};

/// Application-level error type for the dashboard.
#[derive(Debug, Error)]
pub enum AppError {
    /// A backend service call failed.
    #[error("Backend error: {0}")]
    Backend(#[from] RequestError),
}

/// JSON body rendered for every error response.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    kind: ErrorKind,
    message: String,
    status: u16,
}

impl AppError {
    /// Status returned to the dashboard client.
    ///
    /// Backend 400 and 404 pass through; any other backend failure is a bad
    /// gateway. A request the dashboard could not encode is its own fault.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        let Self::Backend(err) = self;
        match err {
            RequestError::Encode { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            RequestError::Http { status, .. } => match HttpErrorKind::from_status(*status) {
                HttpErrorKind::BadRequest | HttpErrorKind::NotFound => *status,
                _ => StatusCode::BAD_GATEWAY,
            },
            RequestError::Network { .. } | RequestError::Decode { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let Self::Backend(err) = &self;

        // Client-caused errors pass through; everything else is reported
        let message = if status.is_client_error() {
            err.message().to_string()
        } else {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Dashboard request error"
            );
            // Don't expose backend internals to clients
            if status == StatusCode::INTERNAL_SERVER_ERROR {
                "Internal server error".to_string()
            } else {
                "Backend service error".to_string()
            }
        };

        let body = ErrorResponse {
            kind: err.kind(),
            message,
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// Set the Sentry user context from the admitted principal.
pub fn set_sentry_user(principal: &Principal) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(principal.id.to_string()),
            username: Some(principal.name.clone()),
            ..Default::default()
        }));
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::to_bytes;
    use serde_json::{Value, json};

    use super::*;

    fn http(status: StatusCode, message: &str) -> AppError {
        AppError::Backend(RequestError::Http {
            status,
            message: message.to_string(),
        })
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_app_error_display() {
        let err = http(StatusCode::NOT_FOUND, "product not found");
        assert_eq!(
            err.to_string(),
            "Backend error: HTTP 404 Not Found: product not found"
        );
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            http(StatusCode::NOT_FOUND, "x").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            http(StatusCode::BAD_REQUEST, "x").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            http(StatusCode::INTERNAL_SERVER_ERROR, "x").status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            http(StatusCode::UNAUTHORIZED, "x").status(),
            StatusCode::BAD_GATEWAY
        );

        let network = AppError::Backend(RequestError::Network {
            message: "connection refused".to_string(),
        });
        assert_eq!(network.status(), StatusCode::BAD_GATEWAY);

        let encode = AppError::Backend(RequestError::Encode {
            message: "bad key".to_string(),
        });
        assert_eq!(encode.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_not_found_body_passes_message_through() {
        let response = http(StatusCode::NOT_FOUND, "product not found").into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"kind": "not_found", "message": "product not found", "status": 404})
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_hides_details() {
        let response = AppError::Backend(RequestError::Decode {
            message: "missing field `sku`".to_string(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            body_json(response).await,
            json!({"kind": "decode", "message": "Backend service error", "status": 502})
        );
    }
}
