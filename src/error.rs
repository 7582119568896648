//! Structured error responses for the API boundary.
//!
//! Two error kinds exist: unregistered routes (404) and unhandled faults
//! (500). Both are rendered as JSON with a fixed schema; panic details are
//! logged but never leaked to the client.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use strum::Display;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

use crate::info::ENDPOINT_PATHS;
use crate::metrics;

/// Wire strings for the `error` field of an [`ErrorResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorKind {
    /// Unregistered route.
    #[strum(serialize = "Not Found")]
    NotFound,
    /// Unhandled fault while serving a request.
    #[strum(serialize = "Internal Server Error")]
    Internal,
}

/// API error converted to a structured JSON body at the boundary.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No route matched the requested path.
    #[error("no route for {path}")]
    NotFound {
        /// The path that did not match.
        path: String,
    },

    /// An unhandled fault occurred inside a handler.
    #[error("unhandled internal fault")]
    Internal,
}

impl ApiError {
    /// HTTP status the error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body returned for 404 and 500 responses.
///
/// `available_endpoints` is present on 404 bodies and omitted (not null)
/// on 500 bodies.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error kind, e.g. "Not Found".
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Known endpoints, listed on 404 bodies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_endpoints: Option<Vec<String>>,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::NotFound { path } => Self {
                error: ErrorKind::NotFound.to_string(),
                message: format!("The requested endpoint {} does not exist", path),
                available_endpoints: Some(
                    ENDPOINT_PATHS.iter().map(|p| p.to_string()).collect(),
                ),
            },
            ApiError::Internal => Self {
                error: ErrorKind::Internal.to_string(),
                message: "An unexpected error occurred. Please try again later.".to_string(),
                available_endpoints: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::from(&self);
        (self.status(), Json(body)).into_response()
    }
}

/// Responder for `CatchPanicLayer`: converts a handler panic into the
/// structured 500 body. The panic payload goes to the log only.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "non-string panic payload".to_string()
    };

    error!("Internal server error: {}", detail);
    metrics::inc_handler_panics();

    ApiError::Internal.into_response()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn kind_renders_the_wire_strings() {
        assert_eq!(ErrorKind::NotFound.to_string(), "Not Found");
        assert_eq!(ErrorKind::Internal.to_string(), "Internal Server Error");
    }

    #[test]
    fn not_found_body_lists_available_endpoints() {
        let err = ApiError::NotFound {
            path: "/nonexistent".to_string(),
        };
        let body = serde_json::to_value(ErrorResponse::from(&err)).unwrap();

        assert_eq!(body["error"], "Not Found");
        assert_eq!(
            body["message"],
            "The requested endpoint /nonexistent does not exist"
        );
        assert_eq!(
            body["available_endpoints"],
            serde_json::json!(["/", "/health", "/docs", "/redoc"])
        );
    }

    #[test]
    fn internal_body_omits_available_endpoints() {
        let body = serde_json::to_value(ErrorResponse::from(&ApiError::Internal)).unwrap();

        assert_eq!(body["error"], "Internal Server Error");
        assert_eq!(
            body["message"],
            "An unexpected error occurred. Please try again later."
        );
        assert!(body.get("available_endpoints").is_none());
    }

    #[test]
    fn errors_map_to_their_status_codes() {
        let not_found = ApiError::NotFound {
            path: "/x".to_string(),
        };
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);

        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn panic_payloads_become_a_plain_500_response() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new("detailed secret".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
