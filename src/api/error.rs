//! Error envelope and error-to-status translation for the HTTP surface.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::task::ports::{TaskInputError, TaskRepositoryError};

/// Formats a timestamp in the ISO-8601 local-datetime form used on the
/// wire, e.g. `2026-08-06T12:34:56.789`.
pub(super) fn format_local_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
}

/// Per-field detail attached to validation failures.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSubError {
    /// Name of the request object that failed validation.
    pub object: String,
    /// Field that was rejected.
    pub field: String,
    /// The rejected value, when one was supplied.
    pub rejected_value: Option<Value>,
    /// Human-readable explanation.
    pub message: String,
}

/// Structured error response.
///
/// Serializes as `{status, message, timestamp, debugMessage, subErrors?}`
/// with `subErrors` present only for field-validation failures.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    debug_message: Option<String>,
    sub_errors: Vec<ApiSubError>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiErrorBody<'a> {
    status: u16,
    message: &'a str,
    timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    debug_message: Option<&'a str>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    sub_errors: &'a [ApiSubError],
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            debug_message: None,
            sub_errors: Vec::new(),
        }
    }

    fn with_debug(mut self, debug_message: impl Into<String>) -> Self {
        self.debug_message = Some(debug_message.into());
        self
    }

    /// 400 response carrying per-field validation detail.
    #[must_use]
    pub fn validation(sub_errors: Vec<ApiSubError>) -> Self {
        let mut error = Self::new(
            StatusCode::BAD_REQUEST,
            "Validation failed for the provided data",
        )
        .with_debug("One or more fields do not meet the validation requirements");
        error.sub_errors = sub_errors;
        error
    }

    /// 400 response for business-rule violations and malformed requests.
    #[must_use]
    pub fn bad_request(message: impl Into<String>, debug_message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message).with_debug(debug_message)
    }

    /// 404 response for requests that match no route.
    #[must_use]
    pub fn unknown_route(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
            .with_debug("Check that the URL and HTTP method are correct")
    }

    /// 405 response for known routes hit with an unsupported method.
    #[must_use]
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, message)
    }

    /// 409 response for store-level constraint violations.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// 503 response for an unreachable or failing store.
    #[must_use]
    pub fn service_unavailable() -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "Service temporarily unavailable. Please try again later.",
        )
        .with_debug("Database access failure")
    }

    /// 500 response with a generic message; the detail is logged, never
    /// echoed to the caller.
    #[must_use]
    pub fn internal(detail: &str) -> Self {
        tracing::error!(detail, "internal error");
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "An internal error occurred while processing the request",
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            status: self.status.as_u16(),
            message: &self.message,
            timestamp: format_local_datetime(Utc::now()),
            debug_message: self.debug_message.as_deref(),
            sub_errors: &self.sub_errors,
        };
        (self.status, Json(&body)).into_response()
    }
}

impl From<TaskInputError> for ApiError {
    fn from(err: TaskInputError) -> Self {
        match err {
            TaskInputError::Domain(domain) => {
                let message = domain.to_string();
                Self::bad_request(message, "The request violates a task field rule")
            }
            TaskInputError::DuplicateTitle(title) => Self::bad_request(
                format!("A task with the title '{title}' already exists (ignoring case)"),
                "Task titles are unique ignoring case and whitespace",
            ),
            TaskInputError::Repository(repo) => Self::from_repository(repo),
        }
    }
}

impl ApiError {
    fn from_repository(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::DuplicateTitle(_) | TaskRepositoryError::DuplicateTask(_) => {
                Self::conflict("A record with the provided data already exists")
            }
            TaskRepositoryError::NotFound(id) => {
                Self::internal(&format!("repository lost track of task {id}"))
            }
            TaskRepositoryError::Persistence(cause) => {
                tracing::error!(error = %cause, "task store failure");
                Self::service_unavailable()
            }
        }
    }
}
