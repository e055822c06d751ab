//! Service error types and error response formatting.

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Error codes surfaced by the roster service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Argument errors raised by the navigation core
    InvalidArgument,

    // Request errors
    InvalidQueryParameterValue,
    OutOfRangeQueryParameterValue,

    // Lookup errors
    UserNotFound,
    ResourceNotFound,

    InternalError,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => "InvalidArgument",
            ErrorCode::InvalidQueryParameterValue => "InvalidQueryParameterValue",
            ErrorCode::OutOfRangeQueryParameterValue => "OutOfRangeQueryParameterValue",
            ErrorCode::UserNotFound => "UserNotFound",
            ErrorCode::ResourceNotFound => "ResourceNotFound",
            ErrorCode::InternalError => "InternalError",
        }
    }

    /// Returns the HTTP status code for this error code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidArgument
            | ErrorCode::InvalidQueryParameterValue
            | ErrorCode::OutOfRangeQueryParameterValue => StatusCode::BAD_REQUEST,

            ErrorCode::UserNotFound | ErrorCode::ResourceNotFound => StatusCode::NOT_FOUND,

            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the default message for this error code.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => "One of the arguments is invalid.",
            ErrorCode::InvalidQueryParameterValue => {
                "The value for one of the query parameters is not valid."
            }
            ErrorCode::OutOfRangeQueryParameterValue => {
                "One of the query parameters is outside the permissible range."
            }
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::ResourceNotFound => "The specified resource does not exist.",
            ErrorCode::InternalError => "The server encountered an internal error.",
        }
    }
}

/// Service error with code and message.
#[derive(Debug, Error)]
#[error("{code:?}: {message}")]
pub struct ServiceError {
    pub code: ErrorCode,
    pub message: String,
    pub request_id: Option<String>,
}

impl ServiceError {
    /// Creates a new error with the given code and default message.
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.default_message().to_string(),
            code,
            request_id: None,
        }
    }

    /// Creates a new error with a custom message.
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            request_id: None,
        }
    }

    /// Shorthand for an `InvalidArgument` error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidArgument, message)
    }

    /// Sets the request ID for this error.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    code: &'a str,
    message: &'a str,
    request_id: &'a str,
    time: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.code.status_code();
        let request_id = self
            .request_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let body = ErrorBody {
            code: self.code.as_str(),
            message: &self.message,
            request_id: &request_id,
            time: chrono::Utc::now()
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
        };

        let mut response = (status, Json(body)).into_response();
        let headers = response.headers_mut();
        if let Ok(value) = HeaderValue::from_str(&request_id) {
            headers.insert("x-request-id", value);
        }
        headers.insert(
            "x-error-code",
            HeaderValue::from_static(self.code.as_str()),
        );

        response
    }
}

/// Result type alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
