//! Request handlers for the roster API.

mod landing;
mod users;

pub use landing::*;
pub use users::*;

use axum::body::Body;
use axum::http::{HeaderMap, HeaderValue, Response, StatusCode};
use serde::Serialize;

use crate::error::{ErrorCode, ServiceError, ServiceResult};

/// Creates common response headers for API responses.
pub fn common_headers(request_id: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(request_id) {
        headers.insert("x-request-id", value);
    }
    headers.insert("server", HeaderValue::from_static("roster-rs"));
    headers
}

/// Builds a response with the given status, headers, and body.
pub fn build_response(status: StatusCode, headers: HeaderMap, body: Body) -> Response<Body> {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}

/// Serializes `value` into a JSON response.
pub fn json_response<T: Serialize>(
    status: StatusCode,
    mut headers: HeaderMap,
    value: &T,
) -> ServiceResult<Response<Body>> {
    let body = serde_json::to_vec(value).map_err(|e| {
        ServiceError::with_message(
            ErrorCode::InternalError,
            format!("failed to serialize response: {}", e),
        )
    })?;
    headers.insert("Content-Type", HeaderValue::from_static("application/json"));
    Ok(build_response(status, headers, Body::from(body)))
}
