//! Request context extraction and query parameter parsing.

use axum::http::{Method, Uri};
use std::collections::HashMap;
use uuid::Uuid;

use crate::error::{ErrorCode, ServiceError, ServiceResult};

/// Extracted request context containing all relevant information.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique request ID.
    pub request_id: String,
    /// HTTP method.
    pub method: Method,
    /// Request URI.
    pub uri: Uri,
    /// Query parameters.
    pub query_params: HashMap<String, String>,
}

impl RequestContext {
    pub fn new(method: Method, uri: Uri, query_params: HashMap<String, String>) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            method,
            uri,
            query_params,
        }
    }

    /// Returns the value of a query parameter.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_params.get(name).map(|s| s.as_str())
    }

    /// Parses an optional non-negative integer query parameter.
    ///
    /// Non-numeric values are `InvalidQueryParameterValue`; negative values
    /// are `InvalidArgument`.
    pub fn query_u64(&self, name: &str) -> ServiceResult<Option<u64>> {
        let Some(raw) = self.query_param(name) else {
            return Ok(None);
        };

        let value: i64 = raw.trim().parse().map_err(|_| {
            ServiceError::with_message(
                ErrorCode::InvalidQueryParameterValue,
                format!("query parameter {} is not an integer: {:?}", name, raw),
            )
        })?;

        u64::try_from(value).map(Some).map_err(|_| {
            ServiceError::invalid_argument(format!("{} must be non-negative, got {}", name, value))
        })
    }
}

/// `offset`/`limit` of a listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    pub offset: u64,
    pub limit: u64,
    /// Whether `limit` came from the query rather than the default.
    pub explicit_limit: bool,
}

impl ListParams {
    /// Reads `offset` and `limit`, defaulting to `0` and `default_limit`.
    ///
    /// Only the lower bound of `limit` is checked here; the upper bound
    /// depends on the record count, see [`ListParams::check_limit`].
    pub fn from_context(ctx: &RequestContext, default_limit: u64) -> ServiceResult<Self> {
        let offset = ctx.query_u64("offset")?.unwrap_or(0);

        let (limit, explicit_limit) = match ctx.query_u64("limit")? {
            None => (default_limit, false),
            Some(0) => {
                return Err(ServiceError::with_message(
                    ErrorCode::OutOfRangeQueryParameterValue,
                    "limit must be at least 1",
                ))
            }
            Some(limit) => (limit, true),
        };

        Ok(Self {
            offset,
            limit,
            explicit_limit,
        })
    }

    /// An explicit `limit` must not exceed `total` (not enforced for an
    /// empty set).
    pub fn check_limit(&self, total: u64) -> ServiceResult<()> {
        if self.explicit_limit && total > 0 && self.limit > total {
            return Err(ServiceError::with_message(
                ErrorCode::OutOfRangeQueryParameterValue,
                format!("limit must not exceed {}", total),
            ));
        }
        Ok(())
    }
}
