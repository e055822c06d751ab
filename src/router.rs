//! Request routing for the roster API.

use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{Method, Response, Uri},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

use crate::config::Config;
use crate::context::RequestContext;
use crate::error::{ErrorCode, ServiceError, ServiceResult};
use crate::handlers;
use crate::storage::UserStore;

/// Application state shared between handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn UserStore>,
}

/// Creates the main router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // The landing page and pagination links fetch the listing from the API root
        .route("/api/", get(list_users_handler))
        .route("/api/users", get(list_users_handler))
        .route("/api/users/", get(list_users_handler))
        .route("/api/users/:user_id", get(user_profile_handler))
        .route("/api/users/:user_id/", get(user_profile_handler))
        .route("/api/refresh", post(refresh_handler))
        // Everything else is served the HTML shell
        .fallback(landing_handler)
        .with_state(state)
}

/// Converts a handler result into a response, tagging errors with the
/// request ID.
fn finish(ctx: &RequestContext, result: ServiceResult<Response<Body>>) -> Response<Body> {
    match result {
        Ok(response) => response,
        Err(e) => {
            warn!("{} {} failed: {}", ctx.method, ctx.uri, e);
            e.with_request_id(&ctx.request_id).into_response()
        }
    }
}

async fn list_users_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
) -> Response<Body> {
    let ctx = RequestContext::new(method, uri, query);
    let result = handlers::list_users(&ctx, state.store.clone(), &state.config).await;
    finish(&ctx, result)
}

async fn user_profile_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    Path(user_id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Response<Body> {
    let ctx = RequestContext::new(method, uri, query);

    // Non-numeric ids cannot name a user
    let result = match user_id.parse::<u64>() {
        Ok(id) => handlers::user_profile(&ctx, state.store.clone(), id).await,
        Err(_) => Err(ServiceError::new(ErrorCode::UserNotFound)),
    };
    finish(&ctx, result)
}

async fn refresh_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Response<Body> {
    let ctx = RequestContext::new(method, uri, HashMap::new());
    let result = handlers::refresh_users(&ctx, state.store.clone(), &state.config).await;
    finish(&ctx, result)
}

async fn landing_handler(State(state): State<AppState>, method: Method, uri: Uri) -> Response<Body> {
    let ctx = RequestContext::new(method, uri, HashMap::new());

    // Unknown API paths are errors, not pages
    let result = if ctx.uri.path().starts_with("/api/") {
        Err(ServiceError::with_message(
            ErrorCode::ResourceNotFound,
            format!("no API route for {} {}", ctx.method, ctx.uri.path()),
        ))
    } else {
        handlers::html_landing(&ctx, &state.config).await
    };
    finish(&ctx, result)
}
