//! User listing and profile handlers.

use axum::{
    body::Body,
    http::{Response, StatusCode},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use crate::config::Config;
use crate::context::{ListParams, RequestContext};
use crate::error::ServiceResult;
use crate::models::{display_lookups, Component};
use crate::pagination::generate_buttons;
use crate::storage::{generate_users, UserStore};

use super::{common_headers, json_response};

/// Detail page URL template; the frontend substitutes `{id}` per row.
pub const USER_URL_TEMPLATE: &str = "/users/{id}/";

/// Listing page URL; the frontend fetches it from `/api/`.
pub const LISTING_URL: &str = "/";

/// URL of a user's detail page.
pub fn user_url(id: u64) -> String {
    format!("/users/{}/", id)
}

/// GET /api/users - Table of users with pagination buttons.
pub async fn list_users(
    ctx: &RequestContext,
    store: Arc<dyn UserStore>,
    config: &Config,
) -> ServiceResult<Response<Body>> {
    let params = ListParams::from_context(ctx, config.page_size)?;

    // Validate against the total from the same read as the rows
    let (users, total) = store.page(params.offset, params.limit).await;
    params.check_limit(total)?;

    let buttons = generate_buttons(
        total,
        params.limit,
        params.offset,
        config.max_visible_pages,
    )?;
    debug!(
        "Listing users offset={} limit={} total={} buttons={}",
        params.offset,
        params.limit,
        total,
        buttons.len()
    );

    let summary = if users.is_empty() {
        "No users to display".to_string()
    } else {
        format!(
            "Displaying users {} to {} of {}",
            params.offset + 1,
            (params.offset + params.limit).min(total),
            total
        )
    };

    let page = Component::Page {
        components: vec![
            Component::heading("Users", 2),
            Component::Table {
                data: users,
                columns: display_lookups(&[("name", USER_URL_TEMPLATE)]),
            },
            Component::text(summary),
            Component::Div {
                components: buttons
                    .iter()
                    .map(|b| Component::pagination_button(b, params.limit))
                    .collect(),
                class_name: Some("pagination".to_string()),
            },
        ],
    };

    json_response(StatusCode::OK, common_headers(&ctx.request_id), &[page])
}

/// GET /api/users/{id}/ - Profile page with cyclic previous/next links.
pub async fn user_profile(
    ctx: &RequestContext,
    store: Arc<dyn UserStore>,
    user_id: u64,
) -> ServiceResult<Response<Body>> {
    let (user, cursor) = store.profile(user_id).await?;
    debug!(
        "Profile {} prev={} next={}",
        user_id, cursor.prev_id, cursor.next_id
    );

    let page = Component::Page {
        components: vec![
            Component::link_button("< Back to Users", LISTING_URL),
            Component::heading(user.name.clone(), 2),
            Component::Details { data: user },
            Component::link_button("<< Previous", user_url(cursor.prev_id)),
            Component::link_button("Next >>", user_url(cursor.next_id)),
        ],
    };

    json_response(StatusCode::OK, common_headers(&ctx.request_id), &[page])
}

/// POST /api/refresh - Regenerates the user records and swaps them in.
pub async fn refresh_users(
    ctx: &RequestContext,
    store: Arc<dyn UserStore>,
    config: &Config,
) -> ServiceResult<Response<Body>> {
    let users = generate_users(config.user_count, &mut StdRng::from_entropy());
    store.refresh(users).await?;

    let count = store.count().await;
    json_response(
        StatusCode::OK,
        common_headers(&ctx.request_id),
        &json!({ "count": count }),
    )
}
