//! HTML shell serving the prebuilt frontend.

use axum::{
    body::Body,
    http::{HeaderValue, Response, StatusCode},
};

use crate::config::Config;
use crate::context::RequestContext;
use crate::error::ServiceResult;

use super::{build_response, common_headers};

/// GET /{path} - Landing page; the frontend then fetches `/api{path}`.
pub async fn html_landing(
    ctx: &RequestContext,
    config: &Config,
) -> ServiceResult<Response<Body>> {
    let mut headers = common_headers(&ctx.request_id);
    headers.insert(
        "Content-Type",
        HeaderValue::from_static("text/html; charset=utf-8"),
    );

    Ok(build_response(
        StatusCode::OK,
        headers,
        Body::from(render_shell(&config.title, &config.assets_url)),
    ))
}

/// Renders the HTML document that bootstraps the frontend bundle.
pub fn render_shell(title: &str, assets_url: &str) -> String {
    let assets_url = assets_url.trim_end_matches('/');
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{title}</title>
    <script type="module" crossorigin src="{assets}/index.js"></script>
    <link rel="stylesheet" crossorigin href="{assets}/index.css" />
  </head>
  <body>
    <div id="root"></div>
  </body>
</html>
"#,
        title = html_escape(title),
        assets = html_escape(assets_url),
    )
}

/// Escapes special HTML characters in a string.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
