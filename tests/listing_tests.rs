//! Users listing tests.

mod common;

use common::{page_components, TestServer};
use serde_json::Value;

async fn get_json(url: &str) -> (u16, Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

fn pagination(components: &[Value]) -> Vec<(String, String, String)> {
    let div = components
        .iter()
        .find(|c| c["type"] == "Div" && c["className"] == "pagination")
        .expect("pagination div");
    div["components"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| {
            (
                b["text"].as_str().unwrap().to_string(),
                b["onClick"]["url"].as_str().unwrap().to_string(),
                b["className"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

#[tokio::test]
async fn test_first_page_listing() {
    let server = TestServer::start(100).await;
    let (status, body) = get_json(&server.api_url("/users")).await;
    assert_eq!(status, 200);

    let components = page_components(&body);
    assert_eq!(components[0]["type"], "Heading");
    assert_eq!(components[0]["text"], "Users");

    let table = &components[1];
    assert_eq!(table["type"], "Table");
    let ids: Vec<u64> = table["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, (0..10).collect::<Vec<_>>());

    let name_column = table["columns"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["field"] == "name")
        .unwrap();
    assert_eq!(name_column["onClick"]["url"], "/users/{id}/");

    assert_eq!(components[2]["text"], "Displaying users 1 to 10 of 100");

    let buttons = pagination(components);
    let labels: Vec<&str> = buttons.iter().map(|b| b.0.as_str()).collect();
    assert_eq!(labels, vec![" 1", " 2", " 3", " 4", " 5", "...", "10"]);
    assert_eq!(buttons[5].1, "/?offset=60&limit=10");
    assert_eq!(buttons[5].2, "ellipsis-button");
    assert_eq!(buttons[6].1, "/?offset=90&limit=10");
    assert_eq!(buttons[6].2, "page-button");
}

#[tokio::test]
async fn test_middle_page_listing() {
    let server = TestServer::start(100).await;
    let (status, body) = get_json(&server.api_url("/users?offset=40&limit=10")).await;
    assert_eq!(status, 200);

    let components = page_components(&body);
    assert_eq!(components[2]["text"], "Displaying users 41 to 50 of 100");

    let labels: Vec<String> = pagination(components).into_iter().map(|b| b.0).collect();
    assert_eq!(
        labels,
        vec![" 1", "...", " 3", " 4", " 5", " 6", " 7", "...", "10"]
    );
}

#[tokio::test]
async fn test_last_partial_page() {
    let server = TestServer::start(23).await;
    let (status, body) = get_json(&server.api_url("/users?offset=20&limit=10")).await;
    assert_eq!(status, 200);

    let components = page_components(&body);
    assert_eq!(components[1]["data"].as_array().unwrap().len(), 3);
    assert_eq!(components[2]["text"], "Displaying users 21 to 23 of 23");

    let labels: Vec<String> = pagination(components).into_iter().map(|b| b.0).collect();
    assert_eq!(labels, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_small_set_single_button() {
    let server = TestServer::start(3).await;
    let (status, body) = get_json(&server.api_url("/users")).await;
    assert_eq!(status, 200);

    let buttons = pagination(page_components(&body));
    assert_eq!(buttons.len(), 1);
    assert_eq!(buttons[0].0, "1");
    assert_eq!(buttons[0].1, "/?offset=0&limit=10");
}

#[tokio::test]
async fn test_empty_set_has_no_buttons() {
    let server = TestServer::start(0).await;
    let (status, body) = get_json(&server.api_url("/users")).await;
    assert_eq!(status, 200);

    let components = page_components(&body);
    assert_eq!(components[2]["text"], "No users to display");
    assert!(pagination(components).is_empty());
}

#[tokio::test]
async fn test_custom_window_size() {
    let server = TestServer::start_with_window(100, 3).await;
    let (_, body) = get_json(&server.api_url("/users?offset=50&limit=10")).await;

    let labels: Vec<String> = pagination(page_components(&body))
        .into_iter()
        .map(|b| b.0)
        .collect();
    assert_eq!(labels, vec![" 1", "...", " 5", " 6", " 7", "...", "10"]);
}

#[tokio::test]
async fn test_negative_offset_rejected() {
    let server = TestServer::start(100).await;
    let (status, body) = get_json(&server.api_url("/users?offset=-10")).await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], "InvalidArgument");
    assert!(body["requestId"].is_string());
}

#[tokio::test]
async fn test_limit_out_of_range_rejected() {
    let server = TestServer::start(100).await;

    let (status, body) = get_json(&server.api_url("/users?limit=0")).await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], "OutOfRangeQueryParameterValue");

    let (status, _) = get_json(&server.api_url("/users?limit=101")).await;
    assert_eq!(status, 400);

    let (status, body) = get_json(&server.api_url("/users?limit=abc")).await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], "InvalidQueryParameterValue");
}

#[tokio::test]
async fn test_unknown_api_path_is_json_404() {
    let server = TestServer::start(10).await;
    let response = reqwest::get(server.api_url("/nothing/here")).await.unwrap();
    assert_eq!(response.status(), 404);
    assert_eq!(response.headers()["x-error-code"], "ResourceNotFound");
}

#[tokio::test]
async fn test_landing_page_served_for_any_path() {
    let server = TestServer::start(10).await;
    for path in ["/", "/users/3/", "/?offset=20&limit=10"] {
        let response = reqwest::get(format!("{}{}", server.base_url, path))
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        assert!(response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        let html = response.text().await.unwrap();
        assert!(html.contains(r#"<div id="root"></div>"#));
    }
}

#[tokio::test]
async fn test_api_root_serves_listing() {
    let server = TestServer::start(100).await;
    let (status, body) = get_json(&server.api_url("/")).await;
    assert_eq!(status, 200);
    assert_eq!(page_components(&body)[2]["text"], "Displaying users 1 to 10 of 100");
}

#[tokio::test]
async fn test_pagination_buttons_lead_to_listings() {
    let server = TestServer::start(100).await;
    let (_, body) = get_json(&server.api_url("/users?offset=40&limit=10")).await;

    for (label, url, _) in pagination(page_components(&body)) {
        let (status, body) = get_json(&server.api_url(&url)).await;
        assert_eq!(status, 200, "button {:?} -> {}", label, url);
        assert_eq!(page_components(&body)[1]["type"], "Table");
    }

    // "7" jumps to offset 60
    let (_, body) = get_json(&server.api_url("/?offset=60&limit=10")).await;
    assert_eq!(
        page_components(&body)[2]["text"],
        "Displaying users 61 to 70 of 100"
    );
}

#[tokio::test]
async fn test_offset_past_end_shows_empty_message() {
    let server = TestServer::start(100).await;
    let (status, body) = get_json(&server.api_url("/users?offset=500&limit=10")).await;
    assert_eq!(status, 200);

    let components = page_components(&body);
    assert!(components[1]["data"].as_array().unwrap().is_empty());
    assert_eq!(components[2]["text"], "No users to display");
    // Buttons still lead back into range
    assert!(!pagination(components).is_empty());
}
