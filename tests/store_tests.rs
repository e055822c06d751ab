//! Listing behavior against a custom user store.

mod common;

use async_trait::async_trait;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::net::TcpListener;

use common::page_components;
use roster_rs::{
    generate_users, CursorEntry, MemoryUserStore, RosterServerBuilder, ServiceResult, UserStore,
};

/// Store whose `count` disagrees with the rows it serves, as happens when a
/// refresh lands between two separate reads.
struct StaleCountStore {
    inner: MemoryUserStore,
    stale_count: u64,
}

#[async_trait]
impl UserStore for StaleCountStore {
    async fn count(&self) -> u64 {
        self.stale_count
    }

    async fn page(&self, offset: u64, limit: u64) -> (Vec<roster_rs::models::UserDetail>, u64) {
        self.inner.page(offset, limit).await
    }

    async fn profile(&self, id: u64) -> ServiceResult<(roster_rs::models::UserDetail, CursorEntry)> {
        self.inner.profile(id).await
    }

    async fn refresh(&self, users: Vec<roster_rs::models::UserDetail>) -> ServiceResult<()> {
        self.inner.refresh(users).await
    }
}

async fn start(store: Arc<dyn UserStore>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let server = RosterServerBuilder::new().store(store).build().unwrap();
    tokio::spawn(async move {
        server.serve(listener).await.unwrap();
    });
    base_url
}

#[tokio::test]
async fn test_limit_checked_against_rows_served() {
    let users = generate_users(100, &mut rand::rngs::StdRng::seed_from_u64(5));
    let store = StaleCountStore {
        inner: MemoryUserStore::new(users).unwrap(),
        stale_count: 1000,
    };
    let base_url = start(Arc::new(store)).await;

    let response = reqwest::get(format!("{}/api/users?limit=500", base_url))
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    assert_eq!(
        response.headers()["x-error-code"],
        "OutOfRangeQueryParameterValue"
    );

    let response = reqwest::get(format!("{}/api/users?limit=100", base_url))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        page_components(&body)[2]["text"],
        "Displaying users 1 to 100 of 100"
    );
}
