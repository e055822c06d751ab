//! Common test utilities.

use std::sync::Arc;
use tokio::net::TcpListener;

use roster_rs::{generate_users, MemoryUserStore, RosterServerBuilder, UserStore};

/// Test server wrapper.
pub struct TestServer {
    pub base_url: String,
    pub store: Arc<MemoryUserStore>,
}

impl TestServer {
    /// Starts a server with `users` seeded records and the default window.
    pub async fn start(users: u64) -> Self {
        Self::start_with_window(users, roster_rs::MAX_VISIBLE_PAGES).await
    }

    /// Starts a server on a random port with a custom window size.
    pub async fn start_with_window(users: u64, window: u64) -> Self {
        use rand::SeedableRng;

        let records = generate_users(users, &mut rand::rngs::StdRng::seed_from_u64(11));
        let store = Arc::new(MemoryUserStore::new(records).unwrap());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let server = RosterServerBuilder::new()
            .port(port)
            // Record count regenerated by POST /api/refresh
            .users(users)
            .max_visible_pages(window)
            .store(store.clone() as Arc<dyn UserStore>)
            .build()
            .unwrap();

        // Start server in background
        tokio::spawn(async move {
            server.serve(listener).await.unwrap();
        });

        Self { base_url, store }
    }

    /// Returns the URL of an API path.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }
}

/// Returns the components of the single page in a response body.
pub fn page_components(body: &serde_json::Value) -> &Vec<serde_json::Value> {
    let pages = body.as_array().expect("response is a list of pages");
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0]["type"], "Page");
    pages[0]["components"].as_array().unwrap()
}
