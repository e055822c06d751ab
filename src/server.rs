//! HTTP server for the roster service.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::error::ServiceResult;
use crate::router::{create_router, AppState};
use crate::storage::{generate_users, MemoryUserStore, UserStore};

/// Roster server.
pub struct RosterServer {
    config: Arc<Config>,
    store: Arc<dyn UserStore>,
}

impl RosterServer {
    /// Creates a server over freshly generated users.
    pub fn new(config: Config) -> ServiceResult<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let users = generate_users(config.user_count, &mut rng);
        let store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new(users)?);

        Ok(Self::with_store(config, store))
    }

    /// Creates a server over a custom store.
    pub fn with_store(config: Config, store: Arc<dyn UserStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Binds the configured address and runs the server.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr: SocketAddr = self.config.bind_address().parse()?;
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener).await
    }

    /// Runs the server on an already bound listener.
    pub async fn serve(
        self,
        listener: TcpListener,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let state = AppState {
            config: self.config.clone(),
            store: self.store.clone(),
        };

        let app = create_router(state)
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .layer(TraceLayer::new_for_http());

        info!(
            "Roster service is listening on http://{} with {} users",
            listener.local_addr()?,
            self.store.count().await
        );

        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Returns the bind address.
    pub fn bind_address(&self) -> String {
        self.config.bind_address()
    }

    /// Returns the base URL of the service.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.bind_address())
    }
}

/// Builder for creating a roster server.
pub struct RosterServerBuilder {
    config: Config,
    store: Option<Arc<dyn UserStore>>,
}

impl RosterServerBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            store: None,
        }
    }

    /// Sets the configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Sets the host address.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Sets the port.
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Sets the number of generated users.
    pub fn users(mut self, count: u64) -> Self {
        self.config.user_count = count;
        self
    }

    /// Sets the generation seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Sets the pagination window size.
    pub fn max_visible_pages(mut self, pages: u64) -> Self {
        self.config.max_visible_pages = pages;
        self
    }

    /// Sets the user store.
    pub fn store(mut self, store: Arc<dyn UserStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Builds the server.
    pub fn build(self) -> ServiceResult<RosterServer> {
        match self.store {
            Some(store) => Ok(RosterServer::with_store(self.config, store)),
            None => RosterServer::new(self.config),
        }
    }
}

impl Default for RosterServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
