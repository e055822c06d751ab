//! roster-rs: paginated user directory service.
//!
//! Serves a paginated table of user records and per-user detail pages as
//! declarative UI descriptions. The navigation core lives in
//! [`pagination`] (which page buttons to show) and [`cursor`] (cyclic
//! previous/next links between records).
//!
//! # Example
//!
//! ```no_run
//! use roster_rs::{Config, RosterServer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let server = RosterServer::new(Config::default()).unwrap();
//!     server.run().await.unwrap();
//! }
//! ```

pub mod config;
pub mod context;
pub mod cursor;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod router;
pub mod server;
pub mod storage;

// Re-exports for convenience
pub use config::{Args, Config, DEFAULT_PAGE_SIZE, DEFAULT_PORT, MAX_VISIBLE_PAGES};
pub use cursor::{CursorEntry, CursorIndex};
pub use error::{ErrorCode, ServiceError, ServiceResult};
pub use pagination::{compute_window, generate_buttons, ButtonKind, PageWindow, PaginationButton};
pub use server::{RosterServer, RosterServerBuilder};
pub use storage::{generate_users, Dataset, MemoryUserStore, UserStore};
