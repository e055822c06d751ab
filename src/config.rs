//! Server configuration.

use clap::Parser;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default number of generated users.
pub const DEFAULT_USER_COUNT: u64 = 100;

/// Default `limit` for the users listing.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Maximum number of page buttons shown before truncating with ellipses.
pub const MAX_VISIBLE_PAGES: u64 = 5;

/// Default location of the prebuilt frontend bundle.
pub const DEFAULT_ASSETS_URL: &str =
    "https://cdn.jsdelivr.net/npm/@pydantic/fastui-prebuilt@0.0.23/dist/assets";

/// Command-line arguments for the server.
#[derive(Parser, Debug, Clone)]
#[command(name = "roster-rs")]
#[command(about = "Paginated user directory service")]
#[command(version)]
pub struct Args {
    /// Host address to bind to.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, short = 'p', default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Number of user records to generate.
    #[arg(long, default_value_t = DEFAULT_USER_COUNT)]
    pub users: u64,

    /// Seed for record generation (random when omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Default page size for the listing.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: u64,

    /// Number of page buttons shown around the current page.
    #[arg(long, default_value_t = MAX_VISIBLE_PAGES, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_visible_pages: u64,

    /// Title of the HTML landing page.
    #[arg(long, default_value = "Roster")]
    pub title: String,

    /// Base URL of the frontend bundle (index.js / index.css).
    #[arg(long, default_value = DEFAULT_ASSETS_URL)]
    pub assets_url: String,

    /// Enable debug logging.
    #[arg(long, short = 'd')]
    pub debug: bool,

    /// Enable silent mode (minimal logging).
    #[arg(long, short = 's')]
    pub silent: bool,
}

/// Server configuration derived from command-line arguments.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Number of user records to generate.
    pub user_count: u64,
    /// Seed for record generation.
    pub seed: Option<u64>,
    /// Default page size for the listing.
    pub page_size: u64,
    /// Window size for the pagination buttons.
    pub max_visible_pages: u64,
    /// Title of the HTML landing page.
    pub title: String,
    /// Base URL of the frontend bundle.
    pub assets_url: String,
    /// Enable debug logging.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            user_count: DEFAULT_USER_COUNT,
            seed: None,
            page_size: DEFAULT_PAGE_SIZE,
            max_visible_pages: MAX_VISIBLE_PAGES,
            title: "Roster".to_string(),
            assets_url: DEFAULT_ASSETS_URL.to_string(),
            debug: false,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            user_count: args.users,
            seed: args.seed,
            page_size: args.page_size,
            max_visible_pages: args.max_visible_pages,
            title: args.title,
            assets_url: args.assets_url,
            debug: args.debug,
        }
    }
}

impl Config {
    /// Returns the bind address for the service.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
