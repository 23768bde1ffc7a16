use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Catalog base URL, also used to build `openLibraryUrl` links
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,

    /// Cover image base URL
    #[serde(default = "default_covers_url")]
    pub covers_url: String,

    /// Per-request timeout for outbound catalog calls
    #[serde(default = "default_catalog_timeout_secs")]
    pub catalog_timeout_secs: u64,

    /// Number of works requested from each catalog call
    #[serde(default = "default_catalog_fetch_limit")]
    pub catalog_fetch_limit: u32,

    /// User agent sent to the catalog
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_catalog_url() -> String {
    "https://openlibrary.org".to_string()
}

fn default_covers_url() -> String {
    "https://covers.openlibrary.org".to_string()
}

fn default_catalog_timeout_secs() -> u64 {
    10
}

fn default_catalog_fetch_limit() -> u32 {
    20
}

fn default_user_agent() -> String {
    concat!("book-recs-api/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_url: default_catalog_url(),
            covers_url: default_covers_url(),
            catalog_timeout_secs: default_catalog_timeout_secs(),
            catalog_fetch_limit: default_catalog_fetch_limit(),
            user_agent: default_user_agent(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
