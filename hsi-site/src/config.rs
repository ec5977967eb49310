//! Site service configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Site service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Hosted data store base URL (env: STORE_URL)
    pub store_url: String,
    /// Public API key sent with every store request (env: STORE_ANON_KEY)
    pub store_anon_key: String,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Ok(Self {
            store_url: std::env::var("STORE_URL").map_err(|_| "STORE_URL must be set")?,
            store_anon_key: std::env::var("STORE_ANON_KEY")
                .map_err(|_| "STORE_ANON_KEY must be set")?,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        })
    }
}
