use todo_core::pagination::DEFAULT_PAGE_SIZE;
use todo_store::seed::DEFAULT_SEED_TENANT;

/// Output format of the `fmt` tracing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Page size for list requests that do not pass `size` (default: `20`).
    pub default_page_size: usize,
    /// Load the demo items at startup (default: `true`).
    pub seed_demo_items: bool,
    /// Tenant that owns the demo items (default: `defaultTenant`).
    pub seed_tenant_id: String,
    /// Log output format (default: text).
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DEFAULT_PAGE_SIZE`    | `20`                       |
    /// | `SEED_DEMO_ITEMS`      | `true`                     |
    /// | `SEED_TENANT_ID`       | `defaultTenant`            |
    /// | `LOG_FORMAT`           | `text` (or `json`)         |
    ///
    /// Panics on malformed values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let host = var("HOST", "0.0.0.0");

        let port: u16 = var("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let default_page_size: usize = var("DEFAULT_PAGE_SIZE", &DEFAULT_PAGE_SIZE.to_string())
            .parse()
            .ok()
            .filter(|n| *n > 0)
            .expect("DEFAULT_PAGE_SIZE must be a positive integer");

        let seed_demo_items = parse_bool(&var("SEED_DEMO_ITEMS", "true"))
            .expect("SEED_DEMO_ITEMS must be true/false");

        let seed_tenant_id = var("SEED_TENANT_ID", DEFAULT_SEED_TENANT);

        let log_format = match var("LOG_FORMAT", "text").to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "text" | "pretty" => LogFormat::Text,
            other => panic!("LOG_FORMAT must be 'text' or 'json', got '{other}'"),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            default_page_size,
            seed_demo_items,
            seed_tenant_id,
            log_format,
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
