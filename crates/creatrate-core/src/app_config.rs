use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Settings for the outbound brand lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandLookupConfig {
    /// Hard bound on a single lookup, connect through body.
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Search endpoint; the query string is appended as `?q=...`.
    pub search_url: String,
}

impl Default for BrandLookupConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            user_agent: "creatrate/0.1 (brand-lookup)".to_string(),
            search_url: "https://www.google.com/search".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub brand_lookup: BrandLookupConfig,
}
