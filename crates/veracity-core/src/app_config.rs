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

/// Result store connection and read settings.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    /// Rows returned by history reads.
    pub history_limit: i64,
}

/// Sentiment service credentials.
#[derive(Clone)]
pub struct LanguageConfig {
    pub endpoint: String,
    pub key: String,
    pub timeout_secs: u64,
}

/// Trusted-article search service credentials and query settings.
#[derive(Clone)]
pub struct SearchConfig {
    pub endpoint: String,
    pub key: String,
    pub index: String,
    pub top: u32,
    pub timeout_secs: u64,
}

/// Everything the server needs. Each service section can also be loaded on
/// its own, so provisioning commands only require their own credentials.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub http_timeout_secs: u64,
    pub extractor_user_agent: String,
    pub database: DatabaseConfig,
    pub language: LanguageConfig,
    pub search: SearchConfig,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"[redacted]")
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .field("history_limit", &self.history_limit)
            .finish()
    }
}

impl std::fmt::Debug for LanguageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageConfig")
            .field("endpoint", &self.endpoint)
            .field("key", &"[redacted]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl std::fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchConfig")
            .field("endpoint", &self.endpoint)
            .field("key", &"[redacted]")
            .field("index", &self.index)
            .field("top", &self.top)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
