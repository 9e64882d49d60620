use std::path::PathBuf;

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

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub sheet_id: String,
    /// `None` when the key is absent or still an unsubstituted placeholder.
    pub google_api_key: Option<String>,
    pub sources_path: PathBuf,
    pub sheet_range: String,
    /// Either an `http(s)://` URL or a filesystem path to `url-mapping.json`.
    pub mapping_location: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
}

impl AppConfig {
    /// Returns `true` when the mapping table should be fetched over HTTP
    /// rather than read from disk.
    #[must_use]
    pub fn mapping_is_remote(&self) -> bool {
        self.mapping_location.starts_with("http://") || self.mapping_location.starts_with("https://")
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("sheet_id", &self.sheet_id)
            .field(
                "google_api_key",
                &self.google_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("sources_path", &self.sources_path)
            .field("sheet_range", &self.sheet_range)
            .field("mapping_location", &self.mapping_location)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_secs", &self.retry_backoff_base_secs)
            .finish()
    }
}
