use std::net::SocketAddr;
use std::path::PathBuf;

/// Browser-like agent sent with URL fetches; some sites reject empty or
/// library-default agents.
pub const DEFAULT_FETCH_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

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

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub fetch_timeout_secs: u64,
    pub fetch_user_agent: String,
    /// Upload payloads above this are rejected by the transport layer.
    pub max_upload_bytes: usize,
    /// Where uploaded documents are spooled while being parsed.
    /// `None` means the system temp dir.
    pub upload_dir: Option<PathBuf>,
}
