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

/// Application configuration, loaded once at startup from environment
/// variables (see [`crate::config::load_app_config`]).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the directory API, e.g. `https://api.example.org/v1`.
    pub api_endpoint: String,
    pub env: Environment,
    pub log_level: String,
    /// Route the page navigates to when a fetch fails.
    pub error_route: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}
