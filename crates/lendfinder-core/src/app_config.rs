use std::net::SocketAddr;
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
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Token for the places-search provider. Store search is disabled when unset.
    pub places_api_token: Option<String>,
    pub places_base_url: String,
    pub places_actor: String,
    pub places_timeout_secs: u64,
    /// Upper bound on stores returned by a single search.
    pub max_results: usize,
    pub user_agent: String,
    pub cities_path: PathBuf,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "places_api_token",
                &self.places_api_token.as_ref().map(|_| "[redacted]"),
            )
            .field("places_base_url", &self.places_base_url)
            .field("places_actor", &self.places_actor)
            .field("places_timeout_secs", &self.places_timeout_secs)
            .field("max_results", &self.max_results)
            .field("user_agent", &self.user_agent)
            .field("cities_path", &self.cities_path)
            .finish()
    }
}
