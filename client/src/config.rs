use crate::{Error, Result};

/// Production API address.
pub const DEFAULT_BASE_URL: &str = "https://api.supadata.ai/v1";

/// Client identification sent with every request, fixed at build time.
pub const USER_AGENT: &str = concat!("supadata-rust/", env!("CARGO_PKG_VERSION"));

pub const ENV_API_KEY: &str = "SUPADATA_API_KEY";
pub const ENV_BASE_URL: &str = "SUPADATA_BASE_URL";

/// Connection settings for a [`crate::Client`].
#[derive(Clone)]
pub struct Config {
    api_key: String,
    base_url: String,
    user_agent: String,
}

impl Config {
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Read the API key and optional base URL from the environment.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(ENV_API_KEY).unwrap_or_default();
        if api_key.trim().is_empty() {
            return Err(Error::invalid_request(
                "Missing API key",
                format!("Set the {} environment variable.", ENV_API_KEY),
            ));
        }

        let config = Self::new(api_key);
        match std::env::var(ENV_BASE_URL) {
            Ok(base_url) if !base_url.trim().is_empty() => Ok(config.with_base_url(base_url)),
            _ => Ok(config),
        }
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

// Keeps the key out of debug output and logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("key");
        assert_eq!(config.api_key(), "key");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert!(config.user_agent().starts_with("supadata-rust/"));
        assert!(config.user_agent().len() > "supadata-rust/".len());
    }

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let config = Config::new("key").with_base_url("http://localhost:8080/v1/");
        assert_eq!(config.base_url(), "http://localhost:8080/v1");
    }

    // The only test touching the process environment; every case runs here
    // in sequence so no other test observes the changes.
    #[test]
    fn test_from_env() {
        std::env::remove_var(ENV_API_KEY);
        std::env::remove_var(ENV_BASE_URL);
        let err = Config::from_env().unwrap_err();
        assert_eq!(err.kind, crate::ErrorKind::InvalidRequest);
        assert_eq!(err.message, "Missing API key");

        std::env::set_var(ENV_API_KEY, "   ");
        let err = Config::from_env().unwrap_err();
        assert_eq!(err.kind, crate::ErrorKind::InvalidRequest);
        assert_eq!(err.message, "Missing API key");

        std::env::set_var(ENV_API_KEY, "env-key");
        let config = Config::from_env().unwrap();
        assert_eq!(config.api_key(), "env-key");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);

        std::env::set_var(ENV_BASE_URL, " ");
        assert_eq!(Config::from_env().unwrap().base_url(), DEFAULT_BASE_URL);

        std::env::set_var(ENV_BASE_URL, "http://localhost:8080/v1/");
        assert_eq!(
            Config::from_env().unwrap().base_url(),
            "http://localhost:8080/v1"
        );

        std::env::remove_var(ENV_API_KEY);
        std::env::remove_var(ENV_BASE_URL);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config::new("super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
