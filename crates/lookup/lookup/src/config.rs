//! Lookup configuration: trait and env-based implementation.

use anyhow::Result;
use std::env;

pub const DEFAULT_GEODB_BASE_URL: &str = "https://wft-geo-db.p.rapidapi.com";
pub const DEFAULT_GEODB_API_HOST: &str = "wft-geo-db.p.rapidapi.com";
pub const DEFAULT_TRIVIA_BASE_URL: &str = "https://opentdb.com";
pub const DEFAULT_WIKIPEDIA_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1";
pub const DEFAULT_DUCKDUCKGO_BASE_URL: &str = "https://api.duckduckgo.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = "healthbot/0.1";

/// Lookup service configuration interface.
pub trait LookupConfig: Send + Sync {
    /// RapidAPI key for GeoDB. Empty means geocoding is not configured.
    fn geodb_api_key(&self) -> &str;
    fn geodb_base_url(&self) -> &str;
    /// Value of the `X-RapidAPI-Host` header.
    fn geodb_api_host(&self) -> &str;
    fn trivia_base_url(&self) -> &str;
    fn wikipedia_base_url(&self) -> &str;
    fn duckduckgo_base_url(&self) -> &str;
    /// Per-request timeout in seconds; applies to every source.
    fn timeout_secs(&self) -> u64;
    fn user_agent(&self) -> &str;
}

/// Lookup config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvLookupConfig {
    pub geodb_api_key: String,
    pub geodb_base_url: String,
    pub geodb_api_host: String,
    pub trivia_base_url: String,
    pub wikipedia_base_url: String,
    pub duckduckgo_base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for EnvLookupConfig {
    fn default() -> Self {
        Self {
            geodb_api_key: String::new(),
            geodb_base_url: DEFAULT_GEODB_BASE_URL.to_string(),
            geodb_api_host: DEFAULT_GEODB_API_HOST.to_string(),
            trivia_base_url: DEFAULT_TRIVIA_BASE_URL.to_string(),
            wikipedia_base_url: DEFAULT_WIKIPEDIA_BASE_URL.to_string(),
            duckduckgo_base_url: DEFAULT_DUCKDUCKGO_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl LookupConfig for EnvLookupConfig {
    fn geodb_api_key(&self) -> &str {
        &self.geodb_api_key
    }
    fn geodb_base_url(&self) -> &str {
        &self.geodb_base_url
    }
    fn geodb_api_host(&self) -> &str {
        &self.geodb_api_host
    }
    fn trivia_base_url(&self) -> &str {
        &self.trivia_base_url
    }
    fn wikipedia_base_url(&self) -> &str {
        &self.wikipedia_base_url
    }
    fn duckduckgo_base_url(&self) -> &str {
        &self.duckduckgo_base_url
    }
    fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl EnvLookupConfig {
    /// Load from environment variables.
    pub fn from_env() -> Result<Self> {
        let geodb_api_key = env::var("GEODB_API_KEY")
            .or_else(|_| env::var("RAPIDAPI_KEY"))
            .unwrap_or_default();
        let timeout_secs = match env::var("LOOKUP_TIMEOUT_SECS") {
            Ok(s) => s.trim().parse().map_err(|_| {
                anyhow::anyhow!("LOOKUP_TIMEOUT_SECS must be a whole number of seconds, got {:?}", s)
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        Ok(Self {
            geodb_api_key,
            geodb_base_url: env_or("GEODB_BASE_URL", DEFAULT_GEODB_BASE_URL),
            geodb_api_host: env_or("GEODB_API_HOST", DEFAULT_GEODB_API_HOST),
            trivia_base_url: env_or("TRIVIA_BASE_URL", DEFAULT_TRIVIA_BASE_URL),
            wikipedia_base_url: env_or("WIKIPEDIA_BASE_URL", DEFAULT_WIKIPEDIA_BASE_URL),
            duckduckgo_base_url: env_or("DUCKDUCKGO_BASE_URL", DEFAULT_DUCKDUCKGO_BASE_URL),
            timeout_secs,
            user_agent: env_or("LOOKUP_USER_AGENT", DEFAULT_USER_AGENT),
        })
    }

    /// Validate config (base URLs must parse, timeout must be non-zero).
    pub fn validate(&self) -> Result<()> {
        let urls = [
            ("GEODB_BASE_URL", &self.geodb_base_url),
            ("TRIVIA_BASE_URL", &self.trivia_base_url),
            ("WIKIPEDIA_BASE_URL", &self.wikipedia_base_url),
            ("DUCKDUCKGO_BASE_URL", &self.duckduckgo_base_url),
        ];
        for (key, url) in urls {
            if reqwest::Url::parse(url).is_err() {
                anyhow::bail!("{} is set but not a valid URL: {}", key, url);
            }
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("LOOKUP_TIMEOUT_SECS must be greater than zero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 9] = [
        "GEODB_API_KEY",
        "RAPIDAPI_KEY",
        "GEODB_BASE_URL",
        "GEODB_API_HOST",
        "TRIVIA_BASE_URL",
        "WIKIPEDIA_BASE_URL",
        "DUCKDUCKGO_BASE_URL",
        "LOOKUP_TIMEOUT_SECS",
        "LOOKUP_USER_AGENT",
    ];

    fn clear_env() {
        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = EnvLookupConfig::from_env().unwrap();

        assert!(config.geodb_api_key().is_empty());
        assert_eq!(config.geodb_base_url(), DEFAULT_GEODB_BASE_URL);
        assert_eq!(config.geodb_api_host(), DEFAULT_GEODB_API_HOST);
        assert_eq!(config.trivia_base_url(), "https://opentdb.com");
        assert_eq!(config.wikipedia_base_url(), "https://en.wikipedia.org/api/rest_v1");
        assert_eq!(config.duckduckgo_base_url(), "https://api.duckduckgo.com");
        assert_eq!(config.timeout_secs(), 10);
        assert_eq!(config.user_agent(), "healthbot/0.1");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_custom_values() {
        clear_env();
        env::set_var("GEODB_API_KEY", "geo-key");
        env::set_var("WIKIPEDIA_BASE_URL", "http://127.0.0.1:9000/wiki");
        env::set_var("LOOKUP_TIMEOUT_SECS", "3");

        let config = EnvLookupConfig::from_env().unwrap();
        clear_env();

        assert_eq!(config.geodb_api_key(), "geo-key");
        assert_eq!(config.wikipedia_base_url(), "http://127.0.0.1:9000/wiki");
        assert_eq!(config.timeout_secs(), 3);
    }

    #[test]
    #[serial]
    fn test_geodb_key_falls_back_to_rapidapi_key() {
        clear_env();
        env::set_var("RAPIDAPI_KEY", "rapid-key");

        let config = EnvLookupConfig::from_env().unwrap();
        clear_env();

        assert_eq!(config.geodb_api_key(), "rapid-key");
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_is_rejected() {
        clear_env();
        env::set_var("LOOKUP_TIMEOUT_SECS", "soon");

        let result = EnvLookupConfig::from_env();
        clear_env();

        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_url_and_zero_timeout() {
        let bad_url = EnvLookupConfig {
            trivia_base_url: "not a url".to_string(),
            ..EnvLookupConfig::default()
        };
        assert!(bad_url.validate().is_err());

        let zero_timeout = EnvLookupConfig {
            timeout_secs: 0,
            ..EnvLookupConfig::default()
        };
        assert!(zero_timeout.validate().is_err());
    }
}
