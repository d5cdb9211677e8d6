use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{Error, Result};

/// Base URL of the Great Circle Mapper API on RapidAPI.
pub const DEFAULT_BASE_URL: &str = "https://greatcirclemapper.p.rapidapi.com";

/// Environment variable holding the RapidAPI key.
pub const ENV_API_KEY: &str = "CIRCLEMAPPER_API_KEY";

/// Environment variable overriding the base URL (proxies, test servers).
pub const ENV_BASE_URL: &str = "CIRCLEMAPPER_BASE_URL";

/// Config file consulted by [`Config::load`] when the environment is not set.
pub const CONFIG_FILE: &str = "circlemapper.toml";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for a [`Client`](crate::Client).
///
/// Only the API key is required; the base URL and the per-request timeout
/// default to the live service and 10 seconds.
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// RapidAPI key, sent as `X-RapidAPI-Key` on every request.
    pub api_key: String,
    /// Scheme and host the request paths are joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Config {
    /// Settings for the live service with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Reads the key from `CIRCLEMAPPER_API_KEY`, honoring an optional
    /// `CIRCLEMAPPER_BASE_URL` override.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(ENV_API_KEY)
            .map_err(|_| Error::Config(format!("{} is not set", ENV_API_KEY)))?;
        let mut config = Self::new(api_key);
        if let Ok(base_url) = env::var(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        Ok(config)
    }

    /// Parses a TOML config file. Only `api_key` is required; `base_url`
    /// and `timeout_secs` fall back to their defaults when omitted.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Resolves settings from the environment first, then from
    /// `circlemapper.toml` in the working directory.
    pub fn load() -> Result<Self> {
        match Self::from_env() {
            Ok(config) => {
                info!("loaded configuration from the environment");
                Ok(config)
            }
            Err(env_err) if Path::new(CONFIG_FILE).exists() => {
                warn!("{}; falling back to {}", env_err, CONFIG_FILE);
                Self::from_file(CONFIG_FILE)
            }
            Err(env_err) => Err(env_err),
        }
    }
}
