//! WMATA client configuration

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Configuration for the WMATA API client
#[derive(Clone, Serialize, Deserialize)]
pub struct WmataConfig {
    /// API key sent as the `api_key` query parameter on every request
    #[serde(skip_serializing)]
    pub api_key: SecretString,

    /// Base URL of the API (default: <https://api.wmata.com>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (None leaves the HTTP client default)
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://api.wmata.com".to_string()
}

fn default_user_agent() -> String {
    format!("wmata-rs/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for WmataConfig {
    fn default() -> Self {
        Self {
            api_key: SecretString::from(String::new()),
            base_url: default_base_url(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl fmt::Debug for WmataConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WmataConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl WmataConfig {
    /// Create a configuration with the given API key and default settings
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            ..Default::default()
        }
    }

    /// Create a configuration suitable for testing against a local server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from("test-key".to_string()),
            base_url: base_url.into(),
            timeout_secs: Some(5),
            ..Default::default()
        }
    }

    /// Load configuration from an optional `wmata.toml` and the environment
    ///
    /// Environment variables use the `WMATA_` prefix, e.g. `WMATA_API_KEY`
    /// or `WMATA_BASE_URL`, and take precedence over the file.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or a value has the wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_layered(None, None)
    }

    /// Load configuration with an explicit environment and API key override
    ///
    /// `vars` replaces the process environment when given. `api_key` takes
    /// precedence over both the file and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or a value has the wrong type.
    pub fn load_layered(
        vars: Option<config::Map<String, String>>,
        api_key: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("base_url", default_base_url())?
            .add_source(config::File::with_name("wmata").required(false))
            .add_source(config::Environment::with_prefix("WMATA").source(vars))
            .set_override_option("api_key", api_key)?;

        builder.build()?.try_deserialize()
    }

    /// The API key as a plain string
    #[must_use]
    pub fn api_key_str(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Validate the configuration
    ///
    /// The API key itself is not checked; the upstream API rejects bad keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == Some(0) {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
