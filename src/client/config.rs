use crate::errors::{ConfigurationError, OpenAIError, OpenAIResult};
use secrecy::{ExposeSecret, Secret};
use std::fmt;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Clone)]
pub struct OpenAIConfig {
    pub api_key: Secret<String>,
    pub base_url: Url,
    pub organization_id: Option<String>,
    pub timeout: Duration,
    pub proxy: Option<Url>,
    pub user_agent: String,
}

impl OpenAIConfig {
    /// Creates a new OpenAIConfig with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: default_base_url(),
            organization_id: None,
            timeout: default_timeout(),
            proxy: None,
            user_agent: default_user_agent(),
        }
    }

    /// Creates a new OpenAIConfig from environment variables
    ///
    /// Reads the following environment variables:
    /// - OPENAI_API_KEY (required)
    /// - OPENAI_BASE_URL (optional, defaults to https://api.openai.com/v1)
    /// - OPENAI_ORGANIZATION_ID (optional)
    /// - OPENAI_TIMEOUT_SECS (optional)
    pub fn from_env() -> OpenAIResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            ConfigurationError::MissingApiKey(
                "OPENAI_API_KEY environment variable not found".to_string(),
            )
        })?;

        let mut config = Self::new(api_key);

        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            config.base_url = parse_base_url(&base_url)?;
        }

        if let Ok(org_id) = std::env::var("OPENAI_ORGANIZATION_ID") {
            config.organization_id = Some(org_id);
        }

        if let Ok(timeout) = std::env::var("OPENAI_TIMEOUT_SECS") {
            let secs = timeout.parse::<u64>().map_err(|e| {
                ConfigurationError::InvalidTimeout(format!("Invalid OPENAI_TIMEOUT_SECS: {}", e))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> OpenAIResult<()> {
        if self.api_key.expose_secret().is_empty() {
            return Err(OpenAIError::Configuration(ConfigurationError::MissingApiKey(
                "API key is empty".to_string(),
            )));
        }

        if self.timeout.is_zero() {
            return Err(OpenAIError::Configuration(ConfigurationError::InvalidTimeout(
                "Timeout must be greater than 0".to_string(),
            )));
        }

        if self.base_url.cannot_be_a_base() {
            return Err(OpenAIError::Configuration(ConfigurationError::InvalidBaseUrl(
                self.base_url.to_string(),
            )));
        }

        Ok(())
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Parses and sets the base URL.
    pub fn with_base_url_str(mut self, base_url: &str) -> OpenAIResult<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn with_organization_id(mut self, org_id: impl Into<String>) -> Self {
        self.organization_id = Some(org_id.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_proxy(mut self, proxy: Url) -> Self {
        self.proxy = Some(proxy);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl fmt::Debug for OpenAIConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAIConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url.as_str())
            .field("organization_id", &self.organization_id)
            .field("timeout", &self.timeout)
            .field("proxy", &self.proxy.as_ref().map(Url::as_str))
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn parse_base_url(raw: &str) -> OpenAIResult<Url> {
    Url::parse(raw).map_err(|e| {
        OpenAIError::Configuration(ConfigurationError::InvalidBaseUrl(format!(
            "{}: {}",
            raw, e
        )))
    })
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).unwrap_or_else(|_| unreachable!("default base URL is valid"))
}

fn default_timeout() -> Duration {
    Duration::from_secs(60)
}

fn default_user_agent() -> String {
    format!("integrations-openai-fine-tunes/{}", env!("CARGO_PKG_VERSION"))
}
