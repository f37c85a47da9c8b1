use crate::auth::{ApiKeyAuthManager, AuthManager};
use crate::client::{OpenAIClient, OpenAIClientImpl, OpenAIConfig};
use crate::errors::{ConfigurationError, OpenAIError, OpenAIResult};
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;
use tracing::debug;

pub struct OpenAIClientBuilder {
    config: Option<OpenAIConfig>,
    transport: Option<Arc<dyn HttpTransport>>,
    auth_manager: Option<Arc<dyn AuthManager>>,
}

impl OpenAIClientBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            transport: None,
            auth_manager: None,
        }
    }

    pub fn with_config(mut self, config: OpenAIConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config = Some(OpenAIConfig::new(api_key));
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_auth_manager(mut self, auth_manager: Arc<dyn AuthManager>) -> Self {
        self.auth_manager = Some(auth_manager);
        self
    }

    pub fn build(self) -> OpenAIResult<Arc<dyn OpenAIClient>> {
        let config = self.config.ok_or_else(|| {
            OpenAIError::Configuration(ConfigurationError::MissingApiKey(
                "API key must be provided".to_string(),
            ))
        })?;
        config.validate()?;

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&config)?),
        };

        let auth_manager: Arc<dyn AuthManager> = match self.auth_manager {
            Some(auth_manager) => auth_manager,
            None => Arc::new(ApiKeyAuthManager::from_config(&config)),
        };
        auth_manager.validate()?;

        debug!(base_url = %config.base_url, timeout = ?config.timeout, "building OpenAI client");

        Ok(Arc::new(OpenAIClientImpl::new(config, transport, auth_manager)))
    }
}

impl Default for OpenAIClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
