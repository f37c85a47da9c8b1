use crate::auth::AuthManager;
use crate::client::OpenAIConfig;
use crate::errors::{ConfigurationError, OpenAIError, OpenAIResult};
use async_trait::async_trait;
use http::header::{HeaderName, HeaderValue, AUTHORIZATION};
use http::HeaderMap;
use secrecy::{ExposeSecret, Secret};

const ORGANIZATION_HEADER: &str = "openai-organization";

/// Sends the API key as a bearer token, plus the organization header when set.
pub struct ApiKeyAuthManager {
    api_key: Secret<String>,
    organization_id: Option<String>,
}

impl ApiKeyAuthManager {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            organization_id: None,
        }
    }

    pub fn from_config(config: &OpenAIConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            organization_id: config.organization_id.clone(),
        }
    }
}

#[async_trait]
impl AuthManager for ApiKeyAuthManager {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> OpenAIResult<()> {
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", self.api_key.expose_secret()))
            .map_err(|_| {
                ConfigurationError::MissingApiKey(
                    "API key contains characters not allowed in a header".to_string(),
                )
            })?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        if let Some(org_id) = &self.organization_id {
            let value = HeaderValue::from_str(org_id)
                .map_err(|_| ConfigurationError::InvalidOrganizationId(org_id.clone()))?;
            headers.insert(HeaderName::from_static(ORGANIZATION_HEADER), value);
        }

        Ok(())
    }

    fn validate(&self) -> OpenAIResult<()> {
        if self.api_key.expose_secret().is_empty() {
            return Err(OpenAIError::Configuration(ConfigurationError::MissingApiKey(
                "API key is empty".to_string(),
            )));
        }
        Ok(())
    }
}
