mod api_key;

pub use api_key::ApiKeyAuthManager;

use crate::errors::OpenAIResult;
use async_trait::async_trait;
use http::HeaderMap;

/// Trait for managing authentication in requests
#[async_trait]
pub trait AuthManager: Send + Sync {
    /// Applies authentication headers to the request
    async fn apply_auth(&self, headers: &mut HeaderMap) -> OpenAIResult<()>;

    /// Validates the authentication configuration
    fn validate(&self) -> OpenAIResult<()>;
}
