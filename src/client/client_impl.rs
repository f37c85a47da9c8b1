use crate::auth::AuthManager;
use crate::client::{OpenAIClient, OpenAIConfig};
use crate::services::fine_tunes::{FineTuneService, FineTuneServiceImpl};
use crate::transport::{HttpTransport, RequestExecutor};
use std::sync::Arc;

pub struct OpenAIClientImpl {
    config: OpenAIConfig,
    fine_tunes_service: FineTuneServiceImpl,
}

impl OpenAIClientImpl {
    pub fn new(
        config: OpenAIConfig,
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
    ) -> Self {
        let executor = RequestExecutor::new(transport, auth_manager);

        Self {
            config,
            fine_tunes_service: FineTuneServiceImpl::new(executor),
        }
    }
}

impl OpenAIClient for OpenAIClientImpl {
    fn fine_tunes(&self) -> &dyn FineTuneService {
        &self.fine_tunes_service
    }

    fn config(&self) -> &OpenAIConfig {
        &self.config
    }
}
