use crate::auth::AuthManager;
use crate::errors::{NetworkError, OpenAIError, OpenAIResult};
use crate::transport::{HttpRequest, HttpTransport, ResponseParser};
use crate::types::RequestOptions;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Sends a request and decodes the JSON answer or surfaces the API error.
///
/// Shared by every endpoint wrapper so each one only states method, path,
/// body and response type. Holds no per-call state.
#[derive(Clone)]
pub struct RequestExecutor {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
}

impl RequestExecutor {
    pub fn new(transport: Arc<dyn HttpTransport>, auth_manager: Arc<dyn AuthManager>) -> Self {
        Self {
            transport,
            auth_manager,
        }
    }

    pub async fn execute<R>(&self, mut request: HttpRequest, options: &RequestOptions) -> OpenAIResult<R>
    where
        R: DeserializeOwned,
    {
        let context = request.context();

        if options.cancellation.as_ref().is_some_and(|t| t.is_cancelled()) {
            return Err(OpenAIError::transport(context, NetworkError::Cancelled));
        }

        self.auth_manager.apply_auth(&mut request.headers).await?;

        if let Some(headers) = &options.headers {
            for (name, value) in headers.iter() {
                request.headers.insert(name.clone(), value.clone());
            }
        }
        if options.timeout.is_some() {
            request.timeout = options.timeout;
        }

        debug!(%context, has_body = request.body.is_some(), "sending request");

        let response = match &options.cancellation {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        debug!(%context, "request cancelled by caller");
                        return Err(OpenAIError::transport(context, NetworkError::Cancelled));
                    }
                    response = self.transport.send(request) => response?,
                }
            }
            None => self.transport.send(request).await?,
        };

        ResponseParser::parse_response(&context, response)
    }
}
