use crate::errors::{CallContext, ErrorMapper, OpenAIError, OpenAIResult};
use crate::transport::HttpResponse;
use serde::de::DeserializeOwned;
use tracing::warn;

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes a 2xx body into `T`; anything else becomes [`OpenAIError::Api`].
    pub fn parse_response<T: DeserializeOwned>(
        context: &CallContext,
        response: HttpResponse,
    ) -> OpenAIResult<T> {
        if response.is_success() {
            Self::parse_json(context, &response.body)
        } else {
            let error = ErrorMapper::from_response(
                context.clone(),
                response.status,
                &response.headers,
                &response.body,
            );
            warn!(%context, status = response.status, error = %error, "API request failed");
            Err(error)
        }
    }

    pub fn parse_json<T: DeserializeOwned>(context: &CallContext, data: &[u8]) -> OpenAIResult<T> {
        serde_json::from_slice(data).map_err(|e| OpenAIError::Deserialization {
            context: context.clone(),
            message: format!("{}. Body: {}", e, String::from_utf8_lossy(data)),
        })
    }
}
