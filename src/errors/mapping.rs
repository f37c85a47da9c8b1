use crate::errors::{ApiError, ApiErrorKind, CallContext, OpenAIError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct OpenAIErrorResponse {
    pub error: OpenAIErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct OpenAIErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub code: Option<String>,
    pub param: Option<String>,
}

pub struct ErrorMapper;

impl ErrorMapper {
    /// Maps HTTP status code and error response to OpenAIError
    pub fn map_status_code(
        context: CallContext,
        status_code: u16,
        error_response: Option<OpenAIErrorResponse>,
    ) -> OpenAIError {
        let detail = error_response.map(|r| r.error);
        let message = detail
            .as_ref()
            .map(|d| d.message.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP error: {}", status_code));

        OpenAIError::from(ApiError {
            context,
            status_code,
            kind: ApiErrorKind::from_status(status_code),
            message,
            error_type: detail.as_ref().and_then(|d| d.error_type.clone()),
            error_code: detail.as_ref().and_then(|d| d.code.clone()),
            param: detail.and_then(|d| d.param),
            retry_after_secs: None,
        })
    }

    /// Extracts retry-after header value in seconds
    pub fn extract_retry_after(headers: &http::HeaderMap) -> Option<u64> {
        headers
            .get(http::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse().ok())
    }

    /// Parses error response from JSON body
    pub fn parse_error_response(body: &[u8]) -> Option<OpenAIErrorResponse> {
        serde_json::from_slice(body).ok()
    }

    /// Creates an error from response components
    pub fn from_response(
        context: CallContext,
        status: u16,
        headers: &http::HeaderMap,
        body: &[u8],
    ) -> OpenAIError {
        let mut error = Self::map_status_code(context, status, Self::parse_error_response(body));

        if let OpenAIError::Api(ref mut api_error) = error {
            api_error.retry_after_secs = Self::extract_retry_after(headers);
            // Non-JSON bodies (proxies, load balancers) still say something useful.
            if api_error.error_type.is_none() && !body.is_empty() && api_error.message.starts_with("HTTP error") {
                api_error.message = format!(
                    "HTTP error: {} - {}",
                    status,
                    String::from_utf8_lossy(body).trim()
                );
            }
        }

        error
    }
}
