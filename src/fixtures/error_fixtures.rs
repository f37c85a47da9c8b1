//! Error response fixtures

use serde_json::json;

/// Sample 401 authentication error response
pub fn error_401_invalid_api_key() -> serde_json::Value {
    json!({
        "error": {
            "message": "Incorrect API key provided: invalid_key. You can find your API key at https://platform.openai.com/account/api-keys.",
            "type": "invalid_request_error",
            "param": null,
            "code": "invalid_api_key"
        }
    })
}

/// Sample 404 for an unknown fine-tune id
pub fn error_404_fine_tune_not_found(id: &str) -> serde_json::Value {
    json!({
        "error": {
            "message": format!("No fine-tune job: {}", id),
            "type": "invalid_request_error",
            "param": "id",
            "code": null
        }
    })
}

/// Sample 400 for a training file that does not exist
pub fn error_400_invalid_training_file() -> serde_json::Value {
    json!({
        "error": {
            "message": "Invalid file format. Example training files can be found in our docs.",
            "type": "invalid_request_error",
            "param": "training_file",
            "code": "invalid_file"
        }
    })
}

/// Sample 429 rate limit error response
pub fn error_429_rate_limit() -> serde_json::Value {
    json!({
        "error": {
            "message": "Rate limit reached for requests",
            "type": "rate_limit_error",
            "param": null,
            "code": "rate_limit_exceeded"
        }
    })
}

/// Sample 500 internal server error response
pub fn error_500_internal_server_error() -> serde_json::Value {
    json!({
        "error": {
            "message": "The server had an error while processing your request. Sorry about that!",
            "type": "server_error",
            "param": null,
            "code": null
        }
    })
}
