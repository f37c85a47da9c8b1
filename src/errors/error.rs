use crate::errors::categories::{ApiErrorKind, ConfigurationError, NetworkError, ValidationError};
use http::Method;
use std::fmt;
use thiserror::Error;

pub type OpenAIResult<T> = Result<T, OpenAIError>;

/// Method and path of the call an error belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    pub method: Method,
    pub path: String,
}

impl CallContext {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }
}

impl fmt::Display for CallContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// A non-2xx response from the API.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub context: CallContext,
    pub status_code: u16,
    pub kind: ApiErrorKind,
    pub message: String,
    pub error_type: Option<String>,
    pub error_code: Option<String>,
    pub param: Option<String>,
    pub retry_after_secs: Option<u64>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: HTTP {} - {}", self.context, self.status_code, self.message)
    }
}

#[derive(Error, Debug)]
pub enum OpenAIError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("JSON encode request: {0}")]
    Encoding(String),

    #[error("make {context} request: {message}")]
    RequestConstruction {
        context: CallContext,
        message: String,
    },

    #[error("{context}: {source}")]
    Transport {
        context: CallContext,
        #[source]
        source: NetworkError,
    },

    #[error("API error: {0}")]
    Api(Box<ApiError>),

    #[error("{context}: failed to decode response: {message}")]
    Deserialization {
        context: CallContext,
        message: String,
    },
}

impl OpenAIError {
    pub fn transport(context: CallContext, source: NetworkError) -> Self {
        OpenAIError::Transport { context, source }
    }

    pub fn request_construction(context: CallContext, message: impl Into<String>) -> Self {
        OpenAIError::RequestConstruction {
            context,
            message: message.into(),
        }
    }

    pub fn is_api_error(&self) -> bool {
        matches!(self, OpenAIError::Api(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            OpenAIError::Transport {
                source: NetworkError::Cancelled,
                ..
            }
        )
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            OpenAIError::Transport {
                source: NetworkError::Timeout(_),
                ..
            }
        )
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            OpenAIError::Api(error) => Some(error),
            _ => None,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        self.api_error().map(|e| e.status_code)
    }

    pub fn error_code(&self) -> Option<&str> {
        self.api_error().and_then(|e| e.error_code.as_deref())
    }

    /// The call this error was raised for, when it happened on the wire.
    pub fn context(&self) -> Option<&CallContext> {
        match self {
            OpenAIError::RequestConstruction { context, .. }
            | OpenAIError::Transport { context, .. }
            | OpenAIError::Deserialization { context, .. } => Some(context),
            OpenAIError::Api(error) => Some(&error.context),
            _ => None,
        }
    }
}

impl From<ApiError> for OpenAIError {
    fn from(error: ApiError) -> Self {
        OpenAIError::Api(Box::new(error))
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            NetworkError::ConnectionFailed(err.to_string())
        } else {
            NetworkError::RequestFailed(err.to_string())
        }
    }
}
