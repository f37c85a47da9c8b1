mod categories;
mod error;
mod mapping;

pub use categories::{ApiErrorKind, ConfigurationError, NetworkError, ValidationError};
pub use error::{ApiError, CallContext, OpenAIError, OpenAIResult};
pub use mapping::{ErrorMapper, OpenAIErrorDetail, OpenAIErrorResponse};
