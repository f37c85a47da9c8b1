use crate::errors::{OpenAIError, OpenAIResult, ValidationError};
use crate::services::fine_tunes::FineTuneRequest;

const MAX_SUFFIX_CHARS: usize = 40;

pub struct FineTuneRequestValidator;

impl FineTuneRequestValidator {
    pub fn validate(request: &FineTuneRequest) -> OpenAIResult<()> {
        if request.training_file.is_empty() {
            return Err(OpenAIError::Validation(
                ValidationError::MissingRequiredField("training_file".to_string()),
            ));
        }

        if let Some(suffix) = &request.suffix {
            let actual = suffix.chars().count();
            if actual > MAX_SUFFIX_CHARS {
                return Err(OpenAIError::Validation(ValidationError::TooLong {
                    field: "suffix".to_string(),
                    max: MAX_SUFFIX_CHARS,
                    actual,
                }));
            }
        }

        Ok(())
    }

    /// Checks that `id` can stand as a single path segment.
    pub fn validate_id(id: &str) -> OpenAIResult<()> {
        if id.is_empty() {
            return Err(OpenAIError::Validation(
                ValidationError::MissingRequiredField("fine_tune_id".to_string()),
            ));
        }

        if id == "." || id == ".." {
            return Err(invalid_id("must not be a relative path segment"));
        }

        if let Some(c) = id
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':')))
        {
            return Err(invalid_id(&format!("unexpected character {:?}", c)));
        }

        Ok(())
    }
}

fn invalid_id(reason: &str) -> OpenAIError {
    OpenAIError::Validation(ValidationError::InvalidParameter {
        parameter: "fine_tune_id".to_string(),
        reason: reason.to_string(),
    })
}
