use crate::types::{is_none_or_empty, option_string, FileObject};
use serde::{Deserialize, Serialize};

/// Body of `POST /fine-tunes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FineTuneRequest {
    pub training_file: String,
    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub validation_file: Option<String>,
}

impl FineTuneRequest {
    pub fn new(training_file: impl Into<String>) -> Self {
        Self {
            training_file: training_file.into(),
            model: None,
            suffix: None,
            validation_file: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Appended to the fine-tuned model name, at most 40 characters
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_validation_file(mut self, file_id: impl Into<String>) -> Self {
        self.validation_file = Some(file_id.into());
        self
    }
}

/// Job status. Strings this client does not know are kept verbatim in `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FineTuneStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
    Cancelled,
    Unknown(String),
}

impl FineTuneStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
            Self::Unknown(raw) => raw,
        }
    }

    /// No further transitions are expected once a job reaches this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Cancelled)
    }
}

impl Default for FineTuneStatus {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl From<String> for FineTuneStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => Self::Pending,
            "running" => Self::Running,
            "succeeded" => Self::Succeeded,
            "failed" => Self::Failed,
            "cancelled" => Self::Cancelled,
            _ => Self::Unknown(raw),
        }
    }
}

impl From<FineTuneStatus> for String {
    fn from(status: FineTuneStatus) -> Self {
        match status {
            FineTuneStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// One progress message of a job, in the order the API returns them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FineTuneEvent {
    pub object: String,
    pub created_at: i64,
    pub level: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hyperparams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_epochs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_rate_multiplier: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_loss_weight: Option<f64>,
}

/// A fine-tune job.
///
/// Create answers with a shorter document than retrieve and list; every
/// field defaults when absent so both decode into this type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FineTuneJob {
    pub id: String,
    pub object: String,
    pub model: String,
    pub created_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    pub events: Vec<FineTuneEvent>,
    #[serde(deserialize_with = "option_string::deserialize")]
    pub fine_tuned_model: Option<String>,
    pub organization_id: String,
    pub status: FineTuneStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyperparams: Option<Hyperparams>,
    pub result_files: Vec<FileObject>,
    pub validation_files: Vec<FileObject>,
    pub training_files: Vec<FileObject>,
}
