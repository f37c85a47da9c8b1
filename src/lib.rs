//! Async client for the OpenAI legacy fine-tunes API.
//!
//! ```no_run
//! use integrations_openai_fine_tunes::prelude::*;
//!
//! # async fn run() -> OpenAIResult<()> {
//! let client = OpenAIClientBuilder::new()
//!     .with_config(OpenAIConfig::from_env()?)
//!     .build()?;
//!
//! let request = FineTuneRequest::new("file-XGinujblHPwGLSztz8cPS8XY").with_model("curie");
//! let job = client.fine_tunes().create(request, &RequestOptions::default()).await?;
//! println!("{} is {:?}", job.id, job.status);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod errors;
pub mod services;
pub mod transport;
pub mod types;

#[cfg(test)]
pub mod fixtures;

pub use client::{OpenAIClient, OpenAIClientBuilder, OpenAIClientImpl};
pub use errors::{OpenAIError, OpenAIResult};
pub use types::{FileObject, OpenAIConfig, RequestOptions};

pub use services::fine_tunes::{
    FineTuneEvent, FineTuneJob, FineTuneRequest, FineTuneService, FineTuneStatus, Hyperparams,
};

pub mod prelude {
    pub use crate::client::{OpenAIClient, OpenAIClientBuilder};
    pub use crate::errors::{OpenAIError, OpenAIResult};
    pub use crate::services::fine_tunes::{FineTuneJob, FineTuneRequest, FineTuneService, FineTuneStatus};
    pub use crate::types::{OpenAIConfig, RequestOptions};
}
