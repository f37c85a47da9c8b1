//! Legacy fine-tunes endpoints (`/fine-tunes`)

mod service;
mod types;
mod validation;


pub use service::{FineTuneService, FineTuneServiceImpl};
pub use types::{FineTuneEvent, FineTuneJob, FineTuneRequest, FineTuneStatus, Hyperparams};
pub use validation::FineTuneRequestValidator;
