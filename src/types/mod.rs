mod common;
mod serde_helpers;

pub use common::{FileObject, ListResponse, RequestOptions};
pub use serde_helpers::*;

pub use crate::client::OpenAIConfig;
