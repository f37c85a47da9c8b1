mod client_impl;
mod config;
mod factory;

pub use client_impl::OpenAIClientImpl;
pub use config::{OpenAIConfig, DEFAULT_BASE_URL};
pub use factory::OpenAIClientBuilder;

use crate::services::fine_tunes::FineTuneService;

pub trait OpenAIClient: Send + Sync {
    fn fine_tunes(&self) -> &dyn FineTuneService;

    fn config(&self) -> &OpenAIConfig;
}
