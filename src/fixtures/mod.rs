//! Test fixtures and sample data
//!
//! Sample fine-tune API responses and error bodies shared by the unit tests.

mod error_fixtures;

pub use error_fixtures::*;
pub use fine_tune_fixtures::*;
