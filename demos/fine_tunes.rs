//! Example: Legacy fine-tunes
//!
//! Lists existing fine-tune jobs, then optionally starts a new one from an
//! uploaded training file and prints its events.
//!
//! ## Usage
//!
//! Set your API key:
//! ```bash
//! export OPENAI_API_KEY=sk-...
//! ```
//!
//! Run the example (the training file id is optional):
//! ```bash
//! RUST_LOG=integrations_openai_fine_tunes=debug cargo run --example fine_tunes -- file-abc123
//! ```

use integrations_openai_fine_tunes::{
    FineTuneRequest, OpenAIClientBuilder, OpenAIConfig, RequestOptions,
};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = OpenAIConfig::from_env()?;
    let client = OpenAIClientBuilder::new().with_config(config).build()?;
    let options = RequestOptions::new().with_timeout(Duration::from_secs(30));

    let jobs = client.fine_tunes().list(&options).await?;
    println!("{} fine-tune job(s):", jobs.len());
    for job in &jobs {
        println!(
            "  {} {:?} {}",
            job.id,
            job.status,
            job.fine_tuned_model.as_deref().unwrap_or("-")
        );
    }

    let Some(training_file) = std::env::args().nth(1) else {
        return Ok(());
    };

    let request = FineTuneRequest::new(training_file)
        .with_model("curie")
        .with_suffix("demo");
    let job = client.fine_tunes().create(request, &options).await?;
    println!("\nCreated {} ({:?})", job.id, job.status);

    let job = client.fine_tunes().retrieve(&job.id, &options).await?;
    for event in client.fine_tunes().list_events(&job.id, &options).await? {
        println!("  [{}] {}", event.level, event.message);
    }

    Ok(())
}
