use crate::errors::OpenAIResult;
use crate::services::fine_tunes::{
    FineTuneEvent, FineTuneJob, FineTuneRequest, FineTuneRequestValidator,
};
use crate::transport::{RequestBuilder, RequestExecutor};
use crate::types::{ListResponse, RequestOptions};
use async_trait::async_trait;
use tracing::{debug, instrument};

const FINE_TUNES_PATH: &str = "/fine-tunes";

#[async_trait]
pub trait FineTuneService: Send + Sync {
    /// Starts a job that fine-tunes a model on an uploaded training file.
    async fn create(&self, request: FineTuneRequest, options: &RequestOptions) -> OpenAIResult<FineTuneJob>;

    async fn retrieve(&self, fine_tune_id: &str, options: &RequestOptions) -> OpenAIResult<FineTuneJob>;

    /// All jobs of the organization, in the order the API returns them.
    async fn list(&self, options: &RequestOptions) -> OpenAIResult<Vec<FineTuneJob>>;

    async fn cancel(&self, fine_tune_id: &str, options: &RequestOptions) -> OpenAIResult<FineTuneJob>;

    async fn list_events(&self, fine_tune_id: &str, options: &RequestOptions) -> OpenAIResult<Vec<FineTuneEvent>>;
}

pub struct FineTuneServiceImpl {
    executor: RequestExecutor,
}

impl FineTuneServiceImpl {
    pub fn new(executor: RequestExecutor) -> Self {
        Self { executor }
    }
}

fn job_path(fine_tune_id: &str) -> OpenAIResult<String> {
    FineTuneRequestValidator::validate_id(fine_tune_id)?;
    Ok(format!("{}/{}", FINE_TUNES_PATH, fine_tune_id))
}

#[async_trait]
impl FineTuneService for FineTuneServiceImpl {
    #[instrument(skip(self, request, options), fields(model = ?request.model))]
    async fn create(&self, request: FineTuneRequest, options: &RequestOptions) -> OpenAIResult<FineTuneJob> {
        FineTuneRequestValidator::validate(&request)?;

        let http_request = RequestBuilder::post(FINE_TUNES_PATH).json(&request)?.build();
        let job: FineTuneJob = self.executor.execute(http_request, options).await?;

        debug!(fine_tune_id = %job.id, status = ?job.status, "fine-tune created");
        Ok(job)
    }

    #[instrument(skip(self, options))]
    async fn retrieve(&self, fine_tune_id: &str, options: &RequestOptions) -> OpenAIResult<FineTuneJob> {
        let path = job_path(fine_tune_id)?;
        self.executor
            .execute(RequestBuilder::get(path).build(), options)
            .await
    }

    #[instrument(skip(self, options))]
    async fn list(&self, options: &RequestOptions) -> OpenAIResult<Vec<FineTuneJob>> {
        let response: ListResponse<FineTuneJob> = self
            .executor
            .execute(RequestBuilder::get(FINE_TUNES_PATH).build(), options)
            .await?;

        debug!(count = response.data.len(), "fine-tunes listed");
        Ok(response.into_data())
    }

    #[instrument(skip(self, options))]
    async fn cancel(&self, fine_tune_id: &str, options: &RequestOptions) -> OpenAIResult<FineTuneJob> {
        let path = format!("{}/cancel", job_path(fine_tune_id)?);
        self.executor
            .execute(RequestBuilder::post(path).build(), options)
            .await
    }

    #[instrument(skip(self, options))]
    async fn list_events(&self, fine_tune_id: &str, options: &RequestOptions) -> OpenAIResult<Vec<FineTuneEvent>> {
        let path = format!("{}/events", job_path(fine_tune_id)?);
        let response: ListResponse<FineTuneEvent> = self
            .executor
            .execute(RequestBuilder::get(path).build(), options)
            .await?;

        Ok(response.into_data())
    }
}
