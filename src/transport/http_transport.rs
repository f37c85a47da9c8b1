use crate::client::OpenAIConfig;
use crate::errors::{CallContext, ConfigurationError, NetworkError, OpenAIError, OpenAIResult};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};
use url::Url;

/// HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Creates a new ReqwestTransport from configuration
    pub fn new(config: &OpenAIConfig) -> OpenAIResult<Self> {
        let mut client_builder = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent);

        if let Some(proxy_url) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url.as_str())
                .map_err(|e| ConfigurationError::InvalidProxy(e.to_string()))?;
            client_builder = client_builder.proxy(proxy);
        }

        let client = client_builder
            .build()
            .map_err(|e| ConfigurationError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            timeout: config.timeout,
        })
    }

    /// Builds a full URL from a path
    fn build_url(&self, path: &str) -> Result<Url, url::ParseError> {
        let path = path.trim_start_matches('/');
        Url::parse(&format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path
        ))
    }

    fn map_send_error(context: CallContext, err: reqwest::Error, timeout: Duration) -> OpenAIError {
        if err.is_builder() {
            OpenAIError::request_construction(context, err.to_string())
        } else if err.is_timeout() {
            OpenAIError::transport(context, NetworkError::Timeout(timeout))
        } else {
            OpenAIError::transport(context, NetworkError::from(err))
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn send(&self, request: HttpRequest) -> OpenAIResult<HttpResponse> {
        let context = request.context();
        let url = self
            .build_url(&request.path)
            .map_err(|e| OpenAIError::request_construction(context.clone(), e.to_string()))?;
        let timeout = request.timeout.unwrap_or(self.timeout);

        let mut builder = self
            .client
            .request(request.method, url)
            .headers(request.headers)
            .timeout(timeout);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let started = Instant::now();
        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_send_error(context.clone(), e, timeout))?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| Self::map_send_error(context, e, timeout))?;

        debug!(
            status,
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "response received"
        );

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
