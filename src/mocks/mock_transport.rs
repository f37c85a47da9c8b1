//! Mock HTTP transport for testing

use crate::errors::{NetworkError, OpenAIError, OpenAIResult};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock HTTP transport that replays queued responses and records requests
#[derive(Clone)]
pub struct MockHttpTransport {
    inner: Arc<Mutex<MockHttpTransportInner>>,
}

struct MockHttpTransportInner {
    responses: VecDeque<MockResponse>,
    requests: Vec<RecordedRequest>,
    delay: Option<Duration>,
}

/// What the mock saw for one `send` call.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
    pub timeout: Option<Duration>,
}

impl RecordedRequest {
    /// Body decoded as JSON, if there was one
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_ref()
            .and_then(|b| serde_json::from_slice(b).ok())
    }
}

enum MockResponse {
    Status(u16, Bytes),
    Network(NetworkError),
}

impl MockHttpTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockHttpTransportInner {
                responses: VecDeque::new(),
                requests: Vec::new(),
                delay: None,
            })),
        }
    }

    /// Add a 200 response with a JSON body
    pub fn with_json_response(self, response: serde_json::Value) -> Self {
        self.with_status_response(200, response)
    }

    /// Add a response with the given status and JSON body
    pub fn with_status_response(self, status: u16, body: serde_json::Value) -> Self {
        let body = Bytes::from(body.to_string());
        self.push(MockResponse::Status(status, body))
    }

    /// Add a response with the given status and raw body
    pub fn with_raw_response(self, status: u16, body: impl Into<Bytes>) -> Self {
        self.push(MockResponse::Status(status, body.into()))
    }

    /// Add a transport-level failure
    pub fn with_network_error(self, error: NetworkError) -> Self {
        self.push(MockResponse::Network(error))
    }

    /// Wait this long before answering each request
    pub fn with_delay(self, delay: Duration) -> Self {
        self.inner.lock().unwrap().delay = Some(delay);
        self
    }

    fn push(self, response: MockResponse) -> Self {
        self.inner.lock().unwrap().responses.push_back(response);
        self
    }

    /// Get the list of requests made
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.inner.lock().unwrap().requests.last().cloned()
    }

    /// Verify that a request was made with the given method and path
    pub fn verify_request(&self, method: Method, path: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .requests
            .iter()
            .any(|r| r.method == method && r.path == path)
    }

    /// Get the number of requests made
    pub fn request_count(&self) -> usize {
        self.inner.lock().unwrap().requests.len()
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: HttpRequest) -> OpenAIResult<HttpResponse> {
        let context = request.context();
        let (response, delay) = {
            let mut inner = self.inner.lock().unwrap();
            inner.requests.push(RecordedRequest {
                method: request.method,
                path: request.path,
                headers: request.headers,
                body: request.body,
                timeout: request.timeout,
            });
            (inner.responses.pop_front(), inner.delay)
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match response {
            Some(MockResponse::Status(status, body)) => Ok(HttpResponse {
                status,
                headers: HeaderMap::new(),
                body,
            }),
            Some(MockResponse::Network(error)) => Err(OpenAIError::transport(context, error)),
            None => Err(OpenAIError::transport(
                context,
                NetworkError::RequestFailed("No mock response configured".to_string()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::RequestBuilder;

    #[tokio::test]
    async fn test_mock_transport_json_response() {
        let mock = MockHttpTransport::new()
            .with_json_response(serde_json::json!({"id": "ft-123", "object": "fine-tune"}));

        let request = RequestBuilder::post("/fine-tunes")
            .json(&serde_json::json!({"training_file": "file-1"}))
            .unwrap()
            .build();
        let response = mock.send(request).await.unwrap();

        assert_eq!(response.status, 200);
        assert!(mock.verify_request(Method::POST, "/fine-tunes"));
        assert_eq!(
            mock.last_request().unwrap().json_body().unwrap()["training_file"],
            "file-1"
        );
    }

    #[tokio::test]
    async fn test_mock_transport_without_response_fails() {
        let mock = MockHttpTransport::new();
        let result = mock.send(RequestBuilder::get("/fine-tunes").build()).await;

        assert!(result.is_err());
        assert_eq!(mock.request_count(), 1);
    }
}
