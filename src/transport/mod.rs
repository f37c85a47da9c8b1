mod executor;
mod http_transport;
mod request_builder;
mod response_parser;

pub use executor::RequestExecutor;
pub use http_transport::ReqwestTransport;
pub use request_builder::RequestBuilder;
pub use response_parser::ResponseParser;

use crate::errors::{CallContext, OpenAIResult};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};
use std::time::Duration;

/// A request ready to go on the wire. `path` is relative to the base URL.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    pub fn context(&self) -> CallContext {
        CallContext::new(self.method.clone(), self.path.clone())
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and hands back the raw response, whatever its status.
///
/// Implementations own base-URL resolution, client-wide defaults and the
/// connection pool. Status handling and decoding happen in [`ResponseParser`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> OpenAIResult<HttpResponse>;
}
