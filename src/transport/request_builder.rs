use crate::errors::{CallContext, OpenAIError, OpenAIResult};
use crate::transport::HttpRequest;
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;
use std::str::FromStr;

pub struct RequestBuilder {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl RequestBuilder {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    fn context(&self) -> CallContext {
        CallContext::new(self.method.clone(), self.path.clone())
    }

    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> OpenAIResult<Self> {
        let header_name = HeaderName::from_str(name.as_ref()).map_err(|e| {
            OpenAIError::request_construction(self.context(), format!("invalid header name: {}", e))
        })?;

        let header_value = HeaderValue::from_str(value.as_ref()).map_err(|e| {
            OpenAIError::request_construction(self.context(), format!("invalid header value: {}", e))
        })?;

        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Encodes `body` as the JSON payload and sets `Content-Type: application/json`.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> OpenAIResult<Self> {
        let encoded = serde_json::to_vec(body).map_err(|e| OpenAIError::Encoding(e.to_string()))?;
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.body = Some(Bytes::from(encoded));
        Ok(self)
    }

    pub fn build(self) -> HttpRequest {
        HttpRequest {
            method: self.method,
            path: self.path,
            headers: self.headers,
            body: self.body,
            timeout: None,
        }
    }
}
