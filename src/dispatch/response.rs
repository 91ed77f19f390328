//! Transport-agnostic response value.
//!
//! The dispatcher and handlers produce this type; serializing it onto the
//! wire belongs to the transport adapter.

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use uuid::Uuid;

/// A response: status code, headers, body bytes.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl Response {
    /// An empty response with the given status.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// A 200 response with a plain text body.
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self::new(StatusCode::OK)
            .with_header("content-type", "text/plain")
            .with_body(body)
    }

    /// Set the body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Set a header. Invalid names or values are ignored rather than
    /// panicking; handlers cannot take the process down with a bad header.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name),
            HeaderValue::try_from(value),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// 404 for a path no route covers.
    pub fn not_found() -> Self {
        Self::json(
            StatusCode::NOT_FOUND,
            serde_json::json!({ "error": "not found" }),
        )
    }

    /// 500 carrying only an opaque correlation id.
    pub fn internal_error(error_id: Uuid) -> Self {
        Self::json(
            StatusCode::INTERNAL_SERVER_ERROR,
            serde_json::json!({
                "error": "internal server error",
                "error_id": error_id.to_string(),
            }),
        )
    }

    /// 504 for a handler that missed its deadline.
    pub fn gateway_timeout() -> Self {
        Self::json(
            StatusCode::GATEWAY_TIMEOUT,
            serde_json::json!({ "error": "gateway timeout" }),
        )
    }

    fn json(status: StatusCode, value: serde_json::Value) -> Self {
        Self::new(status)
            .with_header("content-type", "application/json")
            .with_body(value.to_string())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Decompose for the transport adapter.
    pub fn into_parts(self) -> (StatusCode, HeaderMap, Bytes) {
        (self.status, self.headers, self.body)
    }
}
