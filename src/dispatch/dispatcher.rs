//! Handler invocation with timeout and error containment.

use std::time::{Duration, Instant};

use bytes::Bytes;
use http::Method;
use uuid::Uuid;

use crate::dispatch::response::Response;
use crate::observability::metrics;
use crate::routing::Router;

/// Dispatches one request at a time; any number concurrently.
///
/// Holds no mutable state. Shared across request tasks behind an `Arc`.
#[derive(Debug)]
pub struct Dispatcher {
    router: Router,
    request_timeout: Duration,
}

impl Dispatcher {
    pub fn new(router: Router, request_timeout: Duration) -> Self {
        Self {
            router,
            request_timeout,
        }
    }

    /// Resolve, invoke, and translate one request.
    ///
    /// Never fails: every handler-level outcome, including panic-free errors
    /// and missed deadlines, is contained here and mapped to a response.
    pub async fn dispatch(&self, method: &Method, path: &str, body: Bytes) -> Response {
        let start = Instant::now();

        let (handler, params, service, route) = match self.router.match_request(method, path) {
            Some(matched) => (
                matched.route.handler().clone(),
                matched.path_params,
                matched.service.to_string(),
                matched.route.pattern().as_str().to_string(),
            ),
            None => {
                tracing::debug!(method = %method, path, "No route matched");
                metrics::record_request(method.as_str(), 404, "none", start);
                return Response::not_found();
            }
        };

        let outcome = tokio::time::timeout(self.request_timeout, handler(params, body)).await;

        let response = match outcome {
            Ok(Ok(response)) => response,
            Ok(Err(error)) => {
                let error_id = Uuid::new_v4();
                tracing::error!(
                    service = %service,
                    route = %route,
                    error_id = %error_id,
                    error = %error,
                    "Handler failed"
                );
                Response::internal_error(error_id)
            }
            // The elapsed timeout has already dropped the handler future;
            // nothing the handler started can reach this response.
            Err(_elapsed) => {
                tracing::warn!(
                    service = %service,
                    route = %route,
                    timeout_ms = self.request_timeout.as_millis() as u64,
                    "Handler timed out"
                );
                Response::gateway_timeout()
            }
        };

        metrics::record_request(method.as_str(), response.status().as_u16(), &route, start);
        response
    }
}
