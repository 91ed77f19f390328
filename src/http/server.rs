//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with a catch-all handler
//! - Wire up middleware (tracing, request ID)
//! - Enforce the request body size limit
//! - Hand decoded requests to the dispatcher
//! - Serve with graceful shutdown

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::IntoResponse,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::DispatchConfig;
use crate::dispatch::Dispatcher;
use crate::http::request::RequestIdLayer;
use crate::http::response::into_wire_response;

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub max_body_size: usize,
}

/// HTTP server front-end for the dispatcher.
pub struct HttpServer {
    router: Router,
    config: DispatchConfig,
}

impl HttpServer {
    /// Create a new HTTP server around a dispatcher.
    pub fn new(config: DispatchConfig, dispatcher: Arc<Dispatcher>) -> Self {
        let state = AppState {
            dispatcher,
            max_body_size: config.limits.max_body_size,
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch_handler))
            .route("/", any(dispatch_handler))
            .with_state(state)
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }
}

/// Catch-all handler: decode the request, dispatch, encode the response.
async fn dispatch_handler(
    State(state): State<AppState>,
    request: Request<Body>,
) -> impl IntoResponse {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let body = match axum::body::to_bytes(request.into_body(), state.max_body_size).await {
        Ok(bytes) => bytes,
        Err(_) => {
            tracing::warn!(method = %method, path = %path, "Request body over limit");
            return (StatusCode::PAYLOAD_TOO_LARGE, "request body too large").into_response();
        }
    };

    let response = state.dispatcher.dispatch(&method, &path, body).await;
    into_wire_response(response)
}
