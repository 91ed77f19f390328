//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use service_dispatch::dispatch::Response;
use service_dispatch::registry::Handler;
use service_dispatch::{
    DispatchConfig, Dispatcher, HttpServer, Router, ServiceRegistry, Shutdown,
};

/// Start a server on an ephemeral loopback port over the given registry.
///
/// Returns the bound address and the shutdown handle; trigger it at the end
/// of the test.
pub async fn spawn_server(
    registry: ServiceRegistry,
    config: DispatchConfig,
    request_timeout: Duration,
) -> (SocketAddr, Shutdown) {
    let router = Router::new(Arc::new(registry));
    let dispatcher = Arc::new(Dispatcher::new(router, request_timeout));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, dispatcher);
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// A handler that completes immediately with a 200 and a fixed body.
#[allow(dead_code)]
pub fn fixed_handler(body: &'static str) -> Handler {
    Arc::new(move |_params, _body| Box::pin(async move { Ok(Response::ok(body)) }))
}

/// A handler that echoes the request body back.
#[allow(dead_code)]
pub fn echo_handler() -> Handler {
    Arc::new(|_params, body| Box::pin(async move { Ok(Response::ok(body)) }))
}
