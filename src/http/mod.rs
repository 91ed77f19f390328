//! HTTP transport adapter.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all route)
//!     → request.rs (request ID middleware)
//!     → dispatcher (core; transport-agnostic)
//!     → response.rs (core Response → wire response)
//!     → Send to client
//! ```
//!
//! The core never sees axum types; this module owns both directions of the
//! conversion.

pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
