//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Dispatcher and server produce:
//!     → tracing events (structured, with request and error ids)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log output (stdout, filtered by EnvFilter)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID flows from the transport layer into every log line via spans
//! - Metrics are cheap (atomic increments)
//! - The exporter is optional; with it disabled, recording is a no-op

pub mod metrics;
