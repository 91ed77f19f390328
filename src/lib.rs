//! Minimal service registry and request dispatch core.
//!
//! Hosts named service descriptors (method + path pattern + async handler)
//! and dispatches incoming requests to them.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌──────────────────────────────────────────────┐
//!                 │               SERVICE DISPATCH                │
//!                 │                                               │
//!   HTTP Request  │  ┌────────┐   ┌──────────┐   ┌────────────┐  │
//!   ──────────────┼─▶│  http  │──▶│ dispatch │──▶│  routing   │  │
//!                 │  │ server │   │          │   │ (matcher)  │  │
//!                 │  └────────┘   └────┬─────┘   └─────┬──────┘  │
//!                 │                    │               │         │
//!                 │                    ▼               ▼         │
//!                 │              ┌──────────┐   ┌────────────┐   │
//!   HTTP Response │              │ handler  │   │  registry  │   │
//!   ◀─────────────┼──────────────│ (async)  │   │ (frozen at │   │
//!                 │              └──────────┘   │  startup)  │   │
//!                 │                             └────────────┘   │
//!                 │                                               │
//!                 │  Cross-cutting: config, lifecycle,            │
//!                 │                 observability                 │
//!                 └──────────────────────────────────────────────┘
//! ```
//!
//! The registry is populated once at startup and is immutable while traffic
//! flows. Each request is an independent task; the dispatcher's await on the
//! handler is the only suspension point and carries the per-request timeout.

// Core subsystems
pub mod config;
pub mod dispatch;
pub mod http;
pub mod registry;
pub mod routing;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::DispatchConfig;
pub use dispatch::{Dispatcher, Response};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use registry::{RouteDefinition, ServiceDescriptor, ServiceRegistry};
pub use routing::Router;
