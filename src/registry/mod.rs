//! Service registry subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (single-threaded, before traffic):
//!     ServiceDescriptor values (name, routes, auto_acl)
//!     → registry.rs register() (duplicate checks, all-or-nothing)
//!     → frozen ServiceRegistry shared via Arc
//!
//! Runtime:
//!     lookup(name) / route iteration — pure reads, no locks
//! ```
//!
//! # Design Decisions
//! - Registration happens once at startup; reads never block
//! - Duplicate (method, pattern) pairs fail at registration, not at
//!   request time
//! - A failed register leaves the registry untouched (no partial visibility)
//! - Route iteration preserves registration order; the router's tie-breaking
//!   depends on it

pub mod descriptor;
#[allow(clippy::module_inception)]
pub mod registry;

pub use descriptor::{Handler, HandlerError, HandlerFuture, RouteDefinition, ServiceDescriptor};
pub use registry::{RegistryError, ServiceRegistry};
