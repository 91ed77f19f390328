//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → DispatchConfig (validated, immutable)
//!     → startup builds the registry from it
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the registry it feeds is frozen before
//!   traffic starts
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::DispatchConfig;
pub use schema::ListenerConfig;
pub use schema::ServiceConfig;
pub use schema::StubRouteConfig;
