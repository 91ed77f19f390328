//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (ordered route scan)
//!     → matcher.rs (evaluate one pattern, bind :params)
//!     → Return: MatchResult or None
//!
//! Route ordering (at startup):
//!     registered routes
//!     → Sort by literal segment count, descending
//!     → Ties keep registration order
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes ordered at startup, immutable at runtime
//! - No regex in hot path (segment comparison only)
//! - Deterministic: same input always matches same route
//! - Most-specific match wins (more literal segments first)

pub mod matcher;
pub mod router;

pub use matcher::{PathParams, PathPattern, PatternError};
pub use router::{MatchResult, Router};
