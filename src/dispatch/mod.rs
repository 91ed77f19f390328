//! Request dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! (method, path, body)
//!     → router lookup
//!     → no match: 404, handler never invoked
//!     → match: handler(params, body) awaited under the request timeout
//!         → Ok(response): returned as-is
//!         → Err: 500 with an opaque correlation id
//!         → timeout: handler future dropped, 504
//! ```
//!
//! # Design Decisions
//! - Every handler await has a deadline
//! - Handler failure detail stays in the logs; callers see only the id
//! - Dropping the timed-out future is the cancellation: a cancelled handler
//!   has no path to the response
//! - Dispatches are independent; no cross-request ordering

pub mod dispatcher;
pub mod response;

pub use dispatcher::Dispatcher;
pub use response::Response;
