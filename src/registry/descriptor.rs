//! Service descriptor data model.
//!
//! A descriptor is a named bundle of routes; a route binds a method and path
//! pattern to an asynchronous handler. Descriptors are built with plain
//! constructor calls and handed to the registry fully formed.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use futures_util::future::BoxFuture;
use http::Method;
use thiserror::Error;

use crate::dispatch::Response;
use crate::routing::{PathParams, PathPattern, PatternError};

/// Error a handler reports when it cannot produce a response.
///
/// The message is internal diagnostics only; the dispatcher never forwards it
/// to the caller.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct HandlerError(String);

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Future returned by a handler invocation.
pub type HandlerFuture = BoxFuture<'static, Result<Response, HandlerError>>;

/// An asynchronous request handler.
///
/// Called with the path parameters bound by the router and the request body.
/// Routes without parameters receive an empty map.
pub type Handler = Arc<dyn Fn(PathParams, Bytes) -> HandlerFuture + Send + Sync>;

/// A (method, path pattern, handler) triple. Immutable once registered.
#[derive(Clone)]
pub struct RouteDefinition {
    method: Method,
    pattern: PathPattern,
    handler: Handler,
}

impl RouteDefinition {
    /// Create a route, parsing the pattern.
    pub fn new(method: Method, pattern: &str, handler: Handler) -> Result<Self, PatternError> {
        Ok(Self {
            method,
            pattern: PathPattern::parse(pattern)?,
            handler,
        })
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }
}

impl fmt::Debug for RouteDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDefinition")
            .field("method", &self.method)
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

/// A named bundle of routes representing one logical service.
#[derive(Debug, Clone)]
pub struct ServiceDescriptor {
    name: String,
    routes: Vec<RouteDefinition>,
    auto_acl: bool,
}

impl ServiceDescriptor {
    /// Create an empty descriptor with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            routes: Vec::new(),
            auto_acl: false,
        }
    }

    /// Append a route. Order is preserved and observable by the router.
    #[must_use]
    pub fn with_route(mut self, route: RouteDefinition) -> Self {
        self.routes.push(route);
        self
    }

    /// Mark the service for automatic ACL publication.
    ///
    /// Consumed by the surrounding gateway layer; carried as data here.
    #[must_use]
    pub fn with_auto_acl(mut self, auto_acl: bool) -> Self {
        self.auto_acl = auto_acl;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    pub fn auto_acl(&self) -> bool {
        self.auto_acl
    }
}
