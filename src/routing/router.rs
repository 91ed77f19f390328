//! Route lookup.
//!
//! # Responsibilities
//! - Order registered routes by specificity at construction
//! - Look up the matching route for (method, path)
//! - Return the match with bound parameters, or an explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - More literal segments beats fewer; registration order breaks ties
//! - O(n) ordered scan (acceptable for typical route counts)
//! - Explicit None rather than an error; a missing route is normal

use std::sync::Arc;

use http::Method;

use crate::registry::{RouteDefinition, ServiceRegistry};
use crate::routing::matcher::PathParams;

/// A successful route lookup. Transient, produced per request.
#[derive(Debug)]
pub struct MatchResult<'a> {
    /// The matched route.
    pub route: &'a RouteDefinition,
    /// Name of the service the route belongs to.
    pub service: &'a str,
    /// Parameters bound from the path.
    pub path_params: PathParams,
}

/// Matches requests against the routes of a frozen registry.
#[derive(Debug)]
pub struct Router {
    registry: Arc<ServiceRegistry>,
    /// (service index, route index) pairs, most specific first.
    order: Vec<(usize, usize)>,
}

impl Router {
    /// Build a router over a fully populated registry.
    ///
    /// Candidate order is fixed here: descending literal segment count, with
    /// the stable sort keeping registration order within each count.
    pub fn new(registry: Arc<ServiceRegistry>) -> Self {
        let mut order: Vec<(usize, usize)> = registry
            .services()
            .iter()
            .enumerate()
            .flat_map(|(si, d)| (0..d.routes().len()).map(move |ri| (si, ri)))
            .collect();
        order.sort_by_key(|&(si, ri)| {
            std::cmp::Reverse(registry.services()[si].routes()[ri].pattern().literal_count())
        });

        Self { registry, order }
    }

    /// Find the route matching a method and path.
    pub fn match_request(&self, method: &Method, path: &str) -> Option<MatchResult<'_>> {
        self.order.iter().find_map(|&(si, ri)| {
            let descriptor = &self.registry.services()[si];
            let route = &descriptor.routes()[ri];
            if route.method() != method {
                return None;
            }
            route.pattern().capture(path).map(|path_params| MatchResult {
                route,
                service: descriptor.name(),
                path_params,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::Response;
    use crate::registry::{Handler, ServiceDescriptor};

    fn handler() -> Handler {
        Arc::new(|_params, _body| Box::pin(async { Ok(Response::ok("ok")) }))
    }

    fn router_with(patterns: &[(&str, Method, &str)]) -> Router {
        let mut registry = ServiceRegistry::new();
        for (service, method, pattern) in patterns {
            let descriptor = ServiceDescriptor::new(*service).with_route(
                crate::registry::RouteDefinition::new(method.clone(), pattern, handler()).unwrap(),
            );
            registry.register(descriptor).unwrap();
        }
        Router::new(Arc::new(registry))
    }

    #[test]
    fn test_literal_beats_param() {
        let router = router_with(&[
            ("a", Method::GET, "/foo/:id"),
            ("b", Method::GET, "/foo/bar"),
        ]);

        let result = router.match_request(&Method::GET, "/foo/bar").unwrap();
        assert_eq!(result.route.pattern().as_str(), "/foo/bar");
        assert!(result.path_params.is_empty());

        let result = router.match_request(&Method::GET, "/foo/baz").unwrap();
        assert_eq!(result.route.pattern().as_str(), "/foo/:id");
    }

    #[test]
    fn test_tie_broken_by_registration_order() {
        let router = router_with(&[
            ("a", Method::GET, "/x/:first"),
            ("b", Method::GET, "/:second/y"),
        ]);

        // Both have one literal and one parameter; "/x/y" fits either.
        let result = router.match_request(&Method::GET, "/x/y").unwrap();
        assert_eq!(result.service, "a");
    }

    #[test]
    fn test_params_extracted() {
        let router = router_with(&[("a", Method::GET, "/foo/:id")]);

        let result = router.match_request(&Method::GET, "/foo/123").unwrap();
        assert_eq!(
            result.path_params.get("id").map(String::as_str),
            Some("123")
        );
    }

    #[test]
    fn test_method_must_match() {
        let router = router_with(&[("a", Method::GET, "/foo")]);
        assert!(router.match_request(&Method::POST, "/foo").is_none());
    }

    #[test]
    fn test_no_route_is_none() {
        let router = router_with(&[("a", Method::GET, "/foo")]);
        assert!(router.match_request(&Method::GET, "/bar").is_none());
    }

    #[test]
    fn test_deeper_pattern_wins() {
        let router = router_with(&[
            ("a", Method::GET, "/foo/:id"),
            ("b", Method::GET, "/foo/:id/friends"),
        ]);

        let result = router
            .match_request(&Method::GET, "/foo/7/friends")
            .unwrap();
        assert_eq!(result.route.pattern().as_str(), "/foo/:id/friends");
        assert_eq!(result.path_params.get("id").map(String::as_str), Some("7"));
    }
}
