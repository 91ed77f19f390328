//! Startup orchestration.
//!
//! # Responsibilities
//! - Turn config-declared services into descriptors with fixed-response
//!   handlers
//! - Register everything before the listener starts accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any registration error is fatal to startup
//! - Registration is single-threaded; the registry is frozen afterward

use std::sync::Arc;

use bytes::Bytes;
use http::{Method, StatusCode};
use thiserror::Error;

use crate::config::schema::{DispatchConfig, StubRouteConfig};
use crate::dispatch::Response;
use crate::registry::{Handler, RegistryError, RouteDefinition, ServiceDescriptor, ServiceRegistry};
use crate::routing::PatternError;

/// Error raised while building the registry from config.
///
/// Config validation catches these earlier for file-loaded configs; this
/// covers configs assembled in code.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("service {service}: unsupported method {method}")]
    UnsupportedMethod { service: String, method: String },

    #[error("service {service}: invalid status code {status}")]
    InvalidStatus { service: String, status: u16 },

    #[error("service {service}: pattern {pattern}: {source}")]
    InvalidPattern {
        service: String,
        pattern: String,
        source: PatternError,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Build a frozen registry from the config's service stubs.
pub fn build_registry(config: &DispatchConfig) -> Result<ServiceRegistry, StartupError> {
    let mut registry = ServiceRegistry::new();

    for service in &config.services {
        let mut descriptor =
            ServiceDescriptor::new(&service.name).with_auto_acl(service.auto_acl);

        for route in &service.routes {
            let method = parse_method(&service.name, &route.method)?;
            let handler = fixed_response_handler(&service.name, route)?;
            let route = RouteDefinition::new(method, &route.pattern, handler).map_err(|source| {
                StartupError::InvalidPattern {
                    service: service.name.clone(),
                    pattern: route.pattern.clone(),
                    source,
                }
            })?;
            descriptor = descriptor.with_route(route);
        }

        registry.register(descriptor)?;
    }

    Ok(registry)
}

fn parse_method(service: &str, method: &str) -> Result<Method, StartupError> {
    match method {
        "GET" => Ok(Method::GET),
        "POST" => Ok(Method::POST),
        "PUT" => Ok(Method::PUT),
        "DELETE" => Ok(Method::DELETE),
        other => Err(StartupError::UnsupportedMethod {
            service: service.to_string(),
            method: other.to_string(),
        }),
    }
}

/// A handler that completes immediately with the configured response.
fn fixed_response_handler(
    service: &str,
    route: &StubRouteConfig,
) -> Result<Handler, StartupError> {
    let status =
        StatusCode::from_u16(route.status).map_err(|_| StartupError::InvalidStatus {
            service: service.to_string(),
            status: route.status,
        })?;
    let content_type = route.content_type.clone();
    let body = Bytes::from(route.body.clone());

    Ok(Arc::new(move |_params, _request_body| {
        let response = Response::new(status)
            .with_header("content-type", &content_type)
            .with_body(body.clone());
        Box::pin(futures_util::future::ready(Ok(response)))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ServiceConfig;

    fn config_with(services: Vec<ServiceConfig>) -> DispatchConfig {
        DispatchConfig {
            services,
            ..DispatchConfig::default()
        }
    }

    #[test]
    fn test_builds_registry_from_config() {
        let config = config_with(vec![ServiceConfig {
            name: "fooservice".to_string(),
            auto_acl: true,
            routes: vec![StubRouteConfig {
                method: "GET".to_string(),
                pattern: "/foo/:id".to_string(),
                status: 200,
                body: "ok".to_string(),
                content_type: "text/plain".to_string(),
            }],
        }]);

        let registry = build_registry(&config).unwrap();
        let descriptor = registry.lookup("fooservice").unwrap();
        assert!(descriptor.auto_acl());
        assert_eq!(descriptor.routes().len(), 1);
    }

    #[test]
    fn test_duplicate_route_fails_startup() {
        let config = config_with(vec![
            ServiceConfig {
                name: "a".to_string(),
                auto_acl: false,
                routes: vec![StubRouteConfig {
                    method: "GET".to_string(),
                    pattern: "/foo".to_string(),
                    status: 200,
                    body: String::new(),
                    content_type: "text/plain".to_string(),
                }],
            },
            ServiceConfig {
                name: "b".to_string(),
                auto_acl: false,
                routes: vec![StubRouteConfig {
                    method: "GET".to_string(),
                    pattern: "/foo".to_string(),
                    status: 200,
                    body: String::new(),
                    content_type: "text/plain".to_string(),
                }],
            },
        ]);

        let err = build_registry(&config).unwrap_err();
        assert!(matches!(
            err,
            StartupError::Registry(RegistryError::DuplicateRoute { .. })
        ));
    }

    #[test]
    fn test_unsupported_method_fails_startup() {
        let config = config_with(vec![ServiceConfig {
            name: "a".to_string(),
            auto_acl: false,
            routes: vec![StubRouteConfig {
                method: "PATCH".to_string(),
                pattern: "/foo".to_string(),
                status: 200,
                body: String::new(),
                content_type: "text/plain".to_string(),
            }],
        }]);

        let err = build_registry(&config).unwrap_err();
        assert!(matches!(err, StartupError::UnsupportedMethod { .. }));
    }
}
