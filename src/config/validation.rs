//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check route patterns parse and do not collide
//! - Validate value ranges (timeouts > 0, status codes valid)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: DispatchConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use crate::config::schema::DispatchConfig;
use crate::routing::{PathPattern, PatternError};

/// Methods a stub route may declare.
const SUPPORTED_METHODS: [&str; 4] = ["GET", "POST", "PUT", "DELETE"];

/// A single semantic error found in a config.
#[derive(Debug)]
pub enum ValidationError {
    /// A bind address does not parse as `host:port`.
    InvalidBindAddress { field: &'static str, value: String },
    /// A route declares a method outside the supported set.
    UnsupportedMethod { service: String, method: String },
    /// A route pattern does not parse.
    InvalidPattern {
        service: String,
        pattern: String,
        source: PatternError,
    },
    /// Two routes share the same method and pattern shape.
    DuplicateRoute { method: String, pattern: String },
    /// Two services share a name.
    DuplicateServiceName { name: String },
    /// A stub response status is not a valid HTTP status code.
    InvalidStatus { service: String, status: u16 },
    /// A timeout is configured as zero.
    ZeroTimeout { field: &'static str },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress { field, value } => {
                write!(f, "{} is not a valid socket address: {}", field, value)
            }
            ValidationError::UnsupportedMethod { service, method } => {
                write!(f, "service {}: unsupported method {}", service, method)
            }
            ValidationError::InvalidPattern {
                service,
                pattern,
                source,
            } => {
                write!(f, "service {}: pattern {}: {}", service, pattern, source)
            }
            ValidationError::DuplicateRoute { method, pattern } => {
                write!(f, "duplicate route {} {}", method, pattern)
            }
            ValidationError::DuplicateServiceName { name } => {
                write!(f, "duplicate service name {}", name)
            }
            ValidationError::InvalidStatus { service, status } => {
                write!(f, "service {}: invalid status code {}", service, status)
            }
            ValidationError::ZeroTimeout { field } => {
                write!(f, "{} must be greater than zero", field)
            }
        }
    }
}

/// Validate a config, collecting every error.
pub fn validate_config(config: &DispatchConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<std::net::SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }
    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<std::net::SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidBindAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout {
            field: "timeouts.request_secs",
        });
    }

    let mut seen_names: HashSet<&str> = HashSet::new();
    let mut seen_routes: Vec<(String, PathPattern)> = Vec::new();

    for service in &config.services {
        if !seen_names.insert(service.name.as_str()) {
            errors.push(ValidationError::DuplicateServiceName {
                name: service.name.clone(),
            });
        }

        for route in &service.routes {
            if !SUPPORTED_METHODS.contains(&route.method.as_str()) {
                errors.push(ValidationError::UnsupportedMethod {
                    service: service.name.clone(),
                    method: route.method.clone(),
                });
            }

            if http::StatusCode::from_u16(route.status).is_err() {
                errors.push(ValidationError::InvalidStatus {
                    service: service.name.clone(),
                    status: route.status,
                });
            }

            match PathPattern::parse(&route.pattern) {
                Ok(pattern) => {
                    let collides = seen_routes
                        .iter()
                        .any(|(m, p)| *m == route.method && p.same_shape(&pattern));
                    if collides {
                        errors.push(ValidationError::DuplicateRoute {
                            method: route.method.clone(),
                            pattern: route.pattern.clone(),
                        });
                    } else {
                        seen_routes.push((route.method.clone(), pattern));
                    }
                }
                Err(source) => {
                    errors.push(ValidationError::InvalidPattern {
                        service: service.name.clone(),
                        pattern: route.pattern.clone(),
                        source,
                    });
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{ServiceConfig, StubRouteConfig};

    fn stub_route(method: &str, pattern: &str) -> StubRouteConfig {
        StubRouteConfig {
            method: method.to_string(),
            pattern: pattern.to_string(),
            status: 200,
            body: String::new(),
            content_type: "text/plain".to_string(),
        }
    }

    fn config_with_routes(routes: Vec<StubRouteConfig>) -> DispatchConfig {
        DispatchConfig {
            services: vec![ServiceConfig {
                name: "svc".to_string(),
                auto_acl: false,
                routes,
            }],
            ..DispatchConfig::default()
        }
    }

    #[test]
    fn test_valid_config() {
        let config = config_with_routes(vec![
            stub_route("GET", "/foo"),
            stub_route("GET", "/foo/:id"),
            stub_route("POST", "/foo"),
        ]);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_duplicate_route_rejected() {
        let config = config_with_routes(vec![
            stub_route("GET", "/foo/:id"),
            stub_route("GET", "/foo/:name"),
        ]);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ValidationError::DuplicateRoute { .. }));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = config_with_routes(vec![
            stub_route("PATCH", "/foo"),
            stub_route("GET", "foo/bar"),
        ]);
        config.timeouts.request_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_duplicate_service_name() {
        let mut config = config_with_routes(vec![stub_route("GET", "/credit")]);
        config.services.push(ServiceConfig {
            name: "svc".to_string(),
            auto_acl: false,
            routes: vec![stub_route("GET", "/debit")],
        });
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::DuplicateServiceName { .. })));
    }

    #[test]
    fn test_invalid_status() {
        let mut config = config_with_routes(vec![stub_route("GET", "/foo")]);
        config.services[0].routes[0].status = 1000;
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidStatus { .. }));
    }

    #[test]
    fn test_bad_bind_address() {
        let mut config = DispatchConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::InvalidBindAddress { .. }
        ));
    }
}
