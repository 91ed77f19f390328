//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! dispatcher. All types derive Serde traits for deserialization from config
//! files.

use serde::{Deserialize, Serialize};

/// Root configuration for the dispatcher.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DispatchConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Services to register at startup.
    pub services: Vec<ServiceConfig>,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Request limit settings.
    pub limits: LimitConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// A service registered at startup, with its routes.
///
/// Each route answers with a fixed response; handlers with real behavior are
/// registered through the library API instead.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name (unique within the registry).
    pub name: String,

    /// Whether the service requests automatic ACL publication.
    /// Carried on the descriptor for the surrounding gateway layer; drives no
    /// behavior in this process.
    #[serde(default)]
    pub auto_acl: bool,

    /// Route definitions for this service.
    pub routes: Vec<StubRouteConfig>,
}

/// A single fixed-response route.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StubRouteConfig {
    /// HTTP method (GET, POST, PUT, DELETE).
    #[serde(default = "default_method")]
    pub method: String,

    /// Path pattern; segments starting with `:` bind path parameters
    /// (e.g., "/foo/:id").
    pub pattern: String,

    /// Response status code.
    #[serde(default = "default_status")]
    pub status: u16,

    /// Response body.
    #[serde(default)]
    pub body: String,

    /// Response content type.
    #[serde(default = "default_content_type")]
    pub content_type: String,
}

fn default_method() -> String {
    "GET".to_string()
}

fn default_status() -> u16 {
    200
}

fn default_content_type() -> String {
    "text/plain".to_string()
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Per-request handler timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Request limit configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitConfig {
    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_parses() {
        let config: DispatchConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(config.services.is_empty());
    }

    #[test]
    fn test_service_config_parses() {
        let raw = r#"
            [[services]]
            name = "fooservice"
            auto_acl = true

            [[services.routes]]
            pattern = "/foo/:id"
            body = "ok"

            [[services.routes]]
            method = "POST"
            pattern = "/foo"
            status = 201
        "#;
        let config: DispatchConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.services.len(), 1);

        let service = &config.services[0];
        assert_eq!(service.name, "fooservice");
        assert!(service.auto_acl);
        assert_eq!(service.routes.len(), 2);
        assert_eq!(service.routes[0].method, "GET");
        assert_eq!(service.routes[0].status, 200);
        assert_eq!(service.routes[0].body, "ok");
        assert_eq!(service.routes[1].method, "POST");
        assert_eq!(service.routes[1].status, 201);
    }
}
