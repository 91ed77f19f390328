//! Descriptor registration and lookup.

use http::Method;
use thiserror::Error;

use crate::registry::descriptor::{RouteDefinition, ServiceDescriptor};

/// Error raised when a descriptor cannot be registered.
///
/// Fatal to the registration call, not to the process; the caller decides
/// whether to abort startup.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The descriptor's name is already taken.
    #[error("service {0:?} is already registered")]
    DuplicateServiceName(String),

    /// A route collides with one registered earlier (same method and an
    /// indistinguishable pattern).
    #[error("route {method} {pattern} is already registered")]
    DuplicateRoute { method: Method, pattern: String },
}

/// Holds every registered service. Populated at startup, read-only afterward.
#[derive(Debug, Default)]
pub struct ServiceRegistry {
    descriptors: Vec<ServiceDescriptor>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor.
    ///
    /// All checks run before anything is stored, so a failed call leaves the
    /// registry exactly as it was. On success every route of the descriptor
    /// becomes visible at once.
    pub fn register(&mut self, descriptor: ServiceDescriptor) -> Result<(), RegistryError> {
        if self.lookup(descriptor.name()).is_some() {
            return Err(RegistryError::DuplicateServiceName(
                descriptor.name().to_string(),
            ));
        }

        for (i, route) in descriptor.routes().iter().enumerate() {
            let earlier_in_descriptor = descriptor.routes()[..i].iter();
            let already_registered = self.routes().map(|(_, r)| r);
            for other in earlier_in_descriptor.chain(already_registered) {
                if other.method() == route.method()
                    && other.pattern().same_shape(route.pattern())
                {
                    return Err(RegistryError::DuplicateRoute {
                        method: route.method().clone(),
                        pattern: route.pattern().as_str().to_string(),
                    });
                }
            }
        }

        tracing::info!(
            service = descriptor.name(),
            routes = descriptor.routes().len(),
            auto_acl = descriptor.auto_acl(),
            "Service registered"
        );

        self.descriptors.push(descriptor);
        Ok(())
    }

    /// Look up a descriptor by name. Pure read, never blocks.
    pub fn lookup(&self, name: &str) -> Option<&ServiceDescriptor> {
        self.descriptors.iter().find(|d| d.name() == name)
    }

    /// All registered services, in registration order.
    pub fn services(&self) -> &[ServiceDescriptor] {
        &self.descriptors
    }

    /// All registered routes with their service name, in registration order.
    pub fn routes(&self) -> impl Iterator<Item = (&str, &RouteDefinition)> {
        self.descriptors
            .iter()
            .flat_map(|d| d.routes().iter().map(move |r| (d.name(), r)))
    }
}
