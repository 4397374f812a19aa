//! Runtime wrapper around one service description.

use crate::binding::ServiceBinding;
use crate::description::{DEFAULT_REPLICAS, ServiceDescription};

/// The unit the orchestrator supervises: exactly one description, owned
/// for the application's lifetime and immutable after assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    description: ServiceDescription,
}

impl Service {
    /// Wraps a finalized description.
    #[must_use]
    pub const fn new(description: ServiceDescription) -> Self {
        Self { description }
    }

    /// The underlying description.
    #[must_use]
    pub const fn description(&self) -> &ServiceDescription {
        &self.description
    }

    /// The service name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.description.name
    }

    /// Replica count; always populated after assembly.
    #[must_use]
    pub fn replicas(&self) -> u32 {
        self.description.replicas.unwrap_or(DEFAULT_REPLICAS)
    }

    /// The service's declared bindings, in document order.
    #[must_use]
    pub fn bindings(&self) -> &[ServiceBinding] {
        &self.description.bindings
    }
}
