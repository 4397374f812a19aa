//! The user-authored description record for one service.

use camino::Utf8PathBuf;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::binding::ServiceBinding;

/// Replica count substituted when a description does not declare one.
pub(crate) const DEFAULT_REPLICAS: u32 = 1;

/// A raw, declarative service specification.
///
/// Descriptions arrive from a loader (a YAML document, or a future
/// project-based discovery pass) and are normalized during
/// [`Application`](crate::Application) assembly: an absent `replicas`
/// becomes 1 before the application is usable. No other validation is
/// performed at this layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescription {
    /// Service name, the application-wide map key. When two descriptions
    /// share a name the later one replaces the earlier in the map.
    pub name: String,
    /// Path to a buildable project, consumed only by loaders.
    #[serde(default)]
    pub project_file: Option<Utf8PathBuf>,
    /// Number of instances to run; defaulted to 1 at assembly time.
    #[serde(default)]
    pub replicas: Option<u32>,
    /// Static configuration pairs injected verbatim into the service's
    /// environment, in declaration order.
    #[serde(default)]
    pub configuration: IndexMap<String, String>,
    /// Ordered network bindings this service exposes, possibly empty.
    #[serde(default)]
    pub bindings: Vec<ServiceBinding>,
}

impl ServiceDescription {
    /// Creates a description with only a name, every other field empty.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
