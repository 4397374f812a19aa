//! Assembly of service descriptions into the runtime application model.

use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use tracing::warn;

use crate::description::{DEFAULT_REPLICAS, ServiceDescription};
use crate::service::Service;

/// The in-memory aggregate of all services for one run.
///
/// An application is constructed exactly once from a finalized list of
/// descriptions and is immutable afterwards; the rest of the workspace
/// only ever reads it. Assembly normalizes defaults (absent `replicas`
/// becomes 1) but performs no semantic validation of bindings, project
/// paths, or configuration.
#[derive(Debug, Clone)]
pub struct Application {
    context_directory: Utf8PathBuf,
    services: IndexMap<String, Service>,
}

impl Application {
    /// Assembles an application from finalized descriptions.
    ///
    /// The service map holds one entry per distinct name, in description
    /// order. A duplicate name silently replaces the earlier entry (last
    /// write wins); a warning event records the shadowing so the data
    /// loss is observable, but the behaviour is kept because downstream
    /// tooling may rely on it.
    ///
    /// `context_directory` is the base against which loaders resolved
    /// relative paths; the model never reads the ambient working
    /// directory itself.
    #[must_use]
    pub fn new(
        context_directory: impl Into<Utf8PathBuf>,
        descriptions: Vec<ServiceDescription>,
    ) -> Self {
        let mut services = IndexMap::with_capacity(descriptions.len());
        for mut description in descriptions {
            description.replicas.get_or_insert(DEFAULT_REPLICAS);
            let name = description.name.clone();
            if services
                .insert(name.clone(), Service::new(description))
                .is_some()
            {
                warn!(service = %name, "duplicate service name, later description replaces the earlier one");
            }
        }
        Self {
            context_directory: context_directory.into(),
            services,
        }
    }

    /// An application with no services, awaiting later population.
    #[must_use]
    pub fn empty(context_directory: impl Into<Utf8PathBuf>) -> Self {
        Self::new(context_directory, Vec::new())
    }

    /// Base directory for resolving relative paths in descriptions.
    #[must_use]
    pub fn context_directory(&self) -> &Utf8Path {
        self.context_directory.as_path()
    }

    /// All services, keyed by name, in description order.
    #[must_use]
    pub const fn services(&self) -> &IndexMap<String, Service> {
        &self.services
    }

    /// Looks up one service by name.
    #[must_use]
    pub fn service(&self, name: &str) -> Option<&Service> {
        self.services.get(name)
    }
}
