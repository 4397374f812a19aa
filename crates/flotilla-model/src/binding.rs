//! Network binding descriptors for a single service.
//!
//! A [`ServiceBinding`] is the user-authored form with every field
//! optional; [`ResolvedBinding`] is the defaulted form consumed by the
//! environment injection algorithm. Keeping the defaulting in one pure
//! function means the fallback rules can be tested without running the
//! emission logic.

use serde::{Deserialize, Serialize};

/// Host name substituted when a binding does not name one.
pub const DEFAULT_HOST: &str = "localhost";

/// A single named network endpoint exposed by a service.
///
/// Bindings are declared in the service document; every field is optional
/// and absent fields fall back to defaults at resolution time rather than
/// failing. A binding whose `name` is absent or empty is the service's
/// default binding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceBinding {
    /// Identifier unique within the owning service's binding list; absent
    /// or empty means the default binding.
    pub name: Option<String>,
    /// Transport or application protocol tag, for example `http`.
    pub protocol: Option<String>,
    /// Host name; resolution substitutes [`DEFAULT_HOST`] when absent.
    pub host: Option<String>,
    /// Endpoint port.
    pub port: Option<u16>,
    /// Pre-formed endpoint reference; when present it takes precedence in
    /// the emitted connection-string variable for this binding.
    pub connection_string: Option<String>,
}

impl ServiceBinding {
    /// Returns the binding name when it is present and non-empty.
    #[must_use]
    pub fn effective_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Applies the defaulting rules, producing the form the environment
    /// injection algorithm emits from.
    #[must_use]
    pub fn resolve(&self) -> ResolvedBinding {
        ResolvedBinding {
            // Only an absent host falls back; name, protocol, and
            // connection string additionally treat empty strings as
            // absent.
            host: self
                .host
                .clone()
                .unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port: self.port,
            protocol: self.protocol.clone().filter(|value| !value.is_empty()),
            connection_string: self
                .connection_string
                .clone()
                .filter(|value| !value.is_empty()),
        }
    }
}

/// A binding with defaults applied, ready for emission.
///
/// `host` is always populated; the remaining fields stay optional because
/// their variables are only emitted when the author supplied them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBinding {
    /// Host name, [`DEFAULT_HOST`] when the binding left it unset.
    pub host: String,
    /// Endpoint port, when declared.
    pub port: Option<u16>,
    /// Protocol tag, when declared and non-empty.
    pub protocol: Option<String>,
    /// Pre-formed endpoint reference, when declared and non-empty.
    pub connection_string: Option<String>,
}
