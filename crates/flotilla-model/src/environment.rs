//! Environment injection: the dependency-wiring protocol.
//!
//! Before a service instance starts, the launcher asks the application to
//! populate that instance's environment. The computed block contains the
//! target's own static configuration plus, for every binding of every
//! service in the application, a reachability descriptor under a
//! deterministic variable name. The naming scheme is the contract: it must
//! stay stable and collision-free across arbitrary service graphs, so the
//! suffix spellings are an enumerated table rather than ad hoc formatting.

use std::collections::BTreeMap;

use crate::application::Application;
use crate::binding::ResolvedBinding;
use crate::service::Service;

/// Variable-name prefix for pre-formed connection strings.
const CONNECTION_STRING_PREFIX: &str = "CONNECTIONSTRING__";

/// The binding attributes emitted under dual variable spellings.
///
/// Each attribute is written twice, once per separator style, to satisfy
/// two downstream naming conventions at the same time; both spellings are
/// always emitted together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingAttribute {
    /// Transport or application protocol tag.
    Protocol,
    /// Endpoint port.
    Port,
    /// Host name, emitted for every binding.
    Host,
}

impl BindingAttribute {
    /// Every attribute, in emission order.
    pub const ALL: [Self; 3] = [Self::Protocol, Self::Port, Self::Host];

    /// The two suffix spellings for this attribute, double-underscore
    /// separators first.
    #[must_use]
    pub const fn suffixes(self) -> [&'static str; 2] {
        match self {
            Self::Protocol => ["__SERVICE__PROTOCOL", "_SERVICE_PROTOCOL"],
            Self::Port => ["__SERVICE__PORT", "_SERVICE_PORT"],
            Self::Host => ["__SERVICE__HOST", "_SERVICE_HOST"],
        }
    }
}

impl Application {
    /// Emits every environment variable one instance of `service` needs,
    /// through the caller-supplied sink.
    ///
    /// The emission order is: the target's configuration pairs first, in
    /// declaration order, then the reachability variables for every
    /// service in map order (the target and self-references included).
    /// Each binding is emitted under its qualified name
    /// (`UPPER(service)__UPPER(binding)`, or the bare upper-cased service
    /// name for the default binding); a service with exactly one binding
    /// additionally re-emits that binding under the bare service name, so
    /// the common single-binding case is addressable without knowing the
    /// binding's name. The sink must tolerate repeated writes of the same
    /// key with identical content.
    ///
    /// Missing attributes degrade to defaults instead of failing: a
    /// binding with no fields at all still yields its two host variables
    /// set to `localhost`. This is a pure read over the service map; it
    /// never errors and terminates in one pass over all bindings.
    pub fn populate_environment(&self, service: &Service, mut set: impl FnMut(&str, &str)) {
        for (key, value) in &service.description().configuration {
            set(key, value);
        }

        for dependency in self.services().values() {
            let service_name = dependency.name().to_uppercase();
            for binding in dependency.bindings() {
                let variable_base = match binding.effective_name() {
                    Some(binding_name) => {
                        format!("{service_name}__{}", binding_name.to_uppercase())
                    }
                    None => service_name.clone(),
                };
                emit_binding(&variable_base, &binding.resolve(), &mut set);
            }

            // Single-binding shortcut: augment the qualified emission with
            // a bare-name one rather than replacing it.
            if let [binding] = dependency.bindings() {
                emit_binding(&service_name, &binding.resolve(), &mut set);
            }
        }
    }

    /// Collects the environment for the named service into a key-sorted
    /// list, later writes to a key replacing earlier ones.
    ///
    /// Returns `None` when the application has no service by that name.
    #[must_use]
    pub fn collect_environment(&self, name: &str) -> Option<Vec<(String, String)>> {
        let service = self.service(name)?;
        let mut variables = BTreeMap::new();
        self.populate_environment(service, |key, value| {
            variables.insert(key.to_owned(), value.to_owned());
        });
        Some(variables.into_iter().collect())
    }
}

fn emit_binding(variable_base: &str, binding: &ResolvedBinding, set: &mut impl FnMut(&str, &str)) {
    if let Some(connection_string) = &binding.connection_string {
        set(
            &format!("{CONNECTION_STRING_PREFIX}{variable_base}"),
            connection_string,
        );
    }
    if let Some(protocol) = &binding.protocol {
        emit_dual(variable_base, BindingAttribute::Protocol, protocol, set);
    }
    if let Some(port) = binding.port {
        emit_dual(variable_base, BindingAttribute::Port, &port.to_string(), set);
    }
    emit_dual(variable_base, BindingAttribute::Host, &binding.host, set);
}

fn emit_dual(
    variable_base: &str,
    attribute: BindingAttribute,
    value: &str,
    set: &mut impl FnMut(&str, &str),
) {
    for suffix in attribute.suffixes() {
        set(&format!("{variable_base}{suffix}"), value);
    }
}
