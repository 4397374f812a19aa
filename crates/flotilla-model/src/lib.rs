//! Core application model for the Flotilla service orchestrator.
//!
//! This crate turns a declarative list of service descriptions into an
//! immutable runtime application model and derives the environment
//! variables that let each service instance discover every other
//! service's network bindings without a runtime registry or DNS.
//!
//! # Core types
//!
//! - [`ServiceBinding`] and [`ResolvedBinding`] — a named network endpoint
//!   and its defaulted, emission-ready form
//! - [`ServiceDescription`] — the user-authored record for one service
//! - [`Service`] — the runtime wrapper tracked by the application
//! - [`Application`] — the assembled service map and the environment
//!   injection algorithm
//! - [`BindingAttribute`] — the enumerated dual-spelling variable contract
//!
//! The crate performs no I/O: loading description documents from disk is
//! the `flotilla-loader` crate's concern, and launching processes with the
//! computed environment belongs to whichever supervisor embeds this model.

mod application;
mod binding;
mod description;
mod environment;
mod service;

pub use application::Application;
pub use binding::{ResolvedBinding, ServiceBinding};
pub use description::ServiceDescription;
pub use environment::BindingAttribute;
pub use service::Service;

#[cfg(test)]
mod tests;
