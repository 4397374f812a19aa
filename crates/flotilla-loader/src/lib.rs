//! Loads declarative service documents into the Flotilla application model.
//!
//! The model crate deliberately performs no I/O; this crate is the
//! plumbing around it. It reads a YAML service document, deserializes the
//! description records, resolves the application's context directory, and
//! hands the finalized list to [`flotilla_model::Application`]. It also
//! provides the placeholder entry points for project- and solution-rooted
//! applications and the launch-profile probe used to enrich descriptions
//! that reference buildable projects.
//!
//! Every entry point takes an explicit base directory; nothing in this
//! crate reads the ambient working directory.

mod assembly;
mod error;
mod launch_profile;

pub use assembly::{from_document, from_project, from_solution};
pub use error::LoaderError;
pub use launch_profile::{LaunchProfile, probe_launch_profile};
