//! Assembly entry points converging on the model's constructor.
//!
//! The three entry points differ only in how the initial description list
//! and context directory are obtained; all of them finish by handing a
//! finalized `Vec<ServiceDescription>` to [`Application::new`].

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use flotilla_model::{Application, ServiceDescription};

use crate::error::LoaderError;
use crate::launch_profile::probe_launch_profile;

/// Loads a YAML service document and assembles the application.
///
/// `path` is resolved against `base`; the application's context directory
/// becomes the document's containing directory. Descriptions referencing
/// a buildable project are probed for launch profiles; a discovered
/// profile is surfaced as a debug event but does not alter bindings (the
/// enrichment extension point is inert by contract).
pub fn from_document(base: &Utf8Path, path: &Utf8Path) -> Result<Application, LoaderError> {
    let document_path = resolve_against(base, path);
    let content = fs::read_to_string(&document_path)
        .map_err(|source| LoaderError::read(document_path.clone(), source))?;
    let descriptions: Vec<ServiceDescription> = serde_saphyr::from_str(&content)
        .map_err(|error| LoaderError::parse(document_path.clone(), error.to_string()))?;
    let context_directory = containing_directory(&document_path)?;

    for description in &descriptions {
        if let Some(profile) = probe_launch_profile(&context_directory, description)? {
            debug!(
                service = %description.name,
                profile = %profile.name,
                "discovered launch profile"
            );
        }
    }

    debug!(
        document = %document_path,
        services = descriptions.len(),
        "loaded service document"
    );
    Ok(Application::new(context_directory, descriptions))
}

/// Assembles a placeholder application rooted at a single project.
///
/// The result has no services; the context directory is the project
/// file's containing directory. Later population is the orchestrator's
/// concern.
pub fn from_project(base: &Utf8Path, path: &Utf8Path) -> Result<Application, LoaderError> {
    placeholder_application(base, path)
}

/// Assembles a placeholder application rooted at a solution.
///
/// Identical contract to [`from_project`]; only what external tooling
/// later does with the path differs.
pub fn from_solution(base: &Utf8Path, path: &Utf8Path) -> Result<Application, LoaderError> {
    placeholder_application(base, path)
}

fn placeholder_application(base: &Utf8Path, path: &Utf8Path) -> Result<Application, LoaderError> {
    let full_path = resolve_against(base, path);
    let context_directory = containing_directory(&full_path)?;
    Ok(Application::empty(context_directory))
}

/// Joins `path` onto `base` unless it is already absolute.
pub(crate) fn resolve_against(base: &Utf8Path, path: &Utf8Path) -> Utf8PathBuf {
    if path.is_absolute() {
        path.to_owned()
    } else {
        base.join(path)
    }
}

fn containing_directory(path: &Utf8Path) -> Result<Utf8PathBuf, LoaderError> {
    path.parent()
        .filter(|parent| !parent.as_str().is_empty())
        .map(Utf8Path::to_path_buf)
        .ok_or_else(|| LoaderError::missing_parent(path))
}
