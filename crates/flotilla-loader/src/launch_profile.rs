//! Probe for per-project launch configuration.
//!
//! A description referencing a buildable project may have a
//! `Properties/launchSettings.json` beside the project carrying named
//! launch profiles. The probe locates the profile named after the project
//! file's stem and surfaces it to the caller. By contract the probe is an
//! inert extension point: a discovered profile is reported, never folded
//! into the description's bindings, and an absent settings file or
//! profile is a no-op rather than an error.

use std::fs;
use std::io::ErrorKind;

use camino::Utf8Path;
use serde_json::Value;

use flotilla_model::ServiceDescription;

use crate::assembly::resolve_against;
use crate::error::LoaderError;

/// A launch profile discovered beside a referenced project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchProfile {
    /// Profile name, equal to the project file's stem.
    pub name: String,
    /// The profile's declared application URL list, when present.
    pub application_url: Option<String>,
}

/// Looks for a launch profile matching `description`'s project reference.
///
/// Returns `Ok(None)` when the description references no project, the
/// settings file is absent, or no profile matches the project stem. A
/// settings file that exists but cannot be read or parsed is an error.
pub fn probe_launch_profile(
    context_directory: &Utf8Path,
    description: &ServiceDescription,
) -> Result<Option<LaunchProfile>, LoaderError> {
    let Some(project_file) = &description.project_file else {
        return Ok(None);
    };
    let project_path = resolve_against(context_directory, project_file);
    let Some(stem) = project_path.file_stem() else {
        return Ok(None);
    };
    let Some(project_directory) = project_path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
    else {
        return Ok(None);
    };

    let settings_path = project_directory.join("Properties").join("launchSettings.json");
    let content = match fs::read_to_string(&settings_path) {
        Ok(content) => content,
        Err(source) if source.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(LoaderError::read(settings_path, source)),
    };
    let root: Value = serde_json::from_str(&content).map_err(|source| {
        LoaderError::LaunchSettings {
            path: settings_path.clone(),
            source,
        }
    })?;

    let profile = root.get("profiles").and_then(|profiles| profiles.get(stem));
    Ok(profile.map(|settings| LaunchProfile {
        name: stem.to_owned(),
        application_url: settings
            .get("applicationUrl")
            .and_then(Value::as_str)
            .map(str::to_owned),
    }))
}
