//! Error types for document loading and assembly.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading a service document or probing launch
/// settings.
///
/// Absent optional inputs (no launch settings beside a project, no
/// matching profile) are never errors; only present-but-unreadable or
/// present-but-malformed inputs surface here.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Reading a document or settings file from disk failed.
    #[error("failed to read '{path}': {source}")]
    Read {
        /// Path that could not be read.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The service document was not valid YAML for the expected shape.
    #[error("failed to parse service document '{path}': {message}")]
    Parse {
        /// Path of the offending document.
        path: Utf8PathBuf,
        /// Parser diagnostic.
        message: String,
    },
    /// The path carries no containing directory to use as context.
    #[error("path '{path}' has no containing directory")]
    MissingParent {
        /// Path lacking a parent component.
        path: Utf8PathBuf,
    },
    /// A launch-settings file was present but not valid JSON.
    #[error("failed to parse launch settings '{path}': {source}")]
    LaunchSettings {
        /// Path of the offending settings file.
        path: Utf8PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
}

impl LoaderError {
    /// Creates a [`LoaderError::Read`] error.
    #[must_use]
    pub fn read(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a [`LoaderError::Parse`] error.
    #[must_use]
    pub fn parse(path: impl Into<Utf8PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a [`LoaderError::MissingParent`] error.
    #[must_use]
    pub fn missing_parent(path: impl Into<Utf8PathBuf>) -> Self {
        Self::MissingParent { path: path.into() }
    }
}
