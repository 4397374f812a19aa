//! CLI argument definitions for the Flotilla inspector.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

/// Command-line interface for inspecting declarative service documents.
#[derive(Parser, Debug)]
#[command(name = "flotilla", version, about = "Inspects declarative service documents")]
pub(crate) struct Cli {
    /// The inspection command to run.
    #[command(subcommand)]
    pub(crate) command: CliCommand,
}

/// Inspection commands over a service document.
#[derive(Subcommand, Debug)]
pub(crate) enum CliCommand {
    /// Lists the services declared in a document.
    Services {
        /// Path to the service document, resolved against the invocation
        /// directory when relative.
        document: Utf8PathBuf,
    },
    /// Prints the environment block computed for one service instance.
    Env {
        /// Path to the service document, resolved against the invocation
        /// directory when relative.
        document: Utf8PathBuf,
        /// Name of the target service.
        #[arg(long)]
        service: String,
    },
}
