//! Inspection commands over Flotilla service documents.
//!
//! The binary loads a YAML service document through `flotilla-loader` and
//! either lists the assembled services or prints the environment block
//! the model computes for one service instance. It never launches
//! anything; the environment output exists so operators can see exactly
//! what a launcher would inject.

mod cli;
mod telemetry;

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, anyhow};
use camino::Utf8PathBuf;
use clap::Parser;

use flotilla_loader::from_document;

use crate::cli::{Cli, CliCommand};

/// Parses arguments and runs the selected command, rendering output and
/// diagnostics to the supplied streams.
pub fn run(
    args: impl IntoIterator<Item = OsString>,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> ExitCode {
    telemetry::init();
    let parsed = match Cli::try_parse_from(args) {
        Ok(parsed) => parsed,
        Err(error) => return render_parse_error(&error, stdout, stderr),
    };
    match execute(&parsed, stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "flotilla: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn render_parse_error(
    error: &clap::Error,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> ExitCode {
    if error.use_stderr() {
        let _ = write!(stderr, "{error}");
        ExitCode::from(2)
    } else {
        // Help and version output belong on stdout and exit cleanly.
        let _ = write!(stdout, "{error}");
        ExitCode::SUCCESS
    }
}

fn execute(parsed: &Cli, stdout: &mut impl Write) -> anyhow::Result<()> {
    let base = invocation_directory()?;
    match &parsed.command {
        CliCommand::Services { document } => {
            let application = from_document(&base, document)?;
            for service in application.services().values() {
                writeln!(
                    stdout,
                    "{} replicas={} bindings={}",
                    service.name(),
                    service.replicas(),
                    service.bindings().len()
                )?;
            }
            Ok(())
        }
        CliCommand::Env { document, service } => {
            let application = from_document(&base, document)?;
            let variables = application
                .collect_environment(service)
                .ok_or_else(|| anyhow!("no service named '{service}' in '{document}'"))?;
            for (key, value) in variables {
                writeln!(stdout, "{key}={value}")?;
            }
            Ok(())
        }
    }
}

/// The model never reads ambient process state; the outermost plumbing
/// layer resolves the invocation directory once and passes it down.
fn invocation_directory() -> anyhow::Result<Utf8PathBuf> {
    let current =
        std::env::current_dir().context("failed to determine the invocation directory")?;
    Utf8PathBuf::from_path_buf(current)
        .map_err(|path| anyhow!("invocation directory '{}' is not UTF-8", path.display()))
}
