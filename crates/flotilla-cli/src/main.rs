//! CLI entrypoint for the Flotilla document inspector.
//!
//! The binary delegates to [`flotilla_cli::run`], which initialises
//! telemetry, parses arguments, and renders command output to the
//! supplied streams.

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    flotilla_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
