use std::process::ExitCode;

use archtools_core::error::CliError;

pub mod commands;
pub mod logging;

/// Maps a command result onto the process exit status, reporting any error
/// on stderr.
pub fn finish(result: Result<(), CliError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e.exit_code();
            tracing::debug!(target: "archtools.cli", error = ?e, code, "command failed");
            eprintln!("{e}");
            ExitCode::from(code)
        }
    }
}
