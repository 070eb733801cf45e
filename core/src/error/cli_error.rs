// core/src/error/cli_error.rs
use thiserror::Error;

use super::{BinaryError, ConfigError, LineCountError, VmError};

/// Top-level error surfaced by the binaries.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Binary(#[from] BinaryError),

    #[error(transparent)]
    LineCount(#[from] LineCountError),

    #[error(transparent)]
    Vm(#[from] VmError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    ///
    /// A file that cannot be read maps to 255, the unsigned form of the
    /// conventional `-1` return. Everything else is `EXIT_FAILURE`.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::LineCount(_) => 255,
            _ => 1,
        }
    }
}
