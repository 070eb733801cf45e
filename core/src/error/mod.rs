mod binary_error;
mod cli_error;
mod config_error;
mod linecount_error;
mod vm_error;

pub use binary_error::BinaryError;
pub use cli_error::CliError;
pub use config_error::ConfigError;
pub use linecount_error::LineCountError;
pub use vm_error::VmError;
