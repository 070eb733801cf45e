use std::io::Write;
use std::path::Path;

use clap::Parser;

use archtools_core::config::{load, BinaryConfig};
use archtools_core::error::CliError;
use archtools_core::{bin_to_dec, OverflowMode};

use super::cli::{GlobalArgs, OverflowArg};

#[derive(Parser, Debug, Clone)]
#[command(name = "binconvert", version, about = "Convert a binary numeral to decimal")]
pub struct Args {
    /// Binary digits, most significant first.
    #[arg(allow_hyphen_values = true)]
    pub binary: String,

    /// Behaviour past 64 bits. Overrides `binary.overflow` from config.
    #[arg(long, value_enum)]
    pub overflow: Option<OverflowArg>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Loads only the `[binary]` settings, then runs.
pub fn execute<F>(
    args: &Args,
    config_path: &Path,
    lookup: F,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    F: Fn(&str) -> Option<String>,
{
    let cfg = load::load_binary_from(config_path, lookup)?;
    run(args, &cfg, out)
}

pub fn run(args: &Args, cfg: &BinaryConfig, out: &mut impl Write) -> Result<(), CliError> {
    let overflow = args
        .overflow
        .map(OverflowMode::from)
        .unwrap_or(cfg.overflow);

    writeln!(out, "Binary number entered: {}", args.binary)?;
    let value = bin_to_dec(&args.binary, overflow)?;
    writeln!(out, "Decimal: {value}")?;
    Ok(())
}
