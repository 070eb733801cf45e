use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use archtools_core::count_file;
use archtools_core::error::CliError;

use super::cli::GlobalArgs;

#[derive(Parser, Debug, Clone)]
#[command(name = "linecount", version, about = "Count newline bytes in a file")]
pub struct Args {
    pub file: PathBuf,

    #[command(flatten)]
    pub global: GlobalArgs,
}

pub fn run(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let count = count_file(&args.file)?;
    writeln!(out, "Lines count: {count}")?;
    Ok(())
}
