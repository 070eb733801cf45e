use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use archtools_cli::commands::binconvert;
use archtools_cli::{finish, logging};
use archtools_core::config::load::CONFIG_FILE;

fn main() -> ExitCode {
    let args = binconvert::Args::parse();
    logging::init(args.global.verbose);

    finish(binconvert::execute(
        &args,
        Path::new(CONFIG_FILE),
        |key| std::env::var(key).ok(),
        &mut std::io::stdout().lock(),
    ))
}
