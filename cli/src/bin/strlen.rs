use std::process::ExitCode;

use clap::Parser;

use archtools_cli::commands::strlen;
use archtools_cli::{finish, logging};

fn main() -> ExitCode {
    let args = strlen::Args::parse();
    logging::init(args.global.verbose);

    finish(strlen::run(&args, &mut std::io::stdout().lock()))
}
