use std::process::ExitCode;

use clap::Parser;

use archtools_cli::commands::linecount;
use archtools_cli::{finish, logging};

fn main() -> ExitCode {
    let args = linecount::Args::parse();
    logging::init(args.global.verbose);

    finish(linecount::run(&args, &mut std::io::stdout().lock()))
}
