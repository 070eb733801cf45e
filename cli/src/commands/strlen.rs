use std::io::Write;

use clap::Parser;

use archtools_core::error::CliError;
use archtools_core::{byte_length, string_length};

use super::cli::GlobalArgs;

#[derive(Parser, Debug, Clone)]
#[command(name = "strlen", version, about = "Length of a string")]
pub struct Args {
    #[arg(allow_hyphen_values = true)]
    pub input: String,

    /// Count UTF-8 bytes instead of characters.
    #[arg(long)]
    pub bytes: bool,

    #[command(flatten)]
    pub global: GlobalArgs,
}

pub fn run(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let len = if args.bytes {
        byte_length(&args.input)
    } else {
        string_length(&args.input)
    };
    writeln!(out, "Input: {}", args.input)?;
    writeln!(out, "Length: {len}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn exec(argv: &[&str]) -> String {
        let args = Args::try_parse_from(argv.iter().copied()).unwrap();
        let mut out = Vec::new();
        run(&args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_echo_and_length() {
        assert_eq!(exec(&["strlen", "hello"]), "Input: hello\nLength: 5\n");
        assert_eq!(exec(&["strlen", ""]), "Input: \nLength: 0\n");
    }

    #[test]
    fn bytes_flag() {
        assert_eq!(exec(&["strlen", "héllo"]), "Input: héllo\nLength: 5\n");
        assert_eq!(
            exec(&["strlen", "--bytes", "héllo"]),
            "Input: héllo\nLength: 6\n"
        );
    }

    #[test]
    fn wrong_argument_count_is_usage_error() {
        assert!(Args::try_parse_from(["strlen"]).is_err());
        assert!(Args::try_parse_from(["strlen", "a", "b"]).is_err());
    }
}
