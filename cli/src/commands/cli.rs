use clap::Args as ClapArgs;

use archtools_core::OverflowMode;

/// Flags shared by every binary.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowArg {
    Wrap,
    Reject,
}

impl From<OverflowArg> for OverflowMode {
    fn from(arg: OverflowArg) -> Self {
        match arg {
            OverflowArg::Wrap => OverflowMode::Wrap,
            OverflowArg::Reject => OverflowMode::Reject,
        }
    }
}
