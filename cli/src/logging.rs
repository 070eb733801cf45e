use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins when set; otherwise `-v` raises the level from `warn`.
/// Logs go to stderr so stdout carries only results.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        })
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
