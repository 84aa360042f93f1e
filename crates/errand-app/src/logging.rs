//! Logging configuration and initialization

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing for the binary. `RUST_LOG` wins over `-v`.
///
/// Logs go to stderr so JSON output on stdout stays parseable.
pub fn init_logging(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));

    let initialized = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 2)
        .try_init()
        .is_ok();

    if initialized {
        debug!("errand-quote started with verbosity level: {}", verbose);
    }
}
