//! Logging setup
//! Installs the tracing subscriber used by the binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes console logging.
///
/// `RUST_LOG` takes precedence; otherwise the level follows the `-v` count
/// (warn, info, debug, trace).
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("netflix_insights={}", default_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
