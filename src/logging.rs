//! Diagnostics through `tracing`, written to stderr.
//!
//! - `warn`: a document in a batch failed
//! - `info`: mapping size, per-document progress
//! - `debug`: every resolved or unmatched URL, duplicate records in the backup
//!
//! `RUST_LOG` overrides the level picked from the command line.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Map `-v` / `-q` counts onto a level. The default only shows warnings, so the coloured summary
/// stays readable.
pub fn level_from_flags(verbose: u8, quiet: u8) -> Level {
    match i16::from(verbose) - i16::from(quiet) {
        i16::MIN..=-1 => Level::ERROR,
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn init(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pwc2arxiv={}", level.as_str().to_ascii_lowercase())));
    let layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false);
    // A second initialisation (only possible in tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
