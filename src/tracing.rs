//! Log output setup
//!
//! Two sinks: stderr, filtered by `RUST_LOG` and quiet (`warn`) by default,
//! and a daily log file under the config directory that always records
//! `debug`. Stderr keeps logs out of the painted output on stdout.
//!
//! Useful filters:
//! - `RUST_LOG=jinja_highlight::session=debug` for scheduling decisions
//! - `RUST_LOG=jinja_highlight::syntax=trace` for per-pass token counts

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE: &str = "jinja-highlight.log";

/// Install the global subscriber. Call once, at startup.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // Missing file output is not fatal
    let file = crate::config_paths::ensure_logs_dir()
        .map_err(|e| eprintln!("Warning: file logging disabled: {}", e))
        .ok()
        .map(|dir| {
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new("debug"))
        });

    tracing_subscriber::registry().with(console).with(file).init();
}
