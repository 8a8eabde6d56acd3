// logging.rs - File-only tracing setup
//
// Stdout is the drawing surface and stderr carries usage/diagnostics, so log
// events never go to the terminal. They are written to a file only when
// CGOL_LOG_DIR is set; otherwise no subscriber is installed at all.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_DIR_ENV: &str = "CGOL_LOG_DIR";
pub const LOG_FILE_NAME: &str = "cgol.log";
const DEFAULT_FILTER: &str = "cgol=info";

/// Directory named by `CGOL_LOG_DIR`, if any.
pub fn log_dir_from_env() -> Option<PathBuf> {
    std::env::var_os(LOG_DIR_ENV)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
}

/// Installs the global subscriber writing to `<dir>/cgol.log`.
///
/// The returned guard flushes pending events on drop and must outlive every
/// log call. Precedence for the filter: RUST_LOG > "cgol=info".
pub fn init(dir: Option<&Path>) -> Option<WorkerGuard> {
    let dir = dir?;
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("Warning: Could not create log directory {:?}: {}", dir, e);
        return None;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init();

    // Another subscriber already owns the process (tests); keep quiet.
    installed.is_ok().then_some(guard)
}
