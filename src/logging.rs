//! Thin logging wrapper around `env_logger`, matching the rest of the
//! crate's preference for the `log` facade over ad hoc `eprintln!`.

use log::{debug, error, info, log_enabled, trace, warn, Level};

/// Initializes the logger with the `env_logger` crate. Safe to call more
/// than once; only the first call takes effect.
pub fn init_logger() {
    let _ = env_logger::try_init();
}

/// Logs an error message.
pub fn log_error(message: &str) {
    if log_enabled!(Level::Error) {
        error!("{message}");
    }
}

/// Logs a warning message.
pub fn log_warn(message: &str) {
    if log_enabled!(Level::Warn) {
        warn!("{message}");
    }
}

/// Logs an informational message.
pub fn log_info(message: &str) {
    if log_enabled!(Level::Info) {
        info!("{message}");
    }
}

/// Logs a debug message.
pub fn log_debug(message: &str) {
    if log_enabled!(Level::Debug) {
        debug!("{message}");
    }
}

/// Logs a trace message, used for per-group dispatch detail.
pub fn log_trace(message: &str) {
    if log_enabled!(Level::Trace) {
        trace!("{message}");
    }
}
