//! Console/file logger backed by [`tracing`].
use std::path::PathBuf;

use super::subscriber::{DRY_RUN_TARGET, STAGE_TARGET};
use super::types::Log;
use super::utils::log_file_path;

/// Implement the methods of [`Log`] by delegating to inherent methods of the
/// same name on the implementing type.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Structured logger that emits every message as a [`tracing`] event.
///
/// Where the events go is decided by the subscriber installed with
/// [`init_subscriber`](super::subscriber::init_subscriber): the console, and
/// the persistent log at `$XDG_CACHE_HOME/dotfile-manager/<command>.log`.
#[derive(Debug)]
pub struct Logger {
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Create a new logger for `command`.
    ///
    /// Only records the log file path for display; the file itself is
    /// created by [`FileLayer`](super::subscriber::FileLayer).
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self {
            log_file: log_file_path(command),
        }
    }

    /// Create a logger whose log file lives at an explicit path.
    #[cfg(test)]
    pub(super) fn with_log_file(path: PathBuf) -> Self {
        Self {
            log_file: Some(path),
        }
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose; always
    /// written to the log file).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a dry-run action message.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: DRY_RUN_TARGET, "{msg}");
    }

    /// Record where the log file is, at debug level.
    pub fn print_log_location(&self) {
        if let Some(path) = &self.log_file {
            self.debug(&format!("log: {}", path.display()));
        }
    }
}

impl Log for Logger {
    forward_log_methods!(stage, info, debug, warn, error, dry_run);
}
