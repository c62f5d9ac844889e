//! The [`Log`] trait shared by the loader, executor, and copy primitive.

/// Abstraction over logging backends.
///
/// [`Logger`](super::logger::Logger) emits tracing events; tests substitute an
/// in-memory recorder so they can assert on what was reported.
pub trait Log {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (suppressed on console unless verbose).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log a dry-run action message.
    fn dry_run(&self, msg: &str);
}

/// Severity of a captured log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Stage header.
    Stage,
    /// Informational message.
    Info,
    /// Debug message.
    Debug,
    /// Warning.
    Warn,
    /// Error.
    Error,
    /// Planned action in dry-run mode.
    DryRun,
}
