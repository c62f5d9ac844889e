//! In-memory [`Log`] backend.
use std::cell::RefCell;

use super::types::{Level, Log};

/// Records every message instead of printing it.
///
/// Used by callers that embed the copy pipeline and want to inspect what was
/// reported, and by tests that assert on diagnostics.
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: RefCell<Vec<(Level, String)>>,
}

impl MemoryLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded entries in emission order.
    #[must_use]
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.borrow().clone()
    }

    /// Messages recorded at `level`, in emission order.
    #[must_use]
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, level: Level, msg: &str) {
        self.entries.borrow_mut().push((level, msg.to_string()));
    }
}

impl Log for MemoryLog {
    fn stage(&self, msg: &str) {
        self.push(Level::Stage, msg);
    }

    fn info(&self, msg: &str) {
        self.push(Level::Info, msg);
    }

    fn debug(&self, msg: &str) {
        self.push(Level::Debug, msg);
    }

    fn warn(&self, msg: &str) {
        self.push(Level::Warn, msg);
    }

    fn error(&self, msg: &str) {
        self.push(Level::Error, msg);
    }

    fn dry_run(&self, msg: &str) {
        self.push(Level::DryRun, msg);
    }
}
