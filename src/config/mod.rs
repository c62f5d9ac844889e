//! Deployment configuration: the `destination` root and ordered `copy` entries.
pub mod loader;
pub mod validation;

pub use loader::{DEFAULT_CONFIG_PATH, load_and_validate, parse_config};
pub use validation::ValidationWarning;

/// One `copy` entry: a source path and the destination subpath it is copied
/// to, both exactly as written in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyEntry {
    /// Source path (may contain `~`).
    pub source: String,
    /// Destination path relative to [`Config::destination`] (may contain `~`).
    pub destination: String,
}

impl CopyEntry {
    /// Create a copy entry.
    #[must_use]
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// A validated configuration.
///
/// Paths are kept unresolved; `~` expansion happens when the copy run starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root directory under which every copy destination is placed.
    pub destination: String,
    /// Copy entries in document order.
    pub copy: Vec<CopyEntry>,
}
