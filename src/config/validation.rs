//! Non-fatal checks run after a configuration passes structural validation.
use std::collections::HashMap;
use std::path::Path;

use super::Config;
use crate::executor;
use crate::paths::PathResolver;

/// A validation warning detected after loading the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The copy entry (source key) that triggered the warning.
    pub item: String,
    /// Human-readable warning message.
    pub message: String,
}

impl ValidationWarning {
    #[must_use]
    fn new(item: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            message: message.into(),
        }
    }
}

impl Config {
    /// Check copy entries against the filesystem.
    ///
    /// Reports sources that do not exist or are directories, and entries whose
    /// destinations resolve to the same file (the later one wins at run time).
    #[must_use]
    pub fn validate(&self, resolver: &PathResolver) -> Vec<ValidationWarning> {
        let plan = executor::plan(self, resolver);
        let mut warnings = Vec::new();
        let mut seen: HashMap<&Path, &str> = HashMap::new();

        for (entry, op) in self.copy.iter().zip(&plan.operations) {
            if !op.source.exists() {
                warnings.push(ValidationWarning::new(
                    &entry.source,
                    format!("source file does not exist: {}", op.source.display()),
                ));
            } else if op.source.is_dir() {
                warnings.push(ValidationWarning::new(
                    &entry.source,
                    format!("source is a directory: {}", op.source.display()),
                ));
            }

            if let Some(previous) = seen.insert(op.destination.as_path(), &entry.source) {
                warnings.push(ValidationWarning::new(
                    &entry.source,
                    format!(
                        "destination {} is also written by '{previous}'",
                        op.destination.display()
                    ),
                ));
            }
        }

        warnings
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::CopyEntry;
    use std::fs;

    #[test]
    fn no_warnings_when_sources_exist() {
        let home = tempfile::tempdir().unwrap();
        fs::write(home.path().join("a.txt"), "a").unwrap();
        let config = Config {
            destination: "~/out".to_string(),
            copy: vec![CopyEntry::new("~/a.txt", "a.txt")],
        };
        assert!(config.validate(&PathResolver::new(home.path())).is_empty());
    }

    #[test]
    fn warns_about_missing_source() {
        let home = tempfile::tempdir().unwrap();
        let config = Config {
            destination: "~/out".to_string(),
            copy: vec![CopyEntry::new("~/missing.txt", "m.txt")],
        };
        let warnings = config.validate(&PathResolver::new(home.path()));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].item, "~/missing.txt");
        assert!(warnings[0].message.contains("does not exist"));
    }

    #[test]
    fn warns_about_directory_source() {
        let home = tempfile::tempdir().unwrap();
        fs::create_dir(home.path().join("dir")).unwrap();
        let config = Config {
            destination: "~/out".to_string(),
            copy: vec![CopyEntry::new("~/dir", "dir")],
        };
        let warnings = config.validate(&PathResolver::new(home.path()));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("is a directory"));
    }

    #[test]
    fn warns_about_colliding_destinations() {
        let home = tempfile::tempdir().unwrap();
        fs::write(home.path().join("a"), "a").unwrap();
        fs::write(home.path().join("b"), "b").unwrap();
        let config = Config {
            destination: "~/out".to_string(),
            copy: vec![
                CopyEntry::new("~/a", "same.txt"),
                CopyEntry::new("~/b", "same.txt"),
            ],
        };
        let warnings = config.validate(&PathResolver::new(home.path()));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].item, "~/b");
        assert!(warnings[0].message.contains("'~/a'"));
    }
}
