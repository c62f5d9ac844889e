//! Validate command implementation.
use anyhow::Result;

use crate::logging::Log;
use crate::paths::PathResolver;

/// Run the validate command against the real home directory.
///
/// # Errors
///
/// Returns an error if the home directory is unknown or the configuration is
/// invalid.
pub fn run(config_path: &str, log: &dyn Log) -> Result<()> {
    let resolver = PathResolver::from_env()?;
    validate(config_path, &resolver, log)
}

/// Load and validate the configuration without copying anything.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or is invalid.
pub fn validate(config_path: &str, resolver: &PathResolver, log: &dyn Log) -> Result<()> {
    let setup = super::CommandSetup::init(config_path, resolver, log)?;
    log.info(&format!(
        "configuration is valid ({} entries)",
        setup.config.copy.len()
    ));
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::logging::{Level, MemoryLog};
    use std::fs;

    #[test]
    fn valid_config_passes() {
        let home = tempfile::tempdir().unwrap();
        fs::write(home.path().join("a.txt"), "a").unwrap();
        fs::write(
            home.path().join("conf.yaml"),
            "destination: ~/out\ncopy:\n  ~/a.txt: a.txt\n",
        )
        .unwrap();
        let log = MemoryLog::new();

        validate("~/conf.yaml", &PathResolver::new(home.path()), &log).unwrap();

        assert!(log.messages(Level::Warn).is_empty());
        assert!(!home.path().join("out").exists(), "validate must not copy");
    }

    #[test]
    fn missing_source_is_only_a_warning() {
        let home = tempfile::tempdir().unwrap();
        fs::write(
            home.path().join("conf.yaml"),
            "destination: ~/out\ncopy:\n  ~/gone.txt: gone.txt\n",
        )
        .unwrap();
        let log = MemoryLog::new();

        validate("~/conf.yaml", &PathResolver::new(home.path()), &log).unwrap();

        let warnings = log.messages(Level::Warn);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[1].contains("~/gone.txt"));
    }

    #[test]
    fn missing_copy_fails() {
        let home = tempfile::tempdir().unwrap();
        fs::write(home.path().join("conf.yaml"), "destination: ~/out\n").unwrap();

        let err = validate(
            "~/conf.yaml",
            &PathResolver::new(home.path()),
            &MemoryLog::new(),
        )
        .unwrap_err();

        insta::assert_snapshot!(err.to_string(), @"Missing required field 'copy'");
    }
}
