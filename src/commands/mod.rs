//! Top-level subcommand orchestration (`run`, `validate`).
pub mod run;
pub mod validate;

use anyhow::Result;

use crate::config::{self, Config};
use crate::logging::Log;
use crate::paths::PathResolver;

/// Shared state produced by the common command setup sequence.
///
/// Loads and validates the configuration and reports non-fatal warnings so
/// that each command does not have to repeat the boilerplate.
#[derive(Debug)]
pub struct CommandSetup {
    /// Configuration loaded for this invocation.
    pub config: Config,
}

impl CommandSetup {
    /// Load the configuration at `config_path` and print any warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, malformed, or
    /// fails validation.
    pub fn init(config_path: &str, resolver: &PathResolver, log: &dyn Log) -> Result<Self> {
        log.stage("Loading configuration");
        log.debug(&format!("home: {}", resolver.home().display()));
        let config = config::load_and_validate(config_path, resolver)?;

        log.info(&format!(
            "loaded {} copy entries from {}",
            config.copy.len(),
            resolver.resolve(config_path).display()
        ));
        log.debug(&format!("destination: {}", config.destination));

        let warnings = config.validate(resolver);
        if !warnings.is_empty() {
            log.warn(&format!(
                "found {} configuration warning(s):",
                warnings.len()
            ));
            for warning in &warnings {
                log.warn(&format!("  [{}]: {}", warning.item, warning.message));
            }
        }

        Ok(Self { config })
    }
}
