//! Run command implementation.
use anyhow::Result;

use crate::executor::{self, ExecuteOptions, ExecutionReport};
use crate::logging::Log;
use crate::paths::PathResolver;

/// Run the run command against the real home directory.
///
/// # Errors
///
/// Returns an error if the home directory is unknown, the configuration is
/// invalid, or any copy fails.
pub fn run(config_path: &str, dry_run: bool, log: &dyn Log) -> Result<()> {
    let resolver = PathResolver::from_env()?;
    deploy(config_path, &resolver, ExecuteOptions { dry_run }, log).map(|_| ())
}

/// Load and validate the configuration, then copy every entry.
///
/// Nothing is copied unless validation succeeds.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or is invalid, or
/// if a copy fails (later entries are then not attempted).
pub fn deploy(
    config_path: &str,
    resolver: &PathResolver,
    opts: ExecuteOptions,
    log: &dyn Log,
) -> Result<ExecutionReport> {
    let setup = super::CommandSetup::init(config_path, resolver, log)?;

    log.stage(if opts.dry_run {
        "Planning copies"
    } else {
        "Copying files"
    });
    let report = executor::execute(&setup.config, resolver, opts, log)?;

    if opts.dry_run {
        log.info(&format!("{} file(s) would be copied", report.planned));
    } else {
        log.info(&format!("{} file(s) copied", report.copied));
    }
    Ok(report)
}
