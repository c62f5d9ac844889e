//! Copy executor: resolves every copy entry and copies it, in document order.
//!
//! The run is strictly sequential and stops at the first failure. Files copied
//! before the failure are left in place.
use std::path::PathBuf;

use crate::config::Config;
use crate::error::ExecutionError;
use crate::logging::Log;
use crate::paths::PathResolver;
use crate::resources::{FileCopy, copy_file};

/// One resolved copy: derived from a copy entry at run time, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOperation {
    /// Resolved source file.
    pub source: PathBuf,
    /// Resolved destination file.
    pub destination: PathBuf,
}

/// The resolved destination root and the operations derived from a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Resolved `destination` field.
    pub root: PathBuf,
    /// One operation per copy entry, in document order.
    pub operations: Vec<CopyOperation>,
}

/// Options for [`execute`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecuteOptions {
    /// Report what would be copied without touching the filesystem.
    pub dry_run: bool,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionReport {
    /// Number of copy entries processed.
    pub planned: usize,
    /// Number of files actually written (zero in dry-run mode).
    pub copied: usize,
}

/// Resolve the destination root and every copy entry.
///
/// Each destination subpath is resolved on its own and then joined onto the
/// resolved root, so `~` is expanded wherever it appears as a leading marker.
/// A subpath that resolves to an absolute path replaces the root.
#[must_use]
pub fn plan(config: &Config, resolver: &PathResolver) -> Plan {
    let root = resolver.resolve(&config.destination);
    let operations = config
        .copy
        .iter()
        .map(|entry| CopyOperation {
            source: resolver.resolve(&entry.source),
            destination: root.join(resolver.resolve(&entry.destination)),
        })
        .collect();
    Plan { root, operations }
}

/// Copy every entry of `config`, creating the destination root first.
///
/// # Errors
///
/// Returns [`ExecutionError::CreateRoot`] if the destination root cannot be
/// created, or [`ExecutionError::Copy`] for the first entry that fails; later
/// entries are not attempted.
pub fn execute(
    config: &Config,
    resolver: &PathResolver,
    opts: ExecuteOptions,
    log: &dyn Log,
) -> Result<ExecutionReport, ExecutionError> {
    let plan = plan(config, resolver);
    let planned = plan.operations.len();

    if opts.dry_run {
        if !plan.root.is_dir() {
            log.dry_run(&format!("would create {}", plan.root.display()));
        }
        for op in &plan.operations {
            let resource = FileCopy::new(op.source.clone(), op.destination.clone());
            resource.check_source()?;
            log.dry_run(&format!("would copy {}", resource.description()));
        }
        return Ok(ExecutionReport { planned, copied: 0 });
    }

    std::fs::create_dir_all(&plan.root).map_err(|source| ExecutionError::CreateRoot {
        path: plan.root.clone(),
        source,
    })?;
    log.debug(&format!("destination root: {}", plan.root.display()));

    for (index, op) in plan.operations.iter().enumerate() {
        log.debug(&format!("[{}/{planned}] {}", index + 1, op.source.display()));
        copy_file(&op.source, &op.destination, log)?;
    }

    Ok(ExecutionReport {
        planned,
        copied: planned,
    })
}
