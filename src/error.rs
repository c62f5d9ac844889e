//! Domain-specific error types for the dotfile manager.
//!
//! Internal modules return typed errors ([`ConfigError`], [`CopyError`], …)
//! while command handlers at the CLI boundary convert them to
//! [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! PathError       — home directory resolution
//! ConfigError     — loading and validating the YAML config
//! ExecutionError  — creating the destination root, copying
//! └── Copy(CopyError) — a single file copy
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Errors from `~` resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Neither `HOME` nor `USERPROFILE` is set to a non-empty value.
    #[error("Cannot resolve home directory: HOME is unset or empty")]
    HomeUnresolved,
}

/// Errors that arise from loading and validating the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The resolved configuration path does not exist.
    #[error("\"{}\" does not exist", .0.display())]
    NotFound(PathBuf),

    /// The configuration path exists but is not a regular file.
    #[error("\"{}\" is not a file", .0.display())]
    NotAFile(PathBuf),

    /// An I/O error occurred while reading the configuration file.
    #[error("IO error reading config file {}: {source}", .path.display())]
    Io {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not well-formed YAML.
    #[error("Invalid YAML in {}: {source}", .path.display())]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Underlying parser error.
        source: serde_yaml::Error,
    },

    /// A required top-level key is absent.
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    /// A field holds a value of the wrong shape (e.g. `copy` is a list).
    #[error("Invalid value for '{field}': {message}")]
    InvalidField {
        /// Name of the offending field or copy entry.
        field: String,
        /// Human-readable description of what was expected.
        message: String,
    },

    /// A copy entry maps to an empty destination.
    #[error("Copy entry '{0}' has an empty destination")]
    EmptyDestination(String),
}

/// Errors from copying a single file.
#[derive(Error, Debug)]
pub enum CopyError {
    /// The source file does not exist.
    #[error("Source file does not exist {} -> {}", .src.display(), .dest.display())]
    SourceMissing {
        /// Resolved source path.
        src: PathBuf,
        /// Resolved destination path.
        dest: PathBuf,
    },

    /// The source exists but is a directory.
    #[error("Source is not a file {} -> {}", .src.display(), .dest.display())]
    SourceNotAFile {
        /// Resolved source path.
        src: PathBuf,
        /// Resolved destination path.
        dest: PathBuf,
    },

    /// The destination's parent directory could not be created.
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Reading the source or writing the destination failed.
    #[error("Failed to copy {} -> {}: {source}", .src.display(), .dest.display())]
    Io {
        /// Resolved source path.
        src: PathBuf,
        /// Resolved destination path.
        dest: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that abort a copy run.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The destination root could not be created.
    #[error("Failed to create destination root {}: {source}", .path.display())]
    CreateRoot {
        /// Resolved destination root.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A copy entry failed; later entries were not attempted.
    #[error(transparent)]
    Copy(#[from] CopyError),
}
