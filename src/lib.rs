//! Declarative dotfile deployment.
//!
//! Reads a YAML file naming a destination root and an ordered `copy` mapping
//! of source paths to destination subpaths, validates it, and copies each file
//! into place, creating directories as needed.
//!
//! The public API is organised into layers:
//!
//! - **[`paths`]** — `~` resolution against the home directory
//! - **[`config`]** — load and validate the YAML config
//! - **[`resources`]** — the single-file copy primitive
//! - **[`executor`]** — sequential, fail-fast copy run
//! - **[`commands`]** — top-level subcommand orchestration (`run`, `validate`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod paths;
pub mod resources;
