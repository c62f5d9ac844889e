//! YAML configuration loading and structural validation.
use std::path::Path;

use serde_yaml::{Mapping, Value};

use super::{Config, CopyEntry};
use crate::error::ConfigError;
use crate::paths::PathResolver;

/// Config file used when neither `--config` nor `DOTFILE_MANAGER_CONFIG` is given.
pub const DEFAULT_CONFIG_PATH: &str = "~/.manager_config.yaml";

/// Load the configuration at `path` (which may start with `~`) and check that
/// it has a `destination`, a `copy` mapping, and no empty copy destinations.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] or [`ConfigError::NotAFile`] if the
/// resolved path is missing or is a directory, [`ConfigError::Io`] if it
/// cannot be read, [`ConfigError::Parse`] for malformed YAML, and the
/// validation variants described on [`parse_config`].
pub fn load_and_validate(path: &str, resolver: &PathResolver) -> Result<Config, ConfigError> {
    let path = resolver.resolve(path);
    if !path.exists() {
        return Err(ConfigError::NotFound(path));
    }
    if !path.is_file() {
        return Err(ConfigError::NotAFile(path));
    }

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;

    parse_config(&path, &content)
}

/// Parse and validate YAML `content` read from `origin`.
///
/// # Errors
///
/// - [`ConfigError::Parse`] if `content` is not valid YAML (duplicate keys
///   included).
/// - [`ConfigError::MissingField`] if `destination` or `copy` is absent or
///   `null`; an empty document is missing both.
/// - [`ConfigError::InvalidField`] if a field has a non-scalar value or
///   `copy` is not a mapping.
/// - [`ConfigError::EmptyDestination`] if a copy entry has an empty value.
pub fn parse_config(origin: &Path, content: &str) -> Result<Config, ConfigError> {
    if is_empty_document(content) {
        return Err(ConfigError::MissingField("destination"));
    }

    let document: Value = serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;

    let Value::Mapping(root) = document else {
        return Err(ConfigError::MissingField("destination"));
    };

    let destination = match root.get("destination") {
        None | Some(Value::Null) => return Err(ConfigError::MissingField("destination")),
        Some(value) => scalar_text(value).ok_or_else(|| ConfigError::InvalidField {
            field: "destination".to_string(),
            message: "expected a path string".to_string(),
        })?,
    };

    let copy = match root.get("copy") {
        None | Some(Value::Null) => return Err(ConfigError::MissingField("copy")),
        Some(Value::Mapping(entries)) => copy_entries(entries)?,
        Some(_) => {
            return Err(ConfigError::InvalidField {
                field: "copy".to_string(),
                message: "expected a mapping of source to destination".to_string(),
            });
        }
    };

    Ok(Config { destination, copy })
}

fn copy_entries(entries: &Mapping) -> Result<Vec<CopyEntry>, ConfigError> {
    entries
        .iter()
        .map(|(key, value)| {
            let source = scalar_text(key).ok_or_else(|| ConfigError::InvalidField {
                field: "copy".to_string(),
                message: format!("source path must be a string, found {}", kind(key)),
            })?;
            let destination = match value {
                Value::Null => return Err(ConfigError::EmptyDestination(source)),
                other => scalar_text(other).ok_or_else(|| ConfigError::InvalidField {
                    field: source.clone(),
                    message: format!("destination must be a string, found {}", kind(other)),
                })?,
            };
            if destination.trim().is_empty() {
                return Err(ConfigError::EmptyDestination(source));
            }
            Ok(CopyEntry {
                source,
                destination,
            })
        })
        .collect()
}

/// `true` if `content` holds nothing but blank lines, comments, and document
/// markers.
fn is_empty_document(content: &str) -> bool {
    content.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

/// Textual form of a scalar YAML value; `None` for null, sequences, mappings
/// and tagged values.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
