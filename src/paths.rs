//! Home-directory (`~`) resolution for configured paths.
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use crate::error::PathError;

/// Expands a leading `~` in configured paths to a fixed home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    home: PathBuf,
}

impl PathResolver {
    /// Create a resolver for an explicit home directory.
    #[must_use]
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Create a resolver from `HOME`, falling back to `USERPROFILE`.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::HomeUnresolved`] if neither variable holds a
    /// non-empty value.
    pub fn from_env() -> Result<Self, PathError> {
        let home = ["HOME", "USERPROFILE"]
            .into_iter()
            .find_map(|var| std::env::var(var).ok().filter(|h| !is_blank(h)));
        resolve_home(home.as_deref()).map(Self::new)
    }

    /// The home directory substituted for `~`.
    #[must_use]
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Replace a leading `~` segment (`~` or `~/…`) with the home directory.
    ///
    /// A `~` anywhere else in the string, or one followed by a user name
    /// (`~alice/…`), is left untouched.
    #[must_use]
    pub fn resolve(&self, path: &str) -> PathBuf {
        match path.strip_prefix('~') {
            Some("") => self.home.clone(),
            Some(rest) if rest.starts_with(['/', MAIN_SEPARATOR]) => {
                self.home.join(rest.trim_start_matches(['/', MAIN_SEPARATOR]))
            }
            _ => PathBuf::from(path),
        }
    }
}

/// Resolve `path` against an optional home directory.
///
/// Free-function form of [`PathResolver::resolve`]; fails whenever `home` is
/// missing or empty, even if `path` has no `~`.
///
/// # Errors
///
/// Returns [`PathError::HomeUnresolved`] if `home` is `None` or empty.
pub fn resolve_path(path: &str, home: Option<&str>) -> Result<PathBuf, PathError> {
    let home = resolve_home(home)?;
    Ok(PathResolver::new(home).resolve(path))
}

fn resolve_home(home: Option<&str>) -> Result<PathBuf, PathError> {
    match home {
        Some(h) if !is_blank(h) => Ok(PathBuf::from(h)),
        _ => Err(PathError::HomeUnresolved),
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
