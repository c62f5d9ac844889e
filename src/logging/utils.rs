//! Log file location and timestamp helpers.
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths::PathResolver;

/// Pick the cache base: an absolute `xdg_cache_home`, else `<home>/.cache`.
///
/// Returns `None` when neither is usable, so nothing is ever written relative
/// to the working directory.
fn cache_base(xdg_cache_home: Option<&str>, home: Option<&Path>) -> Option<PathBuf> {
    xdg_cache_home
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .or_else(|| home.map(|h| h.join(".cache")))
}

/// Return the `dotfile-manager` cache directory, creating it if needed.
pub(super) fn cache_dir() -> Option<PathBuf> {
    let xdg = std::env::var("XDG_CACHE_HOME").ok();
    let resolver = PathResolver::from_env().ok();
    let dir = cache_base(xdg.as_deref(), resolver.as_ref().map(PathResolver::home))?
        .join("dotfile-manager");
    fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Return the log file path for `command` under the cache directory.
pub(super) fn log_file_path(command: &str) -> Option<PathBuf> {
    Some(cache_dir()?.join(format!("{command}.log")))
}

/// Current UTC time as `YYYY-MM-DD HH:MM:SS`.
pub(super) fn format_utc_datetime() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Current UTC time as `HH:MM:SS`.
pub(super) fn format_utc_time() -> String {
    chrono::Utc::now().format("%H:%M:%S").to_string()
}
