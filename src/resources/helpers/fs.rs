//! File-system helpers shared by resources.
use std::path::{Path, PathBuf};

use crate::error::CopyError;

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) if necessary.
///
/// # Errors
///
/// Returns [`CopyError::CreateDir`] if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<(), CopyError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| CopyError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// The file actually written when copying onto `path`.
///
/// A symlink is followed to the file it points at, so the link itself is kept
/// and its target receives the new contents. A dangling link resolves to its
/// target relative to the link's directory. Anything else is written as is.
pub fn write_target(path: &Path) -> PathBuf {
    match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => std::fs::canonicalize(path)
            .or_else(|_| {
                std::fs::read_link(path).map(|link| match path.parent() {
                    Some(parent) => parent.join(link),
                    None => link,
                })
            })
            .unwrap_or_else(|_| path.to_path_buf()),
        _ => path.to_path_buf(),
    }
}

/// Sibling path used to stage content before it is renamed over `target`.
///
/// Staying in the same directory keeps the rename on one filesystem.
pub fn staging_path(target: &Path) -> Option<PathBuf> {
    let name = target.file_name()?;
    Some(target.with_file_name(format!(
        ".{}.dotfile-manager.tmp",
        name.to_string_lossy()
    )))
}
