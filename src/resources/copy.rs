//! Single-file copy resource.
use std::fs::{self, File, Permissions};
use std::io;
use std::path::{Path, PathBuf};

use super::helpers::fs::{ensure_parent_dir, staging_path, write_target};
use crate::error::CopyError;
use crate::logging::Log;

/// A source file and the destination it is copied to, both resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCopy {
    /// File whose contents are copied.
    pub source: PathBuf,
    /// Path written (and overwritten if present).
    pub target: PathBuf,
}

impl FileCopy {
    /// Create a new copy resource.
    #[must_use]
    pub const fn new(source: PathBuf, target: PathBuf) -> Self {
        Self { source, target }
    }

    /// Human-readable description of this copy.
    #[must_use]
    pub fn description(&self) -> String {
        format!("{} -> {}", self.source.display(), self.target.display())
    }

    /// Check that the source is a regular file, without touching the target.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError::SourceMissing`] or [`CopyError::SourceNotAFile`].
    pub fn check_source(&self) -> Result<(), CopyError> {
        if !self.source.exists() {
            return Err(CopyError::SourceMissing {
                src: self.source.clone(),
                dest: self.target.clone(),
            });
        }
        if self.source.is_dir() {
            return Err(CopyError::SourceNotAFile {
                src: self.source.clone(),
                dest: self.target.clone(),
            });
        }
        Ok(())
    }

    /// Copy the source bytes to the target.
    ///
    /// The source is checked before any destination work. Content is written
    /// to a hidden sibling of the file being replaced and renamed into place,
    /// so a failed copy never leaves a truncated target behind. An existing
    /// target keeps its permission bits, and a symlinked target stays a link
    /// while the file it points at is overwritten.
    ///
    /// # Errors
    ///
    /// Returns a [`CopyError`] if the source is missing or a directory, the
    /// parent directory cannot be created, or any read/write/rename fails.
    pub fn apply(&self) -> Result<(), CopyError> {
        self.check_source()?;
        let target = write_target(&self.target);
        ensure_parent_dir(&target)?;

        let staged = staging_path(&target).ok_or_else(|| {
            self.io_error(io::Error::new(
                io::ErrorKind::InvalidInput,
                "destination has no file name",
            ))
        })?;
        let permissions = fs::metadata(&target).ok().map(|m| m.permissions());

        let result = write_contents(&self.source, &staged, permissions)
            .and_then(|()| fs::rename(&staged, &target));
        if let Err(e) = result {
            let _ = fs::remove_file(&staged);
            return Err(self.io_error(e));
        }
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> CopyError {
        CopyError::Io {
            src: self.source.clone(),
            dest: self.target.clone(),
            source,
        }
    }
}

/// Stream the bytes of `src` into a freshly created `dest`, then apply
/// `permissions` if given.
fn write_contents(src: &Path, dest: &Path, permissions: Option<Permissions>) -> io::Result<()> {
    let mut reader = File::open(src)?;
    let mut writer = File::create(dest)?;
    io::copy(&mut reader, &mut writer)?;
    writer.sync_all()?;
    drop(writer);
    match permissions {
        Some(permissions) => fs::set_permissions(dest, permissions),
        None => Ok(()),
    }
}

/// Copy `src` to `dest`, creating missing parent directories and overwriting
/// any existing file, then log a confirmation line naming both paths.
///
/// # Errors
///
/// See [`FileCopy::apply`].
pub fn copy_file(src: &Path, dest: &Path, log: &dyn Log) -> Result<(), CopyError> {
    let resource = FileCopy::new(src.to_path_buf(), dest.to_path_buf());
    resource.apply()?;
    log.info(&format!("copied {}", resource.description()));
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::logging::{Level, MemoryLog};

    fn leftover_staging_files(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|n| n.ends_with(".dotfile-manager.tmp"))
            .collect()
    }

    #[test]
    fn copies_bytes_and_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.bin");
        let bytes: Vec<u8> = (0..=255).chain([0, 13, 10, 26]).collect();
        fs::write(&src, &bytes).unwrap();
        let dest = dir.path().join("out").join("nested").join("b.bin");

        copy_file(&src, &dest, &MemoryLog::new()).unwrap();

        assert_eq!(fs::read(&dest).unwrap(), bytes);
        assert!(leftover_staging_files(&dir.path().join("out/nested")).is_empty());
    }

    #[test]
    fn overwrites_existing_target() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.txt");
        let dest = dir.path().join("b.txt");
        fs::write(&src, "new").unwrap();
        fs::write(&dest, "old content that is longer").unwrap();

        copy_file(&src, &dest, &MemoryLog::new()).unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn logs_confirmation_naming_both_paths() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.txt");
        let dest = dir.path().join("b.txt");
        fs::write(&src, "hello").unwrap();
        let log = MemoryLog::new();

        copy_file(&src, &dest, &log).unwrap();

        let infos = log.messages(Level::Info);
        assert_eq!(infos.len(), 1);
        assert!(infos[0].contains(&src.display().to_string()));
        assert!(infos[0].contains(&dest.display().to_string()));
    }

    #[test]
    fn missing_source_fails_before_touching_destination() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out").join("b.txt");
        let log = MemoryLog::new();

        let err = copy_file(&dir.path().join("nope.txt"), &dest, &log).unwrap_err();

        assert!(matches!(err, CopyError::SourceMissing { .. }));
        assert!(!dest.exists());
        assert!(!dir.path().join("out").exists(), "parent must not be created");
        assert!(log.entries().is_empty());
    }

    #[test]
    fn directory_source_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        let err = FileCopy::new(dir.path().join("src"), dir.path().join("dst"))
            .apply()
            .unwrap_err();
        assert!(matches!(err, CopyError::SourceNotAFile { .. }));
        assert!(!dir.path().join("dst").exists());
    }

    #[test]
    fn failed_rename_leaves_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.txt");
        fs::write(&src, "hello").unwrap();
        // A non-empty directory cannot be replaced by a file.
        let dest = dir.path().join("occupied");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("inner"), "x").unwrap();

        let err = FileCopy::new(src, dest.clone()).apply().unwrap_err();

        assert!(matches!(err, CopyError::Io { .. }));
        assert!(leftover_staging_files(dir.path()).is_empty());
        assert!(dest.join("inner").exists());
    }

    #[cfg(unix)]
    #[test]
    fn overwrite_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt as _;
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("config");
        let dest = dir.path().join("ssh_config");
        fs::write(&src, "Host *").unwrap();
        fs::write(&dest, "old").unwrap();
        fs::set_permissions(&dest, Permissions::from_mode(0o600)).unwrap();

        copy_file(&src, &dest, &MemoryLog::new()).unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "Host *");
        let mode = fs::metadata(&dest).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_target_updates_the_linked_file() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.txt");
        let real = dir.path().join("real");
        let link = dir.path().join("link");
        fs::write(&src, "new").unwrap();
        fs::write(&real, "old").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        copy_file(&src, &link, &MemoryLog::new()).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "new");
        assert!(leftover_staging_files(dir.path()).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_target_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.txt");
        let link = dir.path().join("link");
        fs::write(&src, "fresh").unwrap();
        std::os::unix::fs::symlink("store/real", &link).unwrap();

        copy_file(&src, &link, &MemoryLog::new()).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("store/real")).unwrap(), "fresh");
        assert_eq!(fs::read_to_string(&link).unwrap(), "fresh");
    }

    #[test]
    fn description_names_source_then_target() {
        let copy = FileCopy::new(PathBuf::from("a.txt"), PathBuf::from("/tmp/out/b.txt"));
        assert_eq!(copy.description(), "a.txt -> /tmp/out/b.txt");
    }
}
