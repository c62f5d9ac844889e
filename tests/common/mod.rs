// Shared helpers for integration tests.
//
// Provides a temporary home directory with a fluent builder so each
// integration test can set up an isolated environment without repeating
// filesystem boilerplate, plus a helper that runs the compiled binary
// against that home.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use dotfile_manager::paths::PathResolver;

/// An isolated home directory backed by a [`tempfile::TempDir`].
pub struct TestHome {
    /// Temporary directory standing in for `$HOME`.
    pub home: tempfile::TempDir,
}

impl TestHome {
    /// Create an empty home directory.
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temp home"),
        }
    }

    /// Path to the home directory.
    pub fn path(&self) -> &Path {
        self.home.path()
    }

    /// Resolver that expands `~` to this home.
    pub fn resolver(&self) -> PathResolver {
        PathResolver::new(self.home.path())
    }

    /// Absolute path of `relative` inside the home directory.
    pub fn join(&self, relative: &str) -> PathBuf {
        self.home.path().join(relative)
    }

    /// Read a file inside the home directory as UTF-8.
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.join(relative)).expect("read file")
    }

    /// Run the `dotfile-manager` binary with `args`, `$HOME` pointing at this
    /// home, and the working directory set to the home.
    pub fn run_binary(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_dotfile-manager"))
            .args(args)
            .current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_CACHE_HOME", self.join(".cache"))
            .env_remove("USERPROFILE")
            .env_remove("DOTFILE_MANAGER_CONFIG")
            .output()
            .expect("spawn dotfile-manager")
    }
}

/// Fluent builder for [`TestHome`].
pub struct TestHomeBuilder {
    home: TestHome,
}

impl TestHomeBuilder {
    /// Begin building a new, empty home.
    pub fn new() -> Self {
        Self {
            home: TestHome::new(),
        }
    }

    /// Write `content` to `relative` inside the home, creating parents.
    pub fn with_file(self, relative: &str, content: impl AsRef<[u8]>) -> Self {
        let path = self.home.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(&path, content).expect("write file");
        self
    }

    /// Write the default config file `~/.manager_config.yaml`.
    pub fn with_config(self, yaml: &str) -> Self {
        self.with_file(".manager_config.yaml", yaml)
    }

    /// Finish building and return the home.
    pub fn build(self) -> TestHome {
        self.home
    }
}
