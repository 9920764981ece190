//! Filesystem and environment probe
//!
//! Validators never touch `std::fs` or `std::env` directly. They go through a
//! [`Probe`] so the same rules can run against the real host or against a
//! fixed set of overrides.

use std::collections::HashMap;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// Read-only view of the host used by provider validators
pub trait Probe: Send + Sync {
    /// Whether `path` resolves to something that can be stat'ed
    fn path_exists(&self, path: &Path) -> bool;

    /// Raw value of an environment variable, `None` when unset
    fn env_var(&self, name: &str) -> Option<OsString>;

    /// Read the whole file at `path`
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Probe backed by the process environment and the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl Probe for SystemProbe {
    fn path_exists(&self, path: &Path) -> bool {
        std::fs::metadata(path).is_ok()
    }

    fn env_var(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// Probe with deterministic overrides
///
/// Environment lookups only see the variables set through [`StaticProbe::with_env`].
/// Filesystem lookups consult the in-memory files first and fall back to the
/// real filesystem, so tests can mix `tempfile` paths with virtual ones.
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    env: HashMap<String, OsString>,
    files: HashMap<PathBuf, Vec<u8>>,
}

impl StaticProbe {
    /// Create a probe with an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an environment variable visible to validators
    pub fn with_env(mut self, name: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.env.insert(name.into(), value.into());
        self
    }

    /// Add an in-memory file
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }
}

impl Probe for StaticProbe {
    fn path_exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || SystemProbe.path_exists(path)
    }

    fn env_var(&self, name: &str) -> Option<OsString> {
        self.env.get(name).cloned()
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        match self.files.get(path) {
            Some(contents) => Ok(contents.clone()),
            None => SystemProbe.read_file(path),
        }
    }
}
