//! Filesystem primitives port.
//!
//! These are the only filesystem operations the engine performs. Each call
//! blocks and is attempted exactly once.

use std::io;
use std::path::Path;

/// Blocking filesystem primitives used during data directory resolution.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Whether `path` exists and is a directory.
    fn dir_exists(&self, path: &Path) -> bool;

    /// Whether files can be created inside the existing directory `path`.
    fn dir_is_writable(&self, path: &Path) -> bool;

    /// Create `path` (and missing parents). Returns `false` on any failure.
    fn create_dir(&self, path: &Path) -> bool;

    /// Whether `path` exists and is a regular file.
    fn file_exists(&self, path: &Path) -> bool;

    /// Change the process working directory.
    fn change_dir(&self, path: &Path) -> io::Result<()>;
}
