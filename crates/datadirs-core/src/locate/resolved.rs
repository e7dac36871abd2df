//! The resolved, immutable data directory search path.
//!
//! Produced once at start-up by [`DataDirLocater::locate`] and then passed
//! explicitly to everything that reads or writes data files. Nothing mutates
//! it afterwards, so it can be shared freely across threads.
//!
//! [`DataDirLocater::locate`]: super::DataDirLocater::locate

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::ports::Filesystem;

use super::dir_list::DataDir;
use super::permissions::Resolution;

/// Ordered data directories with exactly one write directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataDirs {
    dirs: Vec<DataDir>,
    write_index: usize,
}

impl DataDirs {
    /// Accept a resolution only if it selected an existing write directory.
    pub(crate) fn from_resolution(resolution: Resolution) -> Option<Self> {
        let write_index = resolution.write_index?;
        if write_index >= resolution.dirs.len() {
            return None;
        }
        Some(Self {
            dirs: resolution.dirs,
            write_index,
        })
    }

    /// The directory receiving every file this process writes.
    pub fn write_dir(&self) -> &DataDir {
        &self.dirs[self.write_index]
    }

    /// All directories in search order (highest priority first).
    pub fn dirs(&self) -> &[DataDir] {
        &self.dirs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataDir> {
        self.dirs.iter()
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    /// Always `false`: a resolved set holds at least the write directory.
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// First `<dir>/<relative>` in search order that exists as a file.
    pub fn find_file(&self, relative: &str, fs: &dyn Filesystem) -> Option<PathBuf> {
        self.dirs
            .iter()
            .map(|dir| dir.as_path().join(relative))
            .find(|candidate| fs.file_exists(candidate))
    }

    /// Where a file named `relative` must be written.
    pub fn write_path(&self, relative: &str) -> PathBuf {
        self.write_dir().as_path().join(relative)
    }
}

impl<'a> IntoIterator for &'a DataDirs {
    type Item = &'a DataDir;
    type IntoIter = std::slice::Iter<'a, DataDir>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for DataDirs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, dir) in self.dirs.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let mode = if dir.is_writable() { "rw" } else { "ro" };
            write!(f, "{mode} {}", dir.path())?;
        }
        Ok(())
    }
}
