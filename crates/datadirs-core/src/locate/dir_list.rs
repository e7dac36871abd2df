//! Data directory candidates and delimiter-separated list splitting.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::style::PathStyle;

/// One data directory: a normalized path and whether it is the write directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataDir {
    path: String,
    writable: bool,
}

impl DataDir {
    /// Normalize `path` so it ends with the separator.
    ///
    /// An empty path becomes the current directory (`./` or `.\`).
    pub fn new(path: &str, style: PathStyle) -> Self {
        let sep = style.separator();
        let mut path = if path.is_empty() {
            ".".to_string()
        } else {
            path.to_string()
        };
        if !path.ends_with(sep) {
            path.push(sep);
        }
        Self {
            path,
            writable: false,
        }
    }

    /// The normalized path, always ending with the separator.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }

    /// Whether this is the write directory.
    pub const fn is_writable(&self) -> bool {
        self.writable
    }

    pub(super) const fn mark_writable(&mut self) {
        self.writable = true;
    }
}

impl fmt::Display for DataDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Split `list` on the style's delimiter and append one candidate per
/// non-empty entry to `dirs`, left to right.
///
/// `list` is expected to be substituted already.
pub fn add_dirs(list: &str, style: PathStyle, dirs: &mut Vec<DataDir>) {
    for entry in list.split(style.list_delimiter()) {
        if entry.is_empty() {
            continue;
        }
        debug!("Adding {entry} to directories");
        dirs.push(DataDir::new(entry, style));
    }
}
