//! Platform directory query port.
//!
//! Each query may fail on a given platform or host; a failed query is `None`
//! and simply contributes no candidates.

use std::path::PathBuf;

/// Well-known locations reported by the operating system.
pub trait PlatformQuery: Send + Sync {
    /// Directory containing the running executable, or the hosting library
    /// when the engine runs inside a shared library.
    fn install_dir(&self) -> Option<PathBuf>;

    /// The user's "Documents" folder.
    fn documents_dir(&self) -> Option<PathBuf>;

    /// The machine-wide application data folder (e.g. `C:\ProgramData`).
    fn common_data_dir(&self) -> Option<PathBuf>;
}
