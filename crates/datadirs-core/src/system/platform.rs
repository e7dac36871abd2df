//! Platform directory queries via `std::env` and `dirs`.

use std::env;
use std::path::PathBuf;

use crate::ports::PlatformQuery;

/// What kind of binary hosts the locater.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HostKind {
    /// A normal executable; its own directory is the install directory.
    #[default]
    Executable,
    /// A shared library loaded by another program. The library passes its
    /// own file path, since the executable may live anywhere.
    Library(PathBuf),
}

/// [`PlatformQuery`] for the running process.
#[derive(Debug, Clone, Default)]
pub struct StdPlatform {
    host: HostKind,
}

impl StdPlatform {
    pub const fn new(host: HostKind) -> Self {
        Self { host }
    }
}

impl PlatformQuery for StdPlatform {
    fn install_dir(&self) -> Option<PathBuf> {
        let file = match &self.host {
            HostKind::Executable => env::current_exe().ok()?,
            HostKind::Library(path) => path.clone(),
        };
        file.parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
    }

    fn documents_dir(&self) -> Option<PathBuf> {
        dirs::document_dir()
    }

    fn common_data_dir(&self) -> Option<PathBuf> {
        if cfg!(windows) {
            env::var_os("ProgramData").map(PathBuf::from)
        } else {
            None
        }
    }
}
