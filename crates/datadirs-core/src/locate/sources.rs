//! The ordered table of data directory sources.
//!
//! Priority is purely insertion order: [`SourceKind::PRIORITY`] lists every
//! source highest first, and [`source_table`] filters it down to the ones
//! the platform capabilities allow. The resolution algorithm never branches
//! on the operating system itself.

use std::fmt;
use std::path::{Path, PathBuf};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Platform features that enable optional sources.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PlatformCaps: u8 {
        /// `$HOME/.<app>` exists as a convention.
        const HOME_DIR = 1 << 0;
        /// A system-wide file lists extra data directories, one per line.
        const SYSTEM_FILE = 1 << 1;
        /// The OS has "Documents" and machine-wide application data folders.
        const KNOWN_FOLDERS = 1 << 2;
        /// The program may run from inside a `.app` bundle.
        const APP_BUNDLE = 1 << 3;
    }
}

impl PlatformCaps {
    /// Capabilities of the platform this binary was compiled for.
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::KNOWN_FOLDERS
        } else if cfg!(target_os = "macos") {
            Self::HOME_DIR.union(Self::SYSTEM_FILE).union(Self::APP_BUNDLE)
        } else {
            Self::HOME_DIR.union(Self::SYSTEM_FILE)
        }
    }
}

impl Default for PlatformCaps {
    fn default() -> Self {
        Self::native()
    }
}

/// One origin of candidate directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Override list in an environment variable.
    EnvVar,
    /// Override list under a configuration store key.
    ConfigKey,
    /// Directory holding the executable or hosting library.
    InstallDir,
    /// Directory containing the `.app` bundle.
    BundleParent,
    /// `<bundle>.app/Contents/Resources`.
    BundleResources,
    /// `$HOME/.<app>`.
    HomeDir,
    /// Lines of the system-wide data directory file.
    SystemFile,
    /// `<Documents>/My Games/<App>`.
    MyGames,
    /// `<Documents>/<App>`.
    Documents,
    /// `<machine app data>/<App>`.
    CommonAppData,
    /// Locations baked in at build time.
    CompiledDefault,
}

impl SourceKind {
    /// Every source, highest priority first.
    pub const PRIORITY: [Self; 11] = [
        Self::EnvVar,
        Self::ConfigKey,
        Self::InstallDir,
        Self::BundleParent,
        Self::BundleResources,
        Self::HomeDir,
        Self::SystemFile,
        Self::MyGames,
        Self::Documents,
        Self::CommonAppData,
        Self::CompiledDefault,
    ];

    /// Capabilities that must all be present for this source to apply.
    pub const fn required_caps(self) -> PlatformCaps {
        match self {
            Self::EnvVar | Self::ConfigKey | Self::InstallDir | Self::CompiledDefault => {
                PlatformCaps::empty()
            }
            Self::BundleParent | Self::BundleResources => PlatformCaps::APP_BUNDLE,
            Self::HomeDir => PlatformCaps::HOME_DIR,
            Self::SystemFile => PlatformCaps::SYSTEM_FILE,
            Self::MyGames | Self::Documents | Self::CommonAppData => PlatformCaps::KNOWN_FOLDERS,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EnvVar => "environment variable",
            Self::ConfigKey => "configuration key",
            Self::InstallDir => "install directory",
            Self::BundleParent => "bundle location",
            Self::BundleResources => "bundle resources",
            Self::HomeDir => "home directory",
            Self::SystemFile => "system datadir file",
            Self::MyGames => "My Games folder",
            Self::Documents => "documents folder",
            Self::CommonAppData => "common application data",
            Self::CompiledDefault => "compiled-in default",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The applicable sources for `caps`, in priority order.
pub fn source_table(caps: PlatformCaps) -> Vec<SourceKind> {
    SourceKind::PRIORITY
        .into_iter()
        .filter(|kind| caps.contains(kind.required_caps()))
        .collect()
}

/// Raw text fetched from a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceValue {
    /// A configured, delimiter-separated list: substituted, then split.
    List(String),
    /// A path reported by the OS: split like a list, never substituted.
    Literal(PathBuf),
}

/// The `.app` bundle enclosing `path`, if any.
pub fn bundle_root(path: &Path) -> Option<&Path> {
    path.ancestors()
        .find(|p| p.extension().is_some_and(|ext| ext == "app"))
}
