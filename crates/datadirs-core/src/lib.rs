//! Data directory resolution.
//!
//! Discovers candidate data directories from environment variables, a user
//! configuration store, the install location, well-known OS folders and
//! compiled-in defaults; ranks them by source priority; picks exactly one
//! write directory; and hands back an immutable search path.
//!
//! ```no_run
//! use datadirs_core::{DataDirLocater, LocaterConfig, NoopLogInitializer};
//!
//! let dirs = DataDirLocater::new(LocaterConfig::default())
//!     .locate(&mut NoopLogInitializer)
//!     .expect("no writable data directory");
//! println!("writing to {}", dirs.write_dir());
//! ```

pub mod config;
pub mod locate;
pub mod ports;
pub mod system;

// Re-export commonly used types for convenience
pub use config::{ConfigStoreError, LocaterConfig, RcFileStore};
pub use locate::{
    DataDir, DataDirLocater, DataDirs, LocateError, PathStyle, PlatformCaps, SourceCandidates,
    SourceKind,
};
pub use ports::{
    ConfigStore, Environment, Filesystem, LogInitializer, NoopLogInitializer, PlatformQuery,
};
pub use system::{HostKind, ProcessEnvironment, StdFilesystem, StdPlatform};
