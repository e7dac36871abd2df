//! Data directory resolution errors.
//!
//! Individual unusable candidates are never errors; they are dropped during
//! resolution. Only the aggregate outcome can fail.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort data directory resolution.
#[derive(Debug, Error)]
pub enum LocateError {
    /// No candidate exists-and-is-writable or could be created.
    #[error(
        "Not a single writable data directory found!\n\n\
         Configure a writable data directory using either:\n{remedies}"
    )]
    NoWritableDir {
        /// Platform specific list of ways to fix the configuration.
        remedies: String,
    },

    /// The working directory could not be changed to the write directory.
    #[error("Cannot change working directory to {path}: {source}")]
    ChangeDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The log subsystem failed to finish initializing in the write directory.
    #[error("Failed to initialize logging in {path}: {source}")]
    LogInit {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
