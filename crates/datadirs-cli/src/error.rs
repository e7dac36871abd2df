//! CLI-specific error types and mappings.
//!
//! Maps core errors to exit codes and user-facing messages.

use datadirs_core::{ConfigStoreError, LocateError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error (cannot change directory, cannot write a file, ...).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error, including "no writable data directory".
    #[error("Configuration error: {0}")]
    Config(String),

    /// A requested file is not in any data directory.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h:
    /// - 66: input file not found (EX_NOINPUT)
    /// - 74: IO error (EX_IOERR)
    /// - 78: configuration error (EX_CONFIG)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound(_) => 66,
            Self::Io(_) => 74,
            Self::Config(_) => 78,
        }
    }
}

impl From<LocateError> for CliError {
    fn from(err: LocateError) -> Self {
        match err {
            LocateError::NoWritableDir { .. } => Self::Config(err.to_string()),
            LocateError::ChangeDir { .. } | LocateError::LogInit { .. } => {
                Self::Io(err.to_string())
            }
        }
    }
}

impl From<ConfigStoreError> for CliError {
    fn from(err: ConfigStoreError) -> Self {
        match err {
            ConfigStoreError::NoHomeDir => Self::Config(err.to_string()),
            ConfigStoreError::Read { .. } | ConfigStoreError::Write { .. } => {
                Self::Io(err.to_string())
            }
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Io(err.to_string())
    }
}
