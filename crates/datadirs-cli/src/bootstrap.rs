//! CLI bootstrap - the composition root.
//!
//! The only place where the locater is wired to its concrete collaborators:
//! - the rc file configuration store
//! - the real filesystem, process environment and platform queries

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use datadirs_core::{
    DataDirLocater, Filesystem, LocaterConfig, RcFileStore, StdFilesystem,
};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Source names, compiled defaults and platform capabilities.
    pub locater: LocaterConfig,
    /// Location of the `Key=Value` configuration store.
    pub rc_file: PathBuf,
}

impl CliConfig {
    /// Default source names and `~/.datadirsrc`, unless `rc_file` overrides it.
    pub fn with_defaults(rc_file: Option<PathBuf>) -> Result<Self> {
        let locater = LocaterConfig::default();
        let rc_file = match rc_file {
            Some(path) => path,
            None => RcFileStore::default_path(&locater.app_name).map_err(CliError::from)?,
        };
        Ok(Self { locater, rc_file })
    }
}

/// Fully composed context for command handlers.
pub struct CliContext {
    /// The configured locater.
    pub locater: DataDirLocater,
    /// Filesystem shared with the locater, for lookups in resolved dirs.
    pub fs: Arc<dyn Filesystem>,
    /// Location of the configuration store, for the `config` commands.
    pub rc_file: PathBuf,
}

/// Load the configuration store and build the locater.
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let store = RcFileStore::load(&config.rc_file).map_err(CliError::from)?;
    let fs: Arc<dyn Filesystem> = Arc::new(StdFilesystem::new());

    let locater = DataDirLocater::new(config.locater)
        .with_filesystem(Arc::clone(&fs))
        .with_config_store(Arc::new(store));

    Ok(CliContext {
        locater,
        fs,
        rc_file: config.rc_file,
    })
}
