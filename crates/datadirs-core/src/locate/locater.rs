//! The data directory locater: gathers, resolves and applies.
//!
//! Pipeline: fetch every source in priority order, substitute and split
//! configured lists, resolve permissions once over the merged list, require
//! a write directory, change into it, then let logging finish initializing.
//!
//! Call [`DataDirLocater::locate`] once per process: it changes the process
//! working directory.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::LocaterConfig;
use crate::ports::{ConfigStore, Environment, Filesystem, LogInitializer, PlatformQuery};
use crate::system::{ProcessEnvironment, StdFilesystem, StdPlatform};

use super::dir_list::{DataDir, add_dirs};
use super::error::LocateError;
use super::permissions::resolve_permissions;
use super::resolved::DataDirs;
use super::sources::{PlatformCaps, SourceKind, SourceValue, bundle_root, source_table};
use super::substitute::substitute;

/// Candidates contributed by one source, before permission checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCandidates {
    pub kind: SourceKind,
    pub dirs: Vec<DataDir>,
}

/// Discovers the data directories and selects the write directory.
pub struct DataDirLocater {
    config: LocaterConfig,
    fs: Arc<dyn Filesystem>,
    env: Arc<dyn Environment>,
    store: Arc<dyn ConfigStore>,
    platform: Arc<dyn PlatformQuery>,
}

impl DataDirLocater {
    /// Locater over the real filesystem, environment and platform.
    ///
    /// The configuration store starts empty; hosts with a store pass it
    /// through [`with_config_store`](Self::with_config_store).
    pub fn new(config: LocaterConfig) -> Self {
        Self {
            config,
            fs: Arc::new(StdFilesystem::new()),
            env: Arc::new(ProcessEnvironment),
            store: Arc::new(std::collections::HashMap::<String, String>::new()),
            platform: Arc::new(StdPlatform::default()),
        }
    }

    #[must_use]
    pub fn with_filesystem(mut self, fs: Arc<dyn Filesystem>) -> Self {
        self.fs = fs;
        self
    }

    #[must_use]
    pub fn with_environment(mut self, env: Arc<dyn Environment>) -> Self {
        self.env = env;
        self
    }

    #[must_use]
    pub fn with_config_store(mut self, store: Arc<dyn ConfigStore>) -> Self {
        self.store = store;
        self
    }

    #[must_use]
    pub fn with_platform(mut self, platform: Arc<dyn PlatformQuery>) -> Self {
        self.platform = platform;
        self
    }

    pub fn config(&self) -> &LocaterConfig {
        &self.config
    }

    /// Candidates per source, in priority order. Touches no directories.
    pub fn collect_sources(&self) -> Vec<SourceCandidates> {
        source_table(self.config.caps)
            .into_iter()
            .map(|kind| {
                let mut dirs = Vec::new();
                for value in self.fetch(kind) {
                    self.add_value(value, &mut dirs);
                }
                SourceCandidates { kind, dirs }
            })
            .collect()
    }

    /// The merged candidate list in priority order.
    pub fn candidates(&self) -> Vec<DataDir> {
        self.collect_sources()
            .into_iter()
            .flat_map(|source| source.dirs)
            .collect()
    }

    /// Resolve the data directories and make the write directory current.
    ///
    /// The working directory is changed before `log` is initialized, so a
    /// log file lands in the write directory. One line per directory is
    /// logged afterwards.
    pub fn locate(&self, log: &mut dyn LogInitializer) -> Result<DataDirs, LocateError> {
        let candidates = self.candidates();
        debug!("Resolving permissions for {} candidates", candidates.len());

        let resolution = resolve_permissions(candidates, self.config.style, self.fs.as_ref());
        let Some(data_dirs) = DataDirs::from_resolution(resolution) else {
            return Err(LocateError::NoWritableDir {
                remedies: self.config.remedies(),
            });
        };

        let write_dir = data_dirs.write_dir().as_path().to_path_buf();
        self.fs
            .change_dir(&write_dir)
            .map_err(|source| LocateError::ChangeDir {
                path: write_dir.clone(),
                source,
            })?;

        log.initialize(&write_dir)
            .map_err(|source| LocateError::LogInit {
                path: write_dir.clone(),
                source,
            })?;

        for dir in &data_dirs {
            if dir.is_writable() {
                info!("Using read-write data directory: {dir}");
            } else {
                info!("Using read-only  data directory: {dir}");
            }
        }

        Ok(data_dirs)
    }

    fn add_value(&self, value: SourceValue, dirs: &mut Vec<DataDir>) {
        let style = self.config.style;
        match value {
            SourceValue::List(list) => {
                add_dirs(&substitute(&list, style, self.env.as_ref()), style, dirs);
            }
            SourceValue::Literal(path) => {
                add_dirs(&path.to_string_lossy(), style, dirs);
            }
        }
    }

    fn fetch(&self, kind: SourceKind) -> Vec<SourceValue> {
        let folder = &self.config.folder_name;
        match kind {
            SourceKind::EnvVar => lists(self.env.var(&self.config.env_var)),
            SourceKind::ConfigKey => lists(self.store.get_string(&self.config.config_key)),
            SourceKind::InstallDir => {
                // Inside a bundle both the binary and the library directory
                // are writable, so the bundle sources replace this one.
                literals(self.platform.install_dir().filter(|dir| {
                    !(self.config.caps.contains(PlatformCaps::APP_BUNDLE)
                        && bundle_root(dir).is_some())
                }))
            }
            SourceKind::BundleParent => literals(
                self.platform
                    .install_dir()
                    .and_then(|dir| bundle_root(&dir)?.parent().map(PathBuf::from)),
            ),
            SourceKind::BundleResources => literals(self.platform.install_dir().and_then(|dir| {
                bundle_root(&dir).map(|bundle| bundle.join("Contents").join("Resources"))
            })),
            SourceKind::HomeDir => vec![SourceValue::List(self.config.home_source.clone())],
            SourceKind::SystemFile => self.read_system_file(),
            SourceKind::MyGames => literals(
                self.platform
                    .documents_dir()
                    .map(|docs| docs.join("My Games").join(folder)),
            ),
            SourceKind::Documents => {
                literals(self.platform.documents_dir().map(|docs| docs.join(folder)))
            }
            SourceKind::CommonAppData => {
                literals(self.platform.common_data_dir().map(|dir| dir.join(folder)))
            }
            SourceKind::CompiledDefault => self
                .config
                .compiled_defaults
                .iter()
                .cloned()
                .map(SourceValue::List)
                .collect(),
        }
    }

    /// Every non-blank line of the system file. A missing file is normal.
    ///
    /// Lines are decoded one by one, so a line that is not valid UTF-8 only
    /// loses itself.
    fn read_system_file(&self) -> Vec<SourceValue> {
        let path = &self.config.system_file;
        let content = match fs::read(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!("Cannot read {}: {e}", path.display());
                return Vec::new();
            }
        };

        content
            .split(|&b| b == b'\n')
            .enumerate()
            .filter_map(|(i, raw)| {
                let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
                match std::str::from_utf8(raw) {
                    Ok(line) => Some(line),
                    Err(e) => {
                        warn!("Ignoring line {} of {}: {e}", i + 1, path.display());
                        None
                    }
                }
            })
            .filter(|line| !line.trim_matches([' ', '\t']).is_empty())
            .map(|line| SourceValue::List(line.to_string()))
            .collect()
    }
}

fn lists(value: Option<String>) -> Vec<SourceValue> {
    value.into_iter().map(SourceValue::List).collect()
}

fn literals(path: Option<PathBuf>) -> Vec<SourceValue> {
    path.into_iter().map(SourceValue::Literal).collect()
}
