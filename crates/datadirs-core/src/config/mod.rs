//! Locater configuration and the key/value configuration store backend.
//!
//! - [`LocaterConfig`]: names of every source (env var, config key, files)
//!   plus the compiled-in defaults and platform capabilities
//! - [`RcFileStore`]: `Key=Value` rc file implementing [`crate::ports::ConfigStore`]

mod locater_config;
mod rc_file;

pub use locater_config::{COMPILED_DATADIRS, LocaterConfig};
pub use rc_file::{ConfigStoreError, RcFileStore};
