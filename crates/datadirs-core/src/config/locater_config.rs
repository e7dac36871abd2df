//! Names and defaults that parameterize data directory discovery.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::locate::{PathStyle, PlatformCaps};

/// Compile-time default data directory list, from `build.rs`.
pub const COMPILED_DATADIRS: &str = env!("DATADIRS_COMPILED_DATADIR");

/// Which names the locater uses for each source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaterConfig {
    /// Short lowercase application name (`spring`).
    pub app_name: String,
    /// Folder name used under OS known folders (`Spring`).
    pub folder_name: String,
    /// Environment variable holding an override list.
    pub env_var: String,
    /// Configuration store key holding an override list.
    pub config_key: String,
    /// Where the configuration store lives, for error messages.
    pub config_store_hint: String,
    /// Per-user data directory, substituted (`$HOME/.spring`).
    pub home_source: String,
    /// System-wide file listing data directories one per line.
    pub system_file: PathBuf,
    /// Lists baked in at build time, lowest priority.
    pub compiled_defaults: Vec<String>,
    pub style: PathStyle,
    pub caps: PlatformCaps,
}

impl LocaterConfig {
    /// Conventional names derived from `app_name`, without compiled defaults.
    ///
    /// `for_app("spring")` yields `SPRING_DATADIR`, `SpringData`,
    /// `$HOME/.spring` and `/etc/spring/datadir`.
    pub fn for_app(app_name: &str) -> Self {
        let folder_name = capitalize(app_name);
        Self {
            app_name: app_name.to_string(),
            env_var: format!("{}_DATADIR", app_name.to_uppercase().replace('-', "_")),
            config_key: format!("{folder_name}Data"),
            config_store_hint: format!("~/.{app_name}rc"),
            home_source: format!("$HOME/.{app_name}"),
            system_file: PathBuf::from(format!("/etc/{app_name}/datadir")),
            folder_name,
            compiled_defaults: Vec::new(),
            style: PathStyle::native(),
            caps: PlatformCaps::native(),
        }
    }

    /// Add a compiled-in default list (ignored when empty).
    #[must_use]
    pub fn with_compiled_default(mut self, list: &str) -> Self {
        if !list.is_empty() {
            self.compiled_defaults.push(list.to_string());
        }
        self
    }

    /// Platform specific ways to configure a writable data directory.
    pub fn remedies(&self) -> String {
        match self.style {
            PathStyle::Windows => format!(
                "- the {} environment variable,\n\
                 - a {}=C:/path/to/data declaration in {} or\n\
                 - by giving you write access to the installation directory",
                self.env_var, self.config_key, self.config_store_hint
            ),
            PathStyle::Posix => format!(
                "- the {} environment variable,\n\
                 - a {}=/path/to/data declaration in {} or\n\
                 - the configuration file {}",
                self.env_var,
                self.config_key,
                self.config_store_hint,
                self.system_file.display()
            ),
        }
    }
}

impl Default for LocaterConfig {
    fn default() -> Self {
        Self::for_app("datadirs").with_compiled_default(COMPILED_DATADIRS)
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
