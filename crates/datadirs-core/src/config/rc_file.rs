//! `Key=Value` rc file configuration store.
//!
//! The format is one `Key=Value` pair per line; blank lines and lines
//! starting with `#` are ignored. Writes rewrite the file in place, keeping
//! unrelated lines untouched.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ports::ConfigStore;

/// Errors reading or writing the rc file.
#[derive(Debug, Error)]
pub enum ConfigStoreError {
    /// Could not determine the user's home directory.
    #[error("Cannot determine home directory")]
    NoHomeDir,

    /// Failed to read the rc file.
    #[error("Failed to read config file {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    /// Failed to write the rc file.
    #[error("Failed to write config file {path}: {reason}")]
    Write { path: PathBuf, reason: String },
}

/// Configuration store backed by a `Key=Value` rc file.
#[derive(Debug, Clone)]
pub struct RcFileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl RcFileStore {
    /// `~/.<app_name>rc`.
    pub fn default_path(app_name: &str) -> Result<PathBuf, ConfigStoreError> {
        let home = dirs::home_dir().ok_or(ConfigStoreError::NoHomeDir)?;
        Ok(home.join(format!(".{app_name}rc")))
    }

    /// Load `path`. A missing file is an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigStoreError> {
        let path = path.into();
        let values = read_lines(&path)?
            .iter()
            .filter_map(|line| parse_line(line))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Ok(Self { path, values })
    }

    /// An empty store that will persist to `path`.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            values: HashMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist `key=value`.
    ///
    /// If the key already exists, its first line is updated and later
    /// duplicates are removed. Otherwise the pair is appended.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigStoreError> {
        let lines = read_lines(&self.path)?;

        let mut updated = false;
        let mut output: Vec<String> = Vec::with_capacity(lines.len() + 1);

        for line in lines {
            match parse_line(&line) {
                Some((lhs, _)) if lhs == key => {
                    if !updated {
                        output.push(format!("{key}={value}"));
                        updated = true;
                    }
                }
                _ => output.push(line),
            }
        }

        if !updated {
            if output.last().is_some_and(|l| !l.is_empty()) {
                output.push(String::new());
            }
            output.push(format!("{key}={value}"));
        }

        self.write_lines(output)?;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Remove every line defining `key`. Returns whether anything was removed.
    pub fn remove(&mut self, key: &str) -> Result<bool, ConfigStoreError> {
        let lines = read_lines(&self.path)?;
        let before = lines.len();
        let output: Vec<String> = lines
            .into_iter()
            .filter(|line| !matches!(parse_line(line), Some((lhs, _)) if lhs == key))
            .collect();

        let removed = output.len() != before;
        if removed {
            self.write_lines(output)?;
        }
        self.values.remove(key);
        Ok(removed)
    }

    fn write_lines(&self, mut output: Vec<String>) -> Result<(), ConfigStoreError> {
        // Ensure file ends with newline
        if output.last().is_some_and(|l| !l.is_empty()) {
            output.push(String::new());
        }

        let write_err = |e: io::Error| ConfigStoreError::Write {
            path: self.path.clone(),
            reason: e.to_string(),
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)
            .map_err(write_err)?;

        file.write_all(output.join("\n").as_bytes())
            .map_err(write_err)
    }
}

impl ConfigStore for RcFileStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>, ConfigStoreError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content.lines().map(str::to_string).collect()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(ConfigStoreError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    trimmed
        .split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
}
