//! Shared helpers for tests that change the process working directory.

use std::env;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use datadirs_core::PlatformQuery;

/// Serializes tests that call `locate`, which changes the working directory.
pub static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Holds [`CWD_LOCK`] and restores the working directory on drop.
pub struct CwdGuard {
    previous: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl CwdGuard {
    pub fn acquire() -> Self {
        let lock = CWD_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        Self {
            previous: env::current_dir().expect("current dir"),
            _lock: lock,
        }
    }

    pub fn previous(&self) -> &PathBuf {
        &self.previous
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.previous);
    }
}

/// Platform with no install dir and no known folders.
pub struct NoPlatform;

impl PlatformQuery for NoPlatform {
    fn install_dir(&self) -> Option<PathBuf> {
        None
    }
    fn documents_dir(&self) -> Option<PathBuf> {
        None
    }
    fn common_data_dir(&self) -> Option<PathBuf> {
        None
    }
}
