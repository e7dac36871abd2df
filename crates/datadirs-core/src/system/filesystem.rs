//! Filesystem primitives on top of `std::fs`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::ports::Filesystem;

const WRITE_TEST_FILE: &str = ".datadirs_write_test";

/// [`Filesystem`] using the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFilesystem;

impl StdFilesystem {
    pub const fn new() -> Self {
        Self
    }
}

impl Filesystem for StdFilesystem {
    fn dir_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    /// Writability is probed by creating and removing a test file, which
    /// also catches read-only mounts and ACLs that mode bits do not show.
    fn dir_is_writable(&self, path: &Path) -> bool {
        let test_file = path.join(WRITE_TEST_FILE);
        let result = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&test_file)
            .and_then(|mut file| file.write_all(b"test"));

        match result {
            Ok(()) => {
                let _ = fs::remove_file(&test_file);
                true
            }
            Err(e) => {
                debug!("{} is not writable: {e}", path.display());
                false
            }
        }
    }

    fn create_dir(&self, path: &Path) -> bool {
        match fs::create_dir_all(path) {
            Ok(()) => true,
            Err(e) => {
                debug!("Cannot create {}: {e}", path.display());
                false
            }
        }
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn change_dir(&self, path: &Path) -> io::Result<()> {
        env::set_current_dir(path)
    }
}
