//! Log subsystem hand-off port.
//!
//! The locater calls [`LogInitializer::initialize`] exactly once, after the
//! working directory has been changed to the write directory, so file-based
//! sinks are created there.

use std::io;
use std::path::Path;

/// Completes log initialization once the write directory is known.
pub trait LogInitializer {
    fn initialize(&mut self, write_dir: &Path) -> io::Result<()>;
}

/// Log initializer that does nothing (embedding hosts with their own logging).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogInitializer;

impl LogInitializer for NoopLogInitializer {
    fn initialize(&mut self, _write_dir: &Path) -> io::Result<()> {
        Ok(())
    }
}
