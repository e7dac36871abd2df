//! Port definitions (trait abstractions) for the collaborators of the locater.
//!
//! The engine only talks to the outside world through these traits: the
//! filesystem primitives, the process environment, the key/value
//! configuration store, platform directory queries and the log subsystem.
//!
//! # Design Rules
//!
//! - No `std::fs` or `std::env` calls behind the engine's back
//! - Primitives are single-shot: no retries, no timeouts
//! - Default implementations live in [`crate::system`] and [`crate::config`]

pub mod config_store;
pub mod environment;
pub mod filesystem;
pub mod log_init;
pub mod platform;

pub use config_store::ConfigStore;
pub use environment::Environment;
pub use filesystem::Filesystem;
pub use log_init::{LogInitializer, NoopLogInitializer};
pub use platform::PlatformQuery;

#[cfg(test)]
pub use filesystem::MockFilesystem;
