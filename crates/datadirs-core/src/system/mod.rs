//! Default implementations of the ports, backed by `std` and `dirs`.
//!
//! Hosts construct these once at start-up; tests substitute their own.

mod environment;
mod filesystem;
mod platform;

pub use environment::ProcessEnvironment;
pub use filesystem::StdFilesystem;
pub use platform::{HostKind, StdPlatform};
