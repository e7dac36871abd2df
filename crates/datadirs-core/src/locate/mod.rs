//! Data directory discovery and write-directory selection.
//!
//! - [`substitute`]: `$VAR` expansion and escapes in configured lists
//! - [`add_dirs`]: split a delimiter-separated list into [`DataDir`]s
//! - [`resolve_permissions`]: probe candidates, dedup, pick the write dir
//! - [`DataDirLocater`]: the full pipeline over every [`SourceKind`]
//!
//! # Design
//!
//! - Priority is insertion order; the source table is data, not `cfg!` branches
//! - Per-candidate problems drop the candidate; only "no write directory" fails
//! - The result is an immutable [`DataDirs`] passed explicitly to file users

mod dir_list;
mod error;
mod locater;
mod permissions;
mod resolved;
mod sources;
mod style;
mod substitute;

pub use dir_list::{DataDir, add_dirs};
pub use error::LocateError;
pub use locater::{DataDirLocater, SourceCandidates};
pub use permissions::{Resolution, resolve_permissions};
pub use resolved::DataDirs;
pub use sources::{PlatformCaps, SourceKind, SourceValue, bundle_root, source_table};
pub use style::PathStyle;
pub use substitute::substitute;
