//! Filesystem side of a code request: resolving the target path and
//! materializing source text on disk.

mod materialize;
pub mod paths;

pub use materialize::{ensure_directory, write_source};
pub use paths::{normalize_path, resolve_target_path};
