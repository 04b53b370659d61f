//! Port definitions (interfaces)
//!
//! Ports define the boundary between the tree-operation core and the
//! underlying filesystem. Each port is a trait implemented by adapters in
//! the infrastructure layer.

mod file_system;

pub use file_system::{FileSystem, FsError};
