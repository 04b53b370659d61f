//! Arbor Application - Filesystem tree operations
//!
//! This crate defines the [`ports::FileSystem`] port over raw filesystem
//! primitives and builds the recursive tree operations on top of it: deep
//! listing, aggregate directory size, ancestor-materializing creation and
//! recursive removal. Adapters for real filesystems live in the
//! infrastructure layer.

pub mod manager;
pub mod ops;
pub mod ports;
pub mod testing;

pub use manager::FileManager;
pub use ports::{FileSystem, FsError};
