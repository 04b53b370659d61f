//! Arbor Domain - Core filesystem tree types
//!
//! This crate defines the value types shared by the Arbor tree operations.
//! All types here are pure Rust with no I/O dependencies.

pub mod listing;
pub mod metadata;
pub mod path;

pub use listing::DirListing;
pub use metadata::{EntryKind, Metadata, PathInfo};
pub use path::{prefixes, segments};
