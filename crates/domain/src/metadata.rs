//! Stat snapshots and decorated path information.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Read-only snapshot of a single stat call.
///
/// Never cached beyond the call that produced it; timestamps are optional
/// because not every platform reports all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Whether the path is a directory.
    pub is_dir: bool,
    /// Whether the path is a regular file.
    pub is_file: bool,
    /// Size in bytes as reported by the filesystem.
    pub len: u64,
    /// Last access time, if the platform reports it.
    pub accessed: Option<SystemTime>,
    /// Last modification time, if the platform reports it.
    pub modified: Option<SystemTime>,
    /// Creation time, if the platform reports it.
    pub created: Option<SystemTime>,
}

/// Whether a path refers to a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
}

/// A stat snapshot decorated with a kind tag and an effective size.
///
/// For directories `size` is the aggregate size of all transitively
/// contained regular files; for files it is the stat size itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathInfo {
    /// File or directory.
    pub kind: EntryKind,
    /// Effective size in bytes.
    pub size: u64,
    /// Last access time, if reported.
    pub accessed: Option<SystemTime>,
    /// Last modification time, if reported.
    pub modified: Option<SystemTime>,
    /// Creation time, if reported.
    pub created: Option<SystemTime>,
}

impl PathInfo {
    /// Builds the info for a regular file from its stat snapshot.
    #[must_use]
    pub const fn file(meta: &Metadata) -> Self {
        Self {
            kind: EntryKind::File,
            size: meta.len,
            accessed: meta.accessed,
            modified: meta.modified,
            created: meta.created,
        }
    }

    /// Builds the info for a directory, overriding the stat size with the
    /// aggregate size of its contents.
    #[must_use]
    pub const fn directory(aggregate_size: u64, meta: &Metadata) -> Self {
        Self {
            kind: EntryKind::Directory,
            size: aggregate_size,
            accessed: meta.accessed,
            modified: meta.modified,
            created: meta.created,
        }
    }
}
