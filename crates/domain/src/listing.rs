//! Directory listing classification.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Classification of directory entries into files and subdirectories.
///
/// Entry order follows the order in which the underlying directory read
/// returned the children, not any alphabetical sort. Entries that are
/// neither a regular file nor a directory (sockets, devices, dangling
/// symlinks) are not represented at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirListing {
    /// Paths of immediate (or, after merging, transitive) regular files.
    pub files: Vec<PathBuf>,
    /// Paths of immediate (or, after merging, transitive) directories.
    pub dirs: Vec<PathBuf>,
}

impl DirListing {
    /// Creates an empty listing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files: Vec::new(),
            dirs: Vec::new(),
        }
    }

    /// Returns whether the listing holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }

    /// Total number of classified entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len() + self.dirs.len()
    }

    /// Folds another listing into this one, appending its files and dirs.
    ///
    /// Used by the deep-listing fold: each recursive branch builds its own
    /// local listing and the caller merges them after all branches complete.
    pub fn merge(&mut self, other: Self) {
        self.files.extend(other.files);
        self.dirs.extend(other.dirs);
    }
}
