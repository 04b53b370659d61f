//! High-level facade over the tree operations.

use std::path::{Path, PathBuf};

use arbor_domain::{DirListing, Metadata, PathInfo};

use crate::ops;
use crate::ports::{FileSystem, FsError};

/// Facade bundling every tree operation behind one filesystem adapter.
///
/// Each call performs a fresh traversal; no state is cached between calls
/// and concurrent calls against overlapping subtrees are not coordinated.
#[derive(Debug, Clone, Default)]
pub struct FileManager<F> {
    fs: F,
}

impl<F: FileSystem> FileManager<F> {
    /// Creates a manager over the given filesystem adapter.
    #[must_use]
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Retrieves the stat snapshot for a path.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::NotFound`] for an absent path.
    pub async fn stat(&self, path: &Path) -> Result<Metadata, FsError> {
        self.fs.metadata(path).await
    }

    /// Checks whether a path exists. See [`ops::exists`].
    ///
    /// # Errors
    ///
    /// Returns any stat failure other than `NotFound`.
    pub async fn exists(&self, path: &Path) -> Result<bool, FsError> {
        ops::exists(&self.fs, path).await
    }

    /// Lists the immediate children of a directory. See [`ops::list`].
    ///
    /// # Errors
    ///
    /// Fails if the directory read or any single child stat fails.
    pub async fn list(&self, path: &Path) -> Result<DirListing, FsError> {
        ops::list(&self.fs, path).await
    }

    /// Recursively lists every file and directory under a path.
    /// See [`ops::list_deep`].
    ///
    /// # Errors
    ///
    /// Fails with the first error observed at any level.
    pub async fn list_deep(&self, path: &Path) -> Result<DirListing, FsError> {
        ops::list_deep(&self.fs, path).await
    }

    /// Sums the sizes of all files transitively under a path.
    /// See [`ops::dir_size`].
    ///
    /// # Errors
    ///
    /// Fails with the first stat or read error in the tree.
    pub async fn dir_size(&self, path: &Path) -> Result<u64, FsError> {
        ops::dir_size(&self.fs, path).await
    }

    /// Builds the decorated info for a path. See [`ops::info`].
    ///
    /// # Errors
    ///
    /// Fails with the stat error or any aggregate-size traversal error.
    pub async fn info(&self, path: &Path) -> Result<PathInfo, FsError> {
        ops::info(&self.fs, path).await
    }

    /// Creates a directory, materializing missing ancestors.
    /// See [`ops::create_dir`].
    ///
    /// # Errors
    ///
    /// Fails with [`FsError::AlreadyExists`] if the target already exists.
    pub async fn create_dir(&self, path: &Path) -> Result<PathBuf, FsError> {
        ops::create_dir(&self.fs, path).await
    }

    /// Creates a file, materializing the parent directory chain.
    /// See [`ops::create_file`].
    ///
    /// # Errors
    ///
    /// Fails with [`FsError::AlreadyExists`] if the target already exists.
    pub async fn create_file(&self, path: &Path) -> Result<PathBuf, FsError> {
        ops::create_file(&self.fs, path).await
    }

    /// Removes a file.
    ///
    /// # Errors
    ///
    /// Returns the underlying failure unchanged.
    pub async fn remove_file(&self, path: &Path) -> Result<(), FsError> {
        self.fs.remove_file(path).await
    }

    /// Removes a directory tree, emptying it first if necessary.
    /// See [`ops::remove_dir`].
    ///
    /// # Errors
    ///
    /// Aborts on the first failure; no partial-cleanup reporting.
    pub async fn remove_dir(&self, path: &Path) -> Result<PathBuf, FsError> {
        ops::remove_dir(&self.fs, path).await
    }

    /// Renames/moves a file or directory.
    ///
    /// # Errors
    ///
    /// Returns the underlying failure unchanged (destination conflicts,
    /// cross-device renames).
    pub async fn rename(&self, from: &Path, to: &Path) -> Result<(), FsError> {
        self.fs.rename(from, to).await
    }

    /// Reads a file's contents as bytes.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::NotFound`] for an absent file.
    pub async fn read_file(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        self.fs.read_file(path).await
    }
}
