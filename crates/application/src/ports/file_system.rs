//! Filesystem abstraction port.

use std::path::{Path, PathBuf};

use arbor_domain::Metadata;

/// Error taxonomy for filesystem operations.
///
/// Kinds are the contract, not platform error codes. The recovery policy is
/// owned by the operations: `NotFound` is collapsed to `false` only inside
/// the existence check, `ParentMissing` triggers ancestor creation only
/// inside the creators, `NotEmpty` triggers the list-and-empty fallback only
/// inside the remover. Everything else propagates unchanged.
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// The path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The path already exists.
    #[error("path already exists: {0}")]
    AlreadyExists(PathBuf),

    /// The directory is not empty.
    #[error("directory not empty: {0}")]
    NotEmpty(PathBuf),

    /// The parent directory of the path does not exist.
    #[error("parent directory missing for: {0}")]
    ParentMissing(PathBuf),

    /// Access to the path was denied.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Any other I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Abstraction over raw filesystem primitives.
///
/// Every method is a single asynchronous request against the underlying
/// filesystem; all recursion and retry policy lives above this trait. This
/// also allows driving the tree operations against an in-memory
/// implementation in tests.
pub trait FileSystem: Send + Sync {
    /// Retrieves the stat snapshot for a path.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::NotFound`] if the path is absent.
    fn metadata(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<Metadata, FsError>> + Send;

    /// Reads the immediate child names of a directory.
    ///
    /// Names are returned in the order the underlying directory read yields
    /// them; no sorting is applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is absent or not a readable directory.
    fn read_dir(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<Vec<PathBuf>, FsError>> + Send;

    /// Creates a single directory level.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::ParentMissing`] if the parent does not exist and
    /// [`FsError::AlreadyExists`] if the path is already present.
    fn make_dir(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<(), FsError>> + Send;

    /// Removes a directory; succeeds only if it is empty.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::NotEmpty`] if the directory still has entries and
    /// [`FsError::NotFound`] if it is absent.
    fn remove_dir(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<(), FsError>> + Send;

    /// Removes a file.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::NotFound`] if the file is absent.
    fn remove_file(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<(), FsError>> + Send;

    /// Opens a path for writing, creating it if absent, and releases the
    /// handle immediately.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::ParentMissing`] if the parent directory does not
    /// exist.
    fn create_file(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<(), FsError>> + Send;

    /// Renames/moves a file or directory.
    ///
    /// # Errors
    ///
    /// Returns the underlying failure unchanged; no retry, no merge
    /// semantics.
    fn rename(
        &self,
        from: &Path,
        to: &Path,
    ) -> impl std::future::Future<Output = Result<(), FsError>> + Send;

    /// Reads a file's contents as bytes.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::NotFound`] if the file is absent.
    fn read_file(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<Vec<u8>, FsError>> + Send;
}
