//! Real file system implementation.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

use arbor_application::ports::{FileSystem, FsError};
use arbor_domain::Metadata;

/// Real file system implementation using `tokio::fs`.
#[derive(Debug, Clone, Default)]
pub struct TokioFileSystem;

impl TokioFileSystem {
    /// Creates a new `TokioFileSystem`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Maps a platform error onto the error taxonomy, blaming `path`.
fn classify(path: &Path, e: io::Error) -> FsError {
    match e.kind() {
        io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
        io::ErrorKind::AlreadyExists => FsError::AlreadyExists(path.to_path_buf()),
        io::ErrorKind::DirectoryNotEmpty => FsError::NotEmpty(path.to_path_buf()),
        _ => FsError::Io(e),
    }
}

/// For creation calls an ENOENT refers to the missing parent chain, not to
/// the target itself.
fn classify_create(path: &Path, e: io::Error) -> FsError {
    if e.kind() == io::ErrorKind::NotFound {
        FsError::ParentMissing(path.to_path_buf())
    } else {
        classify(path, e)
    }
}

fn snapshot(meta: &std::fs::Metadata) -> Metadata {
    Metadata {
        is_dir: meta.is_dir(),
        is_file: meta.is_file(),
        len: meta.len(),
        accessed: meta.accessed().ok(),
        modified: meta.modified().ok(),
        created: meta.created().ok(),
    }
}

impl FileSystem for TokioFileSystem {
    async fn metadata(&self, path: &Path) -> Result<Metadata, FsError> {
        let meta = fs::metadata(path).await.map_err(|e| classify(path, e))?;
        Ok(snapshot(&meta))
    }

    async fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, FsError> {
        let mut dir = fs::read_dir(path).await.map_err(|e| classify(path, e))?;

        // Names stay in directory-read order; callers depend on the listing
        // order being exactly what the platform returned.
        let mut names = Vec::new();
        while let Some(entry) = dir.next_entry().await.map_err(|e| classify(path, e))? {
            names.push(PathBuf::from(entry.file_name()));
        }
        Ok(names)
    }

    async fn make_dir(&self, path: &Path) -> Result<(), FsError> {
        tracing::trace!(path = %path.display(), "mkdir");
        fs::create_dir(path).await.map_err(|e| classify_create(path, e))
    }

    async fn remove_dir(&self, path: &Path) -> Result<(), FsError> {
        tracing::trace!(path = %path.display(), "rmdir");
        fs::remove_dir(path).await.map_err(|e| classify(path, e))
    }

    async fn remove_file(&self, path: &Path) -> Result<(), FsError> {
        tracing::trace!(path = %path.display(), "unlink");
        fs::remove_file(path).await.map_err(|e| classify(path, e))
    }

    async fn create_file(&self, path: &Path) -> Result<(), FsError> {
        tracing::trace!(path = %path.display(), "open for write");
        fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .await
            .map(drop)
            .map_err(|e| classify_create(path, e))
    }

    async fn rename(&self, from: &Path, to: &Path) -> Result<(), FsError> {
        tracing::trace!(from = %from.display(), to = %to.display(), "rename");
        fs::rename(from, to).await.map_err(|e| classify(from, e))
    }

    async fn read_file(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        fs::read(path).await.map_err(|e| classify(path, e))
    }
}
