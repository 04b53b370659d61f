//! Recursive directory removal.

use std::path::{Path, PathBuf};

use futures::future::{BoxFuture, try_join_all};

use crate::ops::list::list;
use crate::ports::{FileSystem, FsError};

/// Removes the directory at `path`, emptying it first if necessary.
///
/// The removal is attempted directly; only a [`FsError::NotEmpty`] failure
/// triggers the fallback: list the immediate level, remove every file
/// concurrently, recurse into every subdirectory concurrently, then retry
/// the removal of `path` itself. Two concurrent removals of overlapping
/// trees are not guarded against; the loser surfaces the underlying failure.
///
/// # Errors
///
/// Any failure from the direct attempt other than `NotEmpty`, and any
/// failure from the fallback (listing, file removal, recursive removal or
/// the final retry), aborts the whole operation. There is no partial-cleanup
/// success reporting.
pub fn remove_dir<'a, F: FileSystem>(
    fs: &'a F,
    path: &'a Path,
) -> BoxFuture<'a, Result<PathBuf, FsError>> {
    Box::pin(async move {
        match fs.remove_dir(path).await {
            Ok(()) => Ok(path.to_path_buf()),
            Err(FsError::NotEmpty(_)) => {
                tracing::debug!(path = %path.display(), "directory not empty, emptying first");
                let listing = list(fs, path).await?;

                try_join_all(listing.files.iter().map(|file| fs.remove_file(file))).await?;
                try_join_all(listing.dirs.iter().map(|dir| remove_dir(fs, dir))).await?;

                fs.remove_dir(path).await?;
                Ok(path.to_path_buf())
            }
            Err(e) => Err(e),
        }
    })
}
