//! Aggregate directory size.

use std::path::Path;

use futures::future::{BoxFuture, try_join, try_join_all};

use crate::ops::list::list;
use crate::ports::{FileSystem, FsError};

/// Sums the sizes of all regular files transitively contained under `path`.
///
/// Immediate file stats and subdirectory recursions are both fanned out
/// concurrently; every discovered subdirectory is visited exactly once.
/// Resolves 0 for an empty directory.
///
/// # Errors
///
/// Fails with the first stat or directory-read error anywhere in the tree;
/// no partial sum is reported.
pub fn dir_size<'a, F: FileSystem>(
    fs: &'a F,
    path: &'a Path,
) -> BoxFuture<'a, Result<u64, FsError>> {
    Box::pin(async move {
        let listing = list(fs, path).await?;

        let file_sizes = try_join_all(listing.files.iter().map(|file| async move {
            let meta = fs.metadata(file).await?;
            Ok::<u64, FsError>(meta.len)
        }));
        let subtree_sizes = try_join_all(listing.dirs.iter().map(|dir| dir_size(fs, dir)));

        let (file_sizes, subtree_sizes) = try_join(file_sizes, subtree_sizes).await?;
        Ok(file_sizes.into_iter().sum::<u64>() + subtree_sizes.into_iter().sum::<u64>())
    })
}
