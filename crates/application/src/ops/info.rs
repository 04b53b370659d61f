//! Stat decoration with kind tag and effective size.

use std::path::Path;

use arbor_domain::PathInfo;

use crate::ops::size::dir_size;
use crate::ports::{FileSystem, FsError};

/// Builds a [`PathInfo`] for a path.
///
/// Files keep their stat size; directories get the aggregate size of their
/// contents, which costs a full second traversal of the subtree. Callers
/// needing both a listing and sizes in one pass should compose
/// [`list`](crate::ops::list) and [`dir_size`](crate::ops::dir_size)
/// themselves instead of calling this per entry.
///
/// # Errors
///
/// Fails with the stat error, or with any error from the aggregate-size
/// traversal for directories.
pub async fn info<F: FileSystem>(fs: &F, path: &Path) -> Result<PathInfo, FsError> {
    let meta = fs.metadata(path).await?;
    if meta.is_dir {
        let size = dir_size(fs, path).await?;
        Ok(PathInfo::directory(size, &meta))
    } else {
        Ok(PathInfo::file(&meta))
    }
}
