//! Directory and file creation with ancestor materialization.

use std::path::{Path, PathBuf};

use arbor_domain::path::prefixes;

use crate::ops::exists::exists;
use crate::ports::{FileSystem, FsError};

/// Creates `path` as a directory, creating every missing ancestor segment
/// on the way down.
///
/// The descent is an explicit loop over the path's prefixes, shallowest
/// first, so recursion depth never exceeds the segment count. Ancestors that
/// already exist are skipped; an `AlreadyExists` from a concurrent creator
/// is absorbed the same way. A `ParentMissing` mid-walk means an ancestor
/// vanished underneath us, in which case the walk steps back one level and
/// re-creates it, within a bounded retry budget.
///
/// # Errors
///
/// Fails with [`FsError::AlreadyExists`] if the exact target path already
/// exists when the call starts. Any other underlying failure (permission,
/// invalid name) propagates unchanged.
pub async fn create_dir<F: FileSystem>(fs: &F, path: &Path) -> Result<PathBuf, FsError> {
    if exists(fs, path).await? {
        return Err(FsError::AlreadyExists(path.to_path_buf()));
    }

    let walk = prefixes(path);
    let mut depth = 0;
    let mut retries = walk.len();
    while depth < walk.len() {
        let prefix = &walk[depth];
        if exists(fs, prefix).await? {
            depth += 1;
            continue;
        }
        match fs.make_dir(prefix).await {
            Ok(()) => {
                tracing::trace!(path = %prefix.display(), "created directory segment");
                depth += 1;
            }
            // Lost a creation race for this segment; it exists now.
            Err(FsError::AlreadyExists(_)) => depth += 1,
            Err(FsError::ParentMissing(_)) if depth > 0 && retries > 0 => {
                retries -= 1;
                depth -= 1;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(path.to_path_buf())
}

/// Creates `path` as an empty file, materializing the parent directory
/// chain if it is missing.
///
/// The open is attempted first; only a `ParentMissing` failure triggers
/// ancestor creation, after which the whole attempt restarts from the top
/// (existence re-checked, open re-attempted). An `AlreadyExists` surfaced by
/// that ancestor creation means the parent appeared concurrently and is
/// absorbed.
///
/// # Errors
///
/// Fails with [`FsError::AlreadyExists`] if `path` itself already exists.
/// Any other open failure propagates unchanged.
pub async fn create_file<F: FileSystem>(fs: &F, path: &Path) -> Result<PathBuf, FsError> {
    let mut ancestors_created = false;
    loop {
        if exists(fs, path).await? {
            return Err(FsError::AlreadyExists(path.to_path_buf()));
        }
        match fs.create_file(path).await {
            Ok(()) => {
                tracing::trace!(path = %path.display(), "created file");
                return Ok(path.to_path_buf());
            }
            Err(FsError::ParentMissing(_)) if !ancestors_created => {
                ancestors_created = true;
                let parent = path.parent().unwrap_or(Path::new(""));
                match create_dir(fs, parent).await {
                    Ok(_) | Err(FsError::AlreadyExists(_)) => {}
                    Err(e) => return Err(e),
                }
            }
            Err(e) => return Err(e),
        }
    }
}
