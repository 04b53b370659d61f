//! Immediate and deep directory listing.

use std::path::{Path, PathBuf};

use futures::future::{BoxFuture, try_join_all};

use arbor_domain::{DirListing, Metadata};

use crate::ports::{FileSystem, FsError};

/// Lists the immediate children of a directory, classified into files and
/// subdirectories.
///
/// All per-child stats are issued concurrently; the call resolves only once
/// every child has been classified. Classification order follows the
/// directory-read order, which keeps listings deterministic for a given
/// filesystem state. Children that are neither a regular file nor a
/// directory are silently dropped.
///
/// # Errors
///
/// Fails with the directory-read error if the initial read fails, and with
/// the first stat error if any single child stat fails (for example a child
/// deleted between the read and its stat). There is no best-effort partial
/// listing.
pub async fn list<F: FileSystem>(fs: &F, path: &Path) -> Result<DirListing, FsError> {
    let names = fs.read_dir(path).await?;

    let classified: Vec<(PathBuf, Metadata)> = try_join_all(names.into_iter().map(|name| {
        let child = path.join(name);
        async move {
            let meta = fs.metadata(&child).await?;
            Ok::<_, FsError>((child, meta))
        }
    }))
    .await?;

    let mut listing = DirListing::new();
    for (child, meta) in classified {
        if meta.is_dir {
            listing.dirs.push(child);
        } else if meta.is_file {
            listing.files.push(child);
        }
    }
    Ok(listing)
}

/// Recursively lists every file and directory under `path` into one flat
/// classification.
///
/// Each level's immediate subdirectories are expanded concurrently; every
/// recursive branch builds its own local listing and the caller folds the
/// children's results into its own after all of them complete. Resulting
/// order is the parent's immediate entries in directory-read order followed
/// by each subtree in subdirectory order.
///
/// Directories reached via two different paths are not deduplicated, and a
/// filesystem cycle (for example a symlink loop) will not terminate; both
/// are outside the supported tree shape.
///
/// # Errors
///
/// Fails with the first error observed at any level; no partial result.
pub fn list_deep<'a, F: FileSystem>(
    fs: &'a F,
    path: &'a Path,
) -> BoxFuture<'a, Result<DirListing, FsError>> {
    Box::pin(async move {
        let mut listing = list(fs, path).await?;
        tracing::trace!(path = %path.display(), dirs = listing.dirs.len(), "expanding subtree");

        let subtrees = try_join_all(listing.dirs.iter().map(|dir| list_deep(fs, dir))).await?;
        for subtree in subtrees {
            listing.merge(subtree);
        }
        Ok(listing)
    })
}
