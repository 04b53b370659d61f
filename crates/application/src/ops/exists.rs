//! Existence check derived from stat.

use std::path::Path;

use crate::ports::{FileSystem, FsError};

/// Checks whether a path exists.
///
/// This is the only place a [`FsError::NotFound`] is recovered: it becomes
/// `Ok(false)`. Any other failure, notably a permission denial, propagates
/// unchanged so callers cannot conflate "denied" with "absent".
///
/// # Errors
///
/// Returns any stat failure other than `NotFound`.
pub async fn exists<F: FileSystem>(fs: &F, path: &Path) -> Result<bool, FsError> {
    match fs.metadata(path).await {
        Ok(_) => Ok(true),
        Err(FsError::NotFound(_)) => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::testing::MemoryFileSystem;

    #[tokio::test]
    async fn test_exists_true_for_seeded_file() {
        let fs = MemoryFileSystem::new();
        fs.seed_file(Path::new("a/f.txt"), 3);

        assert!(exists(&fs, Path::new("a/f.txt")).await.unwrap());
        assert!(exists(&fs, Path::new("a")).await.unwrap());
    }

    #[tokio::test]
    async fn test_exists_false_for_missing_path() {
        let fs = MemoryFileSystem::new();

        assert!(!exists(&fs, Path::new("nope")).await.unwrap());
    }

    #[tokio::test]
    async fn test_exists_propagates_permission_denied() {
        let fs = MemoryFileSystem::new();
        fs.seed_dir(Path::new("locked"));
        fs.deny(Path::new("locked"));

        let err = exists(&fs, Path::new("locked")).await.unwrap_err();
        assert!(matches!(err, FsError::PermissionDenied(_)));
    }
}
