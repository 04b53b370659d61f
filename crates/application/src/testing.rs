//! Deterministic in-memory [`FileSystem`] implementation.
//!
//! Backs the unit tests of the tree operations: directory entries keep
//! insertion order (standing in for directory-read order), permission
//! denials can be injected per path, and a backing node can be dropped
//! while its directory entry stays behind to simulate a child deleted
//! between a directory read and its stat.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::SystemTime;

use arbor_domain::{Metadata, path::prefixes};

use crate::ports::{FileSystem, FsError};

#[derive(Debug, Clone)]
enum Node {
    Dir {
        /// Child names in insertion order.
        children: Vec<PathBuf>,
        created: SystemTime,
    },
    File {
        data: Vec<u8>,
        created: SystemTime,
    },
}

impl Node {
    fn dir() -> Self {
        Self::Dir {
            children: Vec::new(),
            created: SystemTime::now(),
        }
    }

    fn file(data: Vec<u8>) -> Self {
        Self::File {
            data,
            created: SystemTime::now(),
        }
    }
}

#[derive(Debug)]
struct Inner {
    nodes: HashMap<PathBuf, Node>,
    denied: HashSet<PathBuf>,
    make_dir_log: Vec<PathBuf>,
}

impl Inner {
    fn attach(&mut self, child: &Path) {
        let Some(parent) = child.parent() else {
            return;
        };
        let Some(name) = child.file_name() else {
            return;
        };
        if let Some(Node::Dir { children, .. }) = self.nodes.get_mut(parent) {
            children.push(PathBuf::from(name));
        }
    }

    fn detach(&mut self, child: &Path) {
        let Some(parent) = child.parent() else {
            return;
        };
        let Some(name) = child.file_name() else {
            return;
        };
        if let Some(Node::Dir { children, .. }) = self.nodes.get_mut(parent) {
            children.retain(|c| c.as_os_str() != name);
        }
    }

    fn check_denied(&self, path: &Path) -> Result<(), FsError> {
        if self.denied.contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        Ok(())
    }

    fn check_parent(&self, path: &Path) -> Result<(), FsError> {
        let Some(parent) = path.parent() else {
            return Ok(());
        };
        match self.nodes.get(parent) {
            Some(Node::Dir { .. }) => Ok(()),
            Some(Node::File { .. }) => Err(FsError::Io(std::io::Error::other(format!(
                "not a directory: {}",
                parent.display()
            )))),
            None => Err(FsError::ParentMissing(path.to_path_buf())),
        }
    }
}

/// In-memory filesystem for tests.
///
/// Clones share the same underlying tree, so a test can keep a handle for
/// seeding and assertions while the manager owns another.
#[derive(Debug, Clone)]
pub struct MemoryFileSystem {
    inner: Arc<Mutex<Inner>>,
}

impl Default for MemoryFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFileSystem {
    /// Creates an empty in-memory filesystem with relative and absolute
    /// roots pre-seeded.
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(PathBuf::new(), Node::dir());
        nodes.insert(PathBuf::from("/"), Node::dir());
        Self {
            inner: Arc::new(Mutex::new(Inner {
                nodes,
                denied: HashSet::new(),
                make_dir_log: Vec::new(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seeds a directory and all of its ancestors, bypassing the port.
    pub fn seed_dir(&self, path: &Path) {
        let mut inner = self.lock();
        for prefix in prefixes(path) {
            if !inner.nodes.contains_key(&prefix) {
                inner.nodes.insert(prefix.clone(), Node::dir());
                inner.attach(&prefix);
            }
        }
    }

    /// Seeds a file of `len` zero bytes, creating missing ancestors.
    pub fn seed_file(&self, path: &Path, len: usize) {
        if let Some(parent) = path.parent() {
            self.seed_dir(parent);
        }
        let mut inner = self.lock();
        inner.nodes.insert(path.to_path_buf(), Node::file(vec![0; len]));
        inner.attach(path);
    }

    /// Makes every subsequent operation touching `path` fail with
    /// [`FsError::PermissionDenied`].
    pub fn deny(&self, path: &Path) {
        self.lock().denied.insert(path.to_path_buf());
    }

    /// Removes the backing node but leaves its directory entry behind,
    /// simulating a child deleted between the directory read and its stat.
    pub fn drop_backing_node(&self, path: &Path) {
        self.lock().nodes.remove(path);
    }

    /// Paths successfully created through [`FileSystem::make_dir`], in call
    /// order.
    #[must_use]
    pub fn make_dir_log(&self) -> Vec<PathBuf> {
        self.lock().make_dir_log.clone()
    }
}

impl FileSystem for MemoryFileSystem {
    async fn metadata(&self, path: &Path) -> Result<Metadata, FsError> {
        let inner = self.lock();
        inner.check_denied(path)?;
        match inner.nodes.get(path) {
            Some(Node::Dir { created, .. }) => Ok(Metadata {
                is_dir: true,
                is_file: false,
                len: 0,
                accessed: None,
                modified: None,
                created: Some(*created),
            }),
            Some(Node::File { data, created }) => Ok(Metadata {
                is_dir: false,
                is_file: true,
                len: data.len() as u64,
                accessed: None,
                modified: None,
                created: Some(*created),
            }),
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }

    async fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, FsError> {
        let inner = self.lock();
        inner.check_denied(path)?;
        match inner.nodes.get(path) {
            Some(Node::Dir { children, .. }) => Ok(children.clone()),
            Some(Node::File { .. }) => Err(FsError::Io(std::io::Error::other(format!(
                "not a directory: {}",
                path.display()
            )))),
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }

    async fn make_dir(&self, path: &Path) -> Result<(), FsError> {
        let mut inner = self.lock();
        inner.check_denied(path)?;
        if inner.nodes.contains_key(path) {
            return Err(FsError::AlreadyExists(path.to_path_buf()));
        }
        inner.check_parent(path)?;
        inner.nodes.insert(path.to_path_buf(), Node::dir());
        inner.attach(path);
        inner.make_dir_log.push(path.to_path_buf());
        Ok(())
    }

    async fn remove_dir(&self, path: &Path) -> Result<(), FsError> {
        let mut inner = self.lock();
        inner.check_denied(path)?;
        match inner.nodes.get(path) {
            Some(Node::Dir { children, .. }) => {
                if !children.is_empty() {
                    return Err(FsError::NotEmpty(path.to_path_buf()));
                }
                inner.nodes.remove(path);
                inner.detach(path);
                Ok(())
            }
            Some(Node::File { .. }) => Err(FsError::Io(std::io::Error::other(format!(
                "not a directory: {}",
                path.display()
            )))),
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }

    async fn remove_file(&self, path: &Path) -> Result<(), FsError> {
        let mut inner = self.lock();
        inner.check_denied(path)?;
        match inner.nodes.get(path) {
            Some(Node::File { .. }) => {
                inner.nodes.remove(path);
                inner.detach(path);
                Ok(())
            }
            Some(Node::Dir { .. }) => Err(FsError::Io(std::io::Error::other(format!(
                "is a directory: {}",
                path.display()
            )))),
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }

    async fn create_file(&self, path: &Path) -> Result<(), FsError> {
        let mut inner = self.lock();
        inner.check_denied(path)?;
        match inner.nodes.get_mut(path) {
            Some(Node::File { data, .. }) => {
                // Open-for-write truncates an existing file.
                data.clear();
                return Ok(());
            }
            Some(Node::Dir { .. }) => {
                return Err(FsError::Io(std::io::Error::other(format!(
                    "is a directory: {}",
                    path.display()
                ))));
            }
            None => {}
        }
        inner.check_parent(path)?;
        inner.nodes.insert(path.to_path_buf(), Node::file(Vec::new()));
        inner.attach(path);
        Ok(())
    }

    async fn rename(&self, from: &Path, to: &Path) -> Result<(), FsError> {
        let mut inner = self.lock();
        inner.check_denied(from)?;
        inner.check_denied(to)?;
        if !inner.nodes.contains_key(from) {
            return Err(FsError::NotFound(from.to_path_buf()));
        }
        if let Some(parent) = to.parent() {
            if !parent.as_os_str().is_empty() && !inner.nodes.contains_key(parent) {
                return Err(FsError::NotFound(parent.to_path_buf()));
            }
        }
        match inner.nodes.get(to) {
            Some(Node::Dir { .. }) => {
                return Err(FsError::Io(std::io::Error::other(format!(
                    "destination exists: {}",
                    to.display()
                ))));
            }
            Some(Node::File { .. }) => {
                inner.nodes.remove(to);
                inner.detach(to);
            }
            None => {}
        }

        let moved: Vec<PathBuf> = inner
            .nodes
            .keys()
            .filter(|k| k.starts_with(from))
            .cloned()
            .collect();
        for old_key in moved {
            if let Some(node) = inner.nodes.remove(&old_key) {
                let new_key = old_key
                    .strip_prefix(from)
                    .map_or_else(|_| to.to_path_buf(), |rest| {
                        if rest.as_os_str().is_empty() {
                            to.to_path_buf()
                        } else {
                            to.join(rest)
                        }
                    });
                inner.nodes.insert(new_key, node);
            }
        }
        inner.detach(from);
        inner.attach(to);
        Ok(())
    }

    async fn read_file(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        let inner = self.lock();
        inner.check_denied(path)?;
        match inner.nodes.get(path) {
            Some(Node::File { data, .. }) => Ok(data.clone()),
            Some(Node::Dir { .. }) => Err(FsError::Io(std::io::Error::other(format!(
                "is a directory: {}",
                path.display()
            )))),
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_read_dir_keeps_insertion_order() {
        let fs = MemoryFileSystem::new();
        fs.seed_file(Path::new("d/zeta"), 1);
        fs.seed_file(Path::new("d/alpha"), 1);
        fs.seed_file(Path::new("d/mid"), 1);

        let names = fs.read_dir(Path::new("d")).await.unwrap();
        assert_eq!(
            names,
            vec![
                PathBuf::from("zeta"),
                PathBuf::from("alpha"),
                PathBuf::from("mid"),
            ]
        );
    }

    #[tokio::test]
    async fn test_make_dir_requires_parent() {
        let fs = MemoryFileSystem::new();

        let err = fs.make_dir(Path::new("a/b")).await.unwrap_err();
        assert!(matches!(err, FsError::ParentMissing(_)));

        fs.make_dir(Path::new("a")).await.unwrap();
        fs.make_dir(Path::new("a/b")).await.unwrap();
        assert!(fs.metadata(Path::new("a/b")).await.unwrap().is_dir);
    }

    #[tokio::test]
    async fn test_remove_dir_refuses_non_empty() {
        let fs = MemoryFileSystem::new();
        fs.seed_file(Path::new("d/f"), 1);

        let err = fs.remove_dir(Path::new("d")).await.unwrap_err();
        assert!(matches!(err, FsError::NotEmpty(_)));
    }

    #[tokio::test]
    async fn test_rename_moves_subtree() {
        let fs = MemoryFileSystem::new();
        fs.seed_file(Path::new("src/a/f.txt"), 2);

        fs.rename(Path::new("src"), Path::new("dst")).await.unwrap();

        assert!(matches!(
            fs.metadata(Path::new("src")).await.unwrap_err(),
            FsError::NotFound(_)
        ));
        assert!(fs.metadata(Path::new("dst/a/f.txt")).await.unwrap().is_file);
    }

    #[tokio::test]
    async fn test_create_file_truncates_existing() {
        let fs = MemoryFileSystem::new();
        fs.seed_file(Path::new("d/f"), 8);

        fs.create_file(Path::new("d/f")).await.unwrap();
        assert_eq!(fs.metadata(Path::new("d/f")).await.unwrap().len, 0);
    }
}
