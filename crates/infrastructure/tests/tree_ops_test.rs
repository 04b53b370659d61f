//! Integration tests for the tree operations against the real filesystem.
//!
//! These drive the full `FileManager` + `TokioFileSystem` stack inside a
//! temporary directory: round-trip creation and removal, ancestor
//! materialization, aggregate sizes, deep listing and rename.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::HashSet;
use std::path::PathBuf;

use tempfile::tempdir;

use arbor_application::{FileManager, FsError};
use arbor_domain::EntryKind;
use arbor_infrastructure::TokioFileSystem;

fn manager() -> FileManager<TokioFileSystem> {
    FileManager::new(TokioFileSystem::new())
}

#[tokio::test]
async fn test_create_dir_then_exists_then_remove_round_trip() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let target = temp_dir.path().join("round-trip");
    let manager = manager();

    assert!(!manager.exists(&target).await.unwrap());

    manager.create_dir(&target).await.unwrap();
    assert!(manager.exists(&target).await.unwrap());

    manager.remove_dir(&target).await.unwrap();
    assert!(!manager.exists(&target).await.unwrap());
}

#[tokio::test]
async fn test_create_dir_materializes_every_ancestor() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let target = temp_dir.path().join("a/b/c");
    let manager = manager();

    let created = manager.create_dir(&target).await.unwrap();
    assert_eq!(created, target);

    assert!(temp_dir.path().join("a").is_dir());
    assert!(temp_dir.path().join("a/b").is_dir());
    assert!(temp_dir.path().join("a/b/c").is_dir());
}

#[tokio::test]
async fn test_duplicate_creation_fails_already_exists() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let dir = temp_dir.path().join("dup");
    let file = temp_dir.path().join("dup-file.txt");
    let manager = manager();

    manager.create_dir(&dir).await.unwrap();
    let err = manager.create_dir(&dir).await.unwrap_err();
    assert!(matches!(err, FsError::AlreadyExists(p) if p == dir));

    manager.create_file(&file).await.unwrap();
    let err = manager.create_file(&file).await.unwrap_err();
    assert!(matches!(err, FsError::AlreadyExists(p) if p == file));
}

#[tokio::test]
async fn test_create_file_materializes_parent_chain() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let target = temp_dir.path().join("deep/er/note.txt");
    let manager = manager();

    manager.create_file(&target).await.unwrap();

    assert!(target.is_file());
    assert!(temp_dir.path().join("deep/er").is_dir());
}

#[tokio::test]
async fn test_dir_size_sums_nested_files() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let root = temp_dir.path().join("sized");
    let manager = manager();

    manager.create_dir(&root.join("x/y")).await.unwrap();
    tokio::fs::write(root.join("a.bin"), vec![0_u8; 19]).await.unwrap();
    tokio::fs::write(root.join("x/b.bin"), vec![0_u8; 10]).await.unwrap();
    tokio::fs::write(root.join("x/y/c.bin"), vec![0_u8; 25]).await.unwrap();

    assert_eq!(manager.dir_size(&root).await.unwrap(), 54);
}

#[tokio::test]
async fn test_info_tags_files_and_directories() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let root = temp_dir.path().join("tagged");
    let manager = manager();

    manager.create_dir(&root).await.unwrap();
    tokio::fs::write(root.join("f.bin"), vec![0_u8; 7]).await.unwrap();

    let file_info = manager.info(&root.join("f.bin")).await.unwrap();
    assert_eq!(file_info.kind, EntryKind::File);
    assert_eq!(file_info.size, 7);

    let dir_info = manager.info(&root).await.unwrap();
    assert_eq!(dir_info.kind, EntryKind::Directory);
    assert_eq!(dir_info.size, 7);
}

#[tokio::test]
async fn test_list_deep_collects_every_level() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let root = temp_dir.path().join("tree");
    let manager = manager();

    manager.create_dir(&root.join("a")).await.unwrap();
    manager.create_dir(&root.join("b/c/d")).await.unwrap();
    manager.create_file(&root.join("t.txt")).await.unwrap();
    manager.create_file(&root.join("b/u.txt")).await.unwrap();

    let listing = manager.list_deep(&root).await.unwrap();

    let dirs: HashSet<PathBuf> = listing.dirs.into_iter().collect();
    let files: HashSet<PathBuf> = listing.files.into_iter().collect();

    let expected_dirs: HashSet<PathBuf> = ["a", "b", "b/c", "b/c/d"]
        .iter()
        .map(|p| root.join(p))
        .collect();
    let expected_files: HashSet<PathBuf> =
        ["t.txt", "b/u.txt"].iter().map(|p| root.join(p)).collect();

    assert_eq!(dirs, expected_dirs);
    assert_eq!(files, expected_files);
}

#[tokio::test]
async fn test_remove_dir_clears_populated_tree() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let root = temp_dir.path().join("doomed");
    let manager = manager();

    manager.create_file(&root.join("top.txt")).await.unwrap();
    manager.create_file(&root.join("a/mid.txt")).await.unwrap();
    manager.create_file(&root.join("a/b/leaf.txt")).await.unwrap();
    manager.create_dir(&root.join("hollow")).await.unwrap();

    manager.remove_dir(&root).await.unwrap();

    assert!(!root.exists());
    assert!(!manager.exists(&root).await.unwrap());
}

#[tokio::test]
async fn test_rename_round_trip() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let old = temp_dir.path().join("before.txt");
    let new = temp_dir.path().join("after.txt");
    let manager = manager();

    manager.create_file(&old).await.unwrap();

    manager.rename(&old, &new).await.unwrap();
    assert!(!manager.exists(&old).await.unwrap());
    assert!(manager.exists(&new).await.unwrap());

    manager.rename(&new, &old).await.unwrap();
    assert!(manager.exists(&old).await.unwrap());
    assert!(!manager.exists(&new).await.unwrap());
}

#[tokio::test]
async fn test_stat_not_found_and_exists_classification() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let ghost = temp_dir.path().join("ghost");
    let manager = manager();

    let err = manager.stat(&ghost).await.unwrap_err();
    assert!(matches!(err, FsError::NotFound(p) if p == ghost));

    assert!(!manager.exists(&ghost).await.unwrap());
}

#[tokio::test]
async fn test_list_fails_on_missing_directory() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let manager = manager();

    let err = manager.list(&temp_dir.path().join("void")).await.unwrap_err();
    assert!(matches!(err, FsError::NotFound(_)));
}

#[tokio::test]
async fn test_read_file_round_trip() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("content.txt");
    let manager = manager();

    tokio::fs::write(&path, b"fifty-four").await.unwrap();
    assert_eq!(manager.read_file(&path).await.unwrap(), b"fifty-four");
}
