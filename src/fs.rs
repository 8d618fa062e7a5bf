//! Filesystem capability used by the generator.
//!
//! The engine only goes through [`FileSystem`], so tests can substitute an
//! in-memory implementation for the real disk.

use async_trait::async_trait;
use std::io;
use std::path::Path;

/// Filesystem operations needed to write a generated project.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Returns whether anything (file, directory or link) exists at `path`.
    async fn exists(&self, path: &Path) -> io::Result<bool>;

    /// Creates a single directory. Fails if it already exists or if its
    /// parent is missing.
    async fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Writes `contents` to `path`, replacing any existing file.
    async fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// [`FileSystem`] backed by the local disk through `tokio::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

#[async_trait]
impl FileSystem for LocalFileSystem {
    async fn exists(&self, path: &Path) -> io::Result<bool> {
        // Does not follow links: a dangling symlink still occupies the path
        match tokio::fs::symlink_metadata(path).await {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn create_dir(&self, path: &Path) -> io::Result<()> {
        tokio::fs::create_dir(path).await
    }

    async fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        tokio::fs::write(path, contents).await
    }
}
