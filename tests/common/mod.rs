#![allow(dead_code)]

use async_trait::async_trait;
use pkg_scaffold::error::Result;
use pkg_scaffold::fs::FileSystem;
use pkg_scaffold::installer::Installer;
use pkg_scaffold::store::TemplateStore;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A filesystem operation, in the order it was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    CreateDir(PathBuf),
    Write(PathBuf),
}

#[derive(Default)]
struct State {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
    ops: Vec<Op>,
}

/// In-memory filesystem enforcing that parents exist before children.
#[derive(Default)]
pub struct MemoryFileSystem {
    state: Mutex<State>,
    fail_writes_to: Option<PathBuf>,
}

impl MemoryFileSystem {
    /// Creates a filesystem in which `root` already exists.
    pub fn with_root(root: &Path) -> Self {
        let fs = Self::default();
        fs.state.lock().unwrap().dirs.insert(root.to_path_buf());
        fs
    }

    /// Makes every write to `path` fail with `PermissionDenied`.
    pub fn failing_writes_to(mut self, path: &Path) -> Self {
        self.fail_writes_to = Some(path.to_path_buf());
        self
    }

    pub fn ops(&self) -> Vec<Op> {
        self.state.lock().unwrap().ops.clone()
    }

    pub fn file(&self, path: &Path) -> Option<String> {
        self.state.lock().unwrap().files.get(path).cloned()
    }

    pub fn has_dir(&self, path: &Path) -> bool {
        self.state.lock().unwrap().dirs.contains(path)
    }
}

fn parent_exists(state: &State, path: &Path) -> bool {
    path.parent().is_some_and(|parent| state.dirs.contains(parent))
}

#[async_trait]
impl FileSystem for MemoryFileSystem {
    async fn exists(&self, path: &Path) -> io::Result<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.dirs.contains(path) || state.files.contains_key(path))
    }

    async fn create_dir(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.dirs.contains(path) || state.files.contains_key(path) {
            return Err(io::Error::new(io::ErrorKind::AlreadyExists, "already exists"));
        }
        if !parent_exists(&state, path) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "parent missing"));
        }
        state.dirs.insert(path.to_path_buf());
        state.ops.push(Op::CreateDir(path.to_path_buf()));
        Ok(())
    }

    async fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        if self.fail_writes_to.as_deref() == Some(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        }
        let mut state = self.state.lock().unwrap();
        if !parent_exists(&state, path) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "parent missing"));
        }
        state.files.insert(path.to_path_buf(), contents.to_string());
        state.ops.push(Op::Write(path.to_path_buf()));
        Ok(())
    }
}

/// Templates held in memory.
#[derive(Default)]
pub struct MemoryTemplates {
    files: HashMap<String, String>,
}

impl MemoryTemplates {
    pub fn new(files: &[(&str, &str)]) -> Self {
        Self {
            files: files.iter().map(|(path, content)| (path.to_string(), content.to_string())).collect(),
        }
    }
}

#[async_trait]
impl TemplateStore for MemoryTemplates {
    async fn read(&self, relative: &str) -> io::Result<String> {
        self.files
            .get(relative)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such template"))
    }
}

/// Installer recording the directories it was asked to install into.
#[derive(Default)]
pub struct RecordingInstaller {
    calls: Mutex<Vec<PathBuf>>,
}

impl RecordingInstaller {
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Installer for RecordingInstaller {
    async fn install(&self, project_dir: &Path) -> Result<()> {
        self.calls.lock().unwrap().push(project_dir.to_path_buf());
        Ok(())
    }
}
