//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use vibe_core::{
    application::{ApplicationError, ports::Filesystem},
    error::VibeResult,
};

/// In-memory filesystem for testing.
///
/// Cloning shares state, so a test can hand one clone to the service and
/// inspect the other.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Register a directory and all its ancestors.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut inner = self.inner.write().unwrap();
        let mut current = PathBuf::new();
        for component in path.as_ref().components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Seed a file, creating its parent directories.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        let mut inner = self.inner.write().unwrap();
        inner.files.insert(path.to_path_buf(), content.into());
    }

    /// Make writes to `path` fail as if permission were denied.
    pub fn deny_writes(&self, path: impl AsRef<Path>) {
        let mut inner = self.inner.write().unwrap();
        inner.read_only.insert(path.as_ref().to_path_buf());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
    }

    fn read_to_string(&self, path: &Path) -> VibeResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> VibeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.read_only.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into());
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/a/b.txt"), "x").is_err());
        fs.add_dir("/a");
        fs.write_file(Path::new("/a/b.txt"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("/a/b.txt")).as_deref(), Some("x"));
    }

    #[test]
    fn denied_write_fails() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/w/c.json", "old");
        fs.deny_writes("/w/c.json");
        let err = fs.write_file(Path::new("/w/c.json"), "new").unwrap_err();
        assert!(err.to_string().contains("Permission denied"));
        assert_eq!(fs.read_file(Path::new("/w/c.json")).as_deref(), Some("old"));
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.add_file("/x/y", "z");
        assert!(other.exists(Path::new("/x/y")));
        assert_eq!(other.list_files(), vec![PathBuf::from("/x/y")]);
    }
}
