//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use scribe_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ScribeResult,
};

/// In-memory filesystem for testing.
///
/// Mirrors the failure modes of the local adapter: a file in the way of a
/// directory, a read-only directory, and name collisions.
#[derive(Debug, Clone, Default)]
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
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.read().files.get(path).cloned()
    }

    /// Whether `path` was created as a directory (testing helper).
    pub fn has_dir(&self, path: &Path) -> bool {
        self.read().is_dir(path)
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read().files.keys().cloned().collect()
    }

    /// Seed a file, bypassing create-new checks.
    pub fn insert_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.write().files.insert(path.into(), content.into());
    }

    /// Seed a directory.
    pub fn insert_dir(&self, path: impl Into<PathBuf>) {
        self.write().directories.insert(path.into());
    }

    /// Forbid creating entries directly inside `path`.
    pub fn set_read_only(&self, path: impl Into<PathBuf>) {
        self.write().read_only.insert(path.into());
    }

    // A poisoned lock only means another test thread panicked mid-write;
    // the maps are still usable.
    fn read(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl MemoryFilesystemInner {
    fn is_dir(&self, path: &Path) -> bool {
        path.as_os_str().is_empty() || self.directories.contains(path)
    }

    fn is_read_only(&self, parent: Option<&Path>) -> bool {
        parent.is_some_and(|p| self.read_only.contains(p))
    }
}

impl Filesystem for MemoryFilesystem {
    fn ensure_dir(&self, path: &Path) -> ScribeResult<()> {
        let mut inner = self.write();

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::directory_creation(
                    path,
                    &io::Error::new(io::ErrorKind::AlreadyExists, "File exists"),
                )
                .into());
            }
            if inner.is_dir(&current) {
                continue;
            }
            if inner.is_read_only(current.parent()) {
                return Err(ApplicationError::directory_creation(
                    path,
                    &io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
                )
                .into());
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn create_new_file(&self, path: &Path, content: &str) -> ScribeResult<()> {
        let mut inner = self.write();
        let parent = path.parent();

        if let Some(parent) = parent {
            if !inner.is_dir(parent) {
                return Err(ApplicationError::write(
                    path,
                    &io::Error::new(io::ErrorKind::NotFound, "Parent directory does not exist"),
                )
                .into());
            }
        }
        if inner.is_read_only(parent) {
            return Err(ApplicationError::write(
                path,
                &io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
            )
            .into());
        }
        if inner.files.contains_key(path) || inner.directories.contains(path) {
            return Err(ApplicationError::write(
                path,
                &io::Error::new(io::ErrorKind::AlreadyExists, "File exists"),
            )
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dir_records_every_ancestor() {
        let fs = MemoryFilesystem::new();
        fs.ensure_dir(Path::new("blog/articles")).unwrap();
        assert!(fs.has_dir(Path::new("blog")));
        assert!(fs.has_dir(Path::new("blog/articles")));
    }

    #[test]
    fn ensure_dir_twice_is_fine() {
        let fs = MemoryFilesystem::new();
        fs.ensure_dir(Path::new("articles")).unwrap();
        assert!(fs.ensure_dir(Path::new("articles")).is_ok());
    }

    #[test]
    fn file_in_the_way_blocks_directory() {
        let fs = MemoryFilesystem::new();
        fs.insert_file("articles", "oops");

        let err = fs.ensure_dir(Path::new("articles")).unwrap_err();
        assert!(matches!(
            err.as_application(),
            Some(ApplicationError::DirectoryCreation { .. })
        ));
    }

    #[test]
    fn read_only_parent_blocks_new_directory() {
        let fs = MemoryFilesystem::new();
        fs.insert_dir("locked");
        fs.set_read_only("locked");

        let err = fs.ensure_dir(Path::new("locked/articles")).unwrap_err();
        assert_eq!(
            err.as_application().and_then(|e| e.io_kind()),
            Some(io::ErrorKind::PermissionDenied)
        );
    }

    #[test]
    fn create_new_file_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.create_new_file(Path::new("articles/a.md"), "x").is_err());
    }

    #[test]
    fn create_new_file_refuses_existing() {
        let fs = MemoryFilesystem::new();
        fs.insert_dir("articles");
        fs.insert_file("articles/a.md", "original");

        let err = fs
            .create_new_file(Path::new("articles/a.md"), "new")
            .unwrap_err();
        assert_eq!(
            err.as_application().and_then(|e| e.io_kind()),
            Some(io::ErrorKind::AlreadyExists)
        );
        assert_eq!(
            fs.read_file(Path::new("articles/a.md")).as_deref(),
            Some("original")
        );
    }

    #[test]
    fn file_without_parent_component_lands_in_root() {
        let fs = MemoryFilesystem::new();
        fs.create_new_file(Path::new("a.md"), "x").unwrap();
        assert_eq!(fs.list_files(), vec![PathBuf::from("a.md")]);
    }
}
