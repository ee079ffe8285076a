//! In-memory fake filesystem for tests and examples.

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use super::FileSystem;

/// [`FileSystem`] implementation over an in-memory tree.
///
/// Trees are described with absolute paths through the builder methods;
/// ancestor directories are created implicitly. Directories can be marked
/// unreadable to exercise the engine's degraded-traversal behavior.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use sheaf::{FileSystem, MemoryFileSystem};
///
/// let fs = MemoryFileSystem::new()
///     .with_file("/repo/src/lib.rs")
///     .with_dir("/repo/target");
///
/// assert!(fs.is_directory(Path::new("/repo/src")));
/// assert!(!fs.is_directory(Path::new("/repo/src/lib.rs")));
/// assert_eq!(
///     fs.list_children(Path::new("/repo")).unwrap(),
///     vec!["src".to_string(), "target".to_string()]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: BTreeSet<PathBuf>,
    directories: BTreeSet<PathBuf>,
    unreadable: BTreeSet<PathBuf>,
}

impl MemoryFileSystem {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating ancestor directories implicitly.
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        self.insert_ancestors(&path);
        self.files.insert(path);
        self
    }

    /// Add a directory (possibly empty), creating ancestors implicitly.
    #[must_use]
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        self.insert_ancestors(&path);
        self.directories.insert(path);
        self
    }

    /// Add a directory whose listing fails with `PermissionDenied`.
    ///
    /// The directory still answers `true` to [`FileSystem::is_directory`];
    /// only enumeration is blocked, mimicking a permission problem on disk.
    #[must_use]
    pub fn with_unreadable_dir(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        self.insert_ancestors(&path);
        self.directories.insert(path.clone());
        self.unreadable.insert(path);
        self
    }

    fn insert_ancestors(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.directories.insert(ancestor.to_path_buf());
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn is_directory(&self, path: &Path) -> bool {
        self.directories.contains(path)
    }

    fn list_children(&self, path: &Path) -> io::Result<Vec<String>> {
        if self.unreadable.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is marked unreadable", path.display()),
            ));
        }
        if !self.directories.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not a directory", path.display()),
            ));
        }

        let mut names: Vec<String> = self
            .files
            .iter()
            .chain(self.directories.iter())
            .filter(|candidate| candidate.parent() == Some(path))
            .filter_map(|candidate| candidate.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }
}
