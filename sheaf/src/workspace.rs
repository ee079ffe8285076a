//! The workspace: a project root paired with a filesystem capability.
//!
//! Every path a bundle stores is relative to one root directory, and every
//! question the engine asks about the world goes through one [`FileSystem`]
//! value. [`Workspace`] carries the two together so the operations can be
//! called without threading root-and-capability through every signature.
//!
//! The workspace is read-only over the filesystem and holds no bundle state:
//! each operation takes the current path list in and returns a new list out.
//! Serializing concurrent mutations of the same persisted bundle is the
//! caller's job.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::bundle::Bundle;
use crate::fs::FileSystem;
use crate::operations::{self, Expansion};
use crate::path::clean_path;

/// A project root plus the capability used to inspect it.
///
/// # Examples
///
/// ```
/// use sheaf::{MemoryFileSystem, Workspace};
///
/// let fs = MemoryFileSystem::new()
///     .with_file("/repo/src/main.rs")
///     .with_file("/repo/Cargo.toml");
/// let workspace = Workspace::new("/repo", fs);
///
/// let bundle = workspace.add_paths(&[], &["src/main.rs".into(), "src".into()]);
/// assert_eq!(bundle, vec!["src".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct Workspace<F: FileSystem> {
    root: PathBuf,
    fs: F,
}

impl<F: FileSystem> Workspace<F> {
    /// Create a workspace over `root` using the given capability.
    pub fn new(root: impl Into<PathBuf>, fs: F) -> Self {
        Self {
            root: root.into(),
            fs,
        }
    }

    /// The root directory all bundle entries are relative to.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether a relative entry currently denotes a directory.
    ///
    /// The canonical path set stores no file/directory tags; this query is
    /// how that fact is determined on demand, so an answer is only as fresh
    /// as the filesystem behind it.
    ///
    /// # Examples
    ///
    /// ```
    /// use sheaf::{MemoryFileSystem, Workspace};
    ///
    /// let fs = MemoryFileSystem::new().with_file("/repo/src/main.rs");
    /// let workspace = Workspace::new("/repo", fs);
    ///
    /// assert!(workspace.is_directory_entry("src"));
    /// assert!(!workspace.is_directory_entry("src/main.rs"));
    /// assert!(!workspace.is_directory_entry("ghost"));
    /// ```
    #[must_use]
    pub fn is_directory_entry(&self, path: &str) -> bool {
        self.fs.is_directory(&self.absolute(&clean_path(path)))
    }

    /// Reduce a raw path list to its canonical minimal covering set.
    ///
    /// Exact duplicates collapse to their first occurrence, and any entry
    /// that is a strict descendant of a directory entry elsewhere in the list
    /// is dropped. Output order is the stable order of first occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use sheaf::{MemoryFileSystem, Workspace};
    ///
    /// let fs = MemoryFileSystem::new()
    ///     .with_file("/repo/docs/guide.md")
    ///     .with_file("/repo/README.md");
    /// let workspace = Workspace::new("/repo", fs);
    ///
    /// let raw = vec![
    ///     "README.md".to_string(),
    ///     "docs/guide.md".to_string(),
    ///     "docs".to_string(),
    ///     "README.md".to_string(),
    /// ];
    /// assert_eq!(
    ///     workspace.normalize(&raw),
    ///     vec!["README.md".to_string(), "docs".to_string()]
    /// );
    /// ```
    #[must_use]
    pub fn normalize(&self, paths: &[String]) -> Vec<String> {
        operations::normalize_paths(self, paths)
    }

    /// Add paths to a canonical set, returning the new canonical set.
    ///
    /// Equivalent to normalizing the union of `current` and `new_paths`.
    /// Adding a path already covered by a directory entry changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use sheaf::{MemoryFileSystem, Workspace};
    ///
    /// let fs = MemoryFileSystem::new()
    ///     .with_file("/repo/src/main.rs")
    ///     .with_file("/repo/src/lib.rs");
    /// let workspace = Workspace::new("/repo", fs);
    ///
    /// let set = workspace.add_paths(&[], &["src".into()]);
    /// assert_eq!(set, vec!["src".to_string()]);
    ///
    /// // Already covered: no change.
    /// let same = workspace.add_paths(&set, &["src/lib.rs".into()]);
    /// assert_eq!(same, set);
    /// ```
    #[must_use]
    pub fn add_paths(&self, current: &[String], new_paths: &[String]) -> Vec<String> {
        operations::add_paths(self, current, new_paths)
    }

    /// Remove paths from a canonical set, returning the new canonical set.
    ///
    /// Directory entries that contain a removal target are expanded, the
    /// targets (and everything under removed directories) are subtracted, and
    /// any surviving subdirectory whose on-disk content is still fully
    /// present is collapsed back into a single entry. Removing a path the set
    /// does not cover is a no-op for that path.
    ///
    /// # Examples
    ///
    /// ```
    /// use sheaf::{MemoryFileSystem, Workspace};
    ///
    /// let fs = MemoryFileSystem::new()
    ///     .with_file("/repo/foo/bar/a.txt")
    ///     .with_file("/repo/foo/bar/b.txt")
    ///     .with_file("/repo/foo/bar/baz/c.txt");
    /// let workspace = Workspace::new("/repo", fs);
    ///
    /// let set = vec!["foo/bar".to_string()];
    /// let set = workspace.remove_paths(&set, &["foo/bar/baz/c.txt".into()]);
    /// assert_eq!(
    ///     set,
    ///     vec!["foo/bar/a.txt".to_string(), "foo/bar/b.txt".to_string()]
    /// );
    /// ```
    #[must_use]
    pub fn remove_paths(&self, current: &[String], to_remove: &[String]) -> Vec<String> {
        operations::remove_paths(self, current, to_remove)
    }

    /// Enumerate every descendant of a directory entry.
    ///
    /// The listing is ephemeral: it reflects the filesystem at call time and
    /// is never stored. Unreadable subtrees are logged and treated as empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sheaf::{MemoryFileSystem, Workspace};
    ///
    /// let fs = MemoryFileSystem::new()
    ///     .with_file("/repo/docs/guide.md")
    ///     .with_file("/repo/docs/api/index.md");
    /// let workspace = Workspace::new("/repo", fs);
    ///
    /// let expansion = workspace.expand_directory("docs");
    /// assert_eq!(expansion.directories, vec!["docs/api".to_string()]);
    /// assert_eq!(
    ///     expansion.files,
    ///     vec!["docs/guide.md".to_string(), "docs/api/index.md".to_string()]
    /// );
    /// ```
    #[must_use]
    pub fn expand_directory(&self, directory: &str) -> Expansion {
        let directory = clean_path(directory);
        if directory.is_empty() {
            return Expansion::default();
        }
        operations::expand_directory(self, &directory)
    }

    /// Whether every file currently on disk under `directory` appears in
    /// `candidates`.
    ///
    /// This is the re-compression test: a directory whose full recursive
    /// content is present in a candidate list can stand in for all of it as a
    /// single entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use sheaf::{MemoryFileSystem, Workspace};
    ///
    /// let fs = MemoryFileSystem::new()
    ///     .with_file("/repo/docs/guide.md")
    ///     .with_file("/repo/docs/api/index.md");
    /// let workspace = Workspace::new("/repo", fs);
    ///
    /// let survivors = vec![
    ///     "docs/guide.md".to_string(),
    ///     "docs/api/index.md".to_string(),
    /// ];
    /// assert!(workspace.is_fully_present("docs", &survivors));
    /// assert!(!workspace.is_fully_present("docs", &survivors[..1]));
    /// ```
    #[must_use]
    pub fn is_fully_present(&self, directory: &str, candidates: &[String]) -> bool {
        let directory = clean_path(directory);
        let candidates: HashSet<String> = candidates
            .iter()
            .map(|candidate| clean_path(candidate))
            .collect();
        if directory.is_empty() {
            return true;
        }
        operations::is_fully_present(self, &directory, &candidates)
    }

    /// Add paths to a bundle's list in place, recording the use.
    ///
    /// # Examples
    ///
    /// ```
    /// use sheaf::{Bundle, MemoryFileSystem, Workspace};
    ///
    /// let fs = MemoryFileSystem::new().with_file("/repo/docs/guide.md");
    /// let workspace = Workspace::new("/repo", fs);
    ///
    /// let mut bundle = Bundle::new("docs").unwrap();
    /// workspace.add_to_bundle(&mut bundle, &["docs".into()]);
    /// assert_eq!(bundle.paths, vec!["docs".to_string()]);
    /// ```
    pub fn add_to_bundle(&self, bundle: &mut Bundle, new_paths: &[String]) {
        bundle.paths = self.add_paths(&bundle.paths, new_paths);
        bundle.record_use();
    }

    /// Remove paths from a bundle's list in place, recording the use.
    pub fn remove_from_bundle(&self, bundle: &mut Bundle, to_remove: &[String]) {
        bundle.paths = self.remove_paths(&bundle.paths, to_remove);
        bundle.record_use();
    }

    /// Join a relative entry onto the workspace root.
    pub(crate) fn absolute(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Immediate child names of a relative directory entry.
    ///
    /// Listing failures degrade to an empty result: the subtree is treated
    /// as empty and the failure is logged.
    pub(crate) fn children_of(&self, relative: &str) -> Vec<String> {
        let path = self.absolute(relative);
        match self.fs.list_children(&path) {
            Ok(names) => names,
            Err(err) => {
                log::warn!("Failed to list directory {}: {err}", path.display());
                Vec::new()
            }
        }
    }
}
