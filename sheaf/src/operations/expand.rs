//! Tree expansion and the re-compression test.

use std::collections::HashSet;

use crate::fs::FileSystem;
use crate::path::normalize::join_relative;
use crate::workspace::Workspace;

/// The full recursive listing of one directory entry.
///
/// An expansion is ephemeral: it reflects the filesystem at the moment it was
/// taken, lives for the duration of one operation, and is never stored in a
/// bundle. Entries are partitioned by a directory query at walk time, since
/// the path strings themselves carry no file/directory tag.
///
/// # Examples
///
/// ```
/// use sheaf::{MemoryFileSystem, Workspace};
///
/// let fs = MemoryFileSystem::new()
///     .with_file("/repo/src/lib.rs")
///     .with_file("/repo/src/util/io.rs");
/// let workspace = Workspace::new("/repo", fs);
///
/// let expansion = workspace.expand_directory("src");
/// assert_eq!(expansion.directories, vec!["src/util".to_string()]);
/// assert_eq!(
///     expansion.files,
///     vec!["src/lib.rs".to_string(), "src/util/io.rs".to_string()]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Every descendant file, relative to the workspace root.
    pub files: Vec<String>,
    /// Every descendant subdirectory, relative to the workspace root.
    pub directories: Vec<String>,
}

impl Expansion {
    /// Whether the walk found no descendants at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.directories.is_empty()
    }
}

/// Enumerate every descendant file and subdirectory of `directory`.
///
/// The walk uses an explicit stack of pending directories rather than call
/// recursion, so tree depth is bounded by memory, not the call stack. A
/// directory that cannot be listed contributes an empty subtree; the failure
/// is logged inside [`Workspace::children_of`] and the walk continues.
pub(crate) fn expand_directory<F: FileSystem>(
    workspace: &Workspace<F>,
    directory: &str,
) -> Expansion {
    let mut expansion = Expansion::default();
    // Directories whose children have not been listed yet
    let mut pending = vec![directory.to_string()];

    while let Some(dir) = pending.pop() {
        for name in workspace.children_of(&dir) {
            let child = join_relative(&dir, &name);
            if workspace.is_directory_entry(&child) {
                expansion.directories.push(child.clone());
                pending.push(child);
            } else {
                expansion.files.push(child);
            }
        }
    }

    expansion
}

/// Whether every file currently on disk under `directory` appears in
/// `candidates`.
///
/// This is the test that decides re-compression: if the answer is yes,
/// collapsing the directory back into a single entry loses nothing.
pub(crate) fn is_fully_present<F: FileSystem>(
    workspace: &Workspace<F>,
    directory: &str,
    candidates: &HashSet<String>,
) -> bool {
    expand_directory(workspace, directory)
        .files
        .iter()
        .all(|file| candidates.contains(file))
}
