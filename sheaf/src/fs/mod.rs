//! Filesystem access as an injected capability.
//!
//! The path-set operations never touch the filesystem directly. Everything
//! they need to know about the world fits in two questions, "does this path
//! denote a directory" and "what are the immediate children of this
//! directory", and the [`FileSystem`] trait is exactly those two questions.
//! Injecting the capability keeps the engine free of hidden environment
//! dependencies and makes every algorithm testable against an in-memory tree.
//!
//! Two implementations ship with the crate:
//!
//! - [`DiskFileSystem`] answers from the real filesystem via `std::fs`,
//!   sorting child names so traversal is deterministic across runs.
//! - [`MemoryFileSystem`] is a fake tree built up with
//!   [`MemoryFileSystem::with_file`] and friends, including directories that
//!   can be marked unreadable to exercise degraded traversal.
//!
//! The engine treats listing failures as "zero children" and reports them
//! through the `log` facade; they never abort an operation.

use std::io;
use std::path::Path;

pub mod disk;
pub mod memory;

// Re-export key types
pub use disk::DiskFileSystem;
pub use memory::MemoryFileSystem;

/// The capability the path-set engine consumes from its environment.
///
/// Paths handed to implementations are absolute: the workspace root joined
/// with a relative bundle entry.
pub trait FileSystem {
    /// Whether `path` currently denotes a directory.
    ///
    /// Implementations answer `false` for files, for paths that do not exist,
    /// and for paths they cannot stat. A failed stat is an answer, not an
    /// error.
    fn is_directory(&self, path: &Path) -> bool;

    /// The names of the immediate children of the directory at `path`.
    ///
    /// Names are bare entry names, not paths; callers join them onto the
    /// parent and may re-query [`FileSystem::is_directory`] on the result.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the directory cannot be listed
    /// (missing, permission denied, not a directory). Callers inside this
    /// crate treat that as an empty listing and log it.
    fn list_children(&self, path: &Path) -> io::Result<Vec<String>>;
}
