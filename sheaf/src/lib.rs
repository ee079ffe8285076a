#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # sheaf
//!
//! A library for maintaining bundles of project paths as minimal covering
//! sets.
//!
//! A bundle is a user-curated list of paths relative to a project root. To
//! keep that list small and readable even when whole directory trees are
//! selected, sheaf stores it compressed: a directory entry implicitly stands
//! for every file currently under it. The library provides the two mutations
//! such a representation needs. Adding paths collapses anything already
//! covered. Removing paths expands only the affected directory entries,
//! subtracts the removed paths, and re-collapses whatever subtrees remain
//! fully intact.
//!
//! All filesystem access goes through the [`FileSystem`] capability trait, so
//! the engine can run against the real disk ([`DiskFileSystem`]) or an
//! in-memory tree ([`MemoryFileSystem`]). The engine never writes to disk and
//! never fails: unreadable directories degrade to empty subtrees and are
//! reported through the `log` facade.
//!
//! ## Core Types
//!
//! - [`Workspace`]: a project root paired with a filesystem capability; hosts
//!   the add/remove/normalize operations
//! - [`Bundle`]: named bundle metadata around a path list
//! - [`PathRelation`]: component-aware ancestor/descendant classification
//! - [`Expansion`]: the recursive listing of one directory entry
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use sheaf::{MemoryFileSystem, Workspace};
//!
//! let fs = MemoryFileSystem::new()
//!     .with_file("/repo/src/lib.rs")
//!     .with_file("/repo/src/tests/basic.rs")
//!     .with_file("/repo/README.md");
//! let workspace = Workspace::new("/repo", fs);
//!
//! // Selecting a directory covers everything beneath it.
//! let bundle = workspace.add_paths(&[], &["src".into(), "README.md".into()]);
//! assert_eq!(bundle, vec!["src".to_string(), "README.md".to_string()]);
//!
//! // Removing one file expands only the affected directory entry.
//! let bundle = workspace.remove_paths(&bundle, &["src/tests/basic.rs".into()]);
//! assert_eq!(bundle, vec!["README.md".to_string(), "src/lib.rs".to_string()]);
//! ```

pub mod bundle;
pub mod error;
pub mod fs;
pub mod operations;
pub mod path;
pub mod workspace;

// Re-export key types at crate root for convenience
pub use bundle::Bundle;
pub use error::{Error, Result};
pub use fs::{DiskFileSystem, FileSystem, MemoryFileSystem};
pub use operations::Expansion;
pub use path::{clean_path, is_under, PathRelation};
pub use workspace::Workspace;
