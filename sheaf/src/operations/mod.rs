//! Path-set operations over a workspace.
//!
//! This module implements the canonical-set algebra behind
//! [`Workspace`](crate::Workspace):
//!
//! - **Normalize** reduces any raw path list to the minimal covering set:
//!   exact duplicates collapse, and entries strictly under a directory entry
//!   elsewhere in the list are dropped.
//! - **Add** is nothing more than normalization of the union.
//! - **Expand** enumerates one directory entry's full recursive content, and
//!   carries the re-compression test (`is_fully_present`).
//! - **Remove** is a four-phase pipeline: classify the removal targets,
//!   carry forward untouched entries, expand and filter the affected
//!   directory entries, then re-compress whatever subtrees survived intact.
//!
//! Each phase of Remove produces a new collection; nothing mutates a shared
//! bag across phases. All of it is synchronous and sequential: directories
//! are listed one at a time, and an unreadable directory degrades to an
//! empty subtree (logged, never fatal), so every operation always returns a
//! path list.

mod add;
mod expand;
mod normalize;
mod remove;

#[cfg(test)]
mod proptests;

pub use expand::Expansion;

pub(crate) use add::add_paths;
pub(crate) use expand::{expand_directory, is_fully_present};
pub(crate) use normalize::normalize_paths;
pub(crate) use remove::remove_paths;
