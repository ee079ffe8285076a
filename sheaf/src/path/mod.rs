//! Relative-path reasoning for canonical path sets.
//!
//! Every path a bundle stores is a relative string anchored at the workspace
//! root, using `/` as the separator regardless of the host platform. This
//! module provides the two pure building blocks the rest of the crate reasons
//! with:
//!
//! # Key Concepts
//!
//! ## Cleaning
//!
//! [`clean_path`] reduces caller input to the canonical string form:
//! backslashes become `/`, empty and `.` components are dropped, trailing
//! separators are trimmed. Cleaning is purely lexical: it never touches the
//! filesystem and it deliberately leaves `..` components alone, because
//! containment within the workspace root is a caller-level concern.
//!
//! ## Relationships
//!
//! [`PathRelation`] classifies two cleaned paths as ancestor, descendant,
//! same, or unrelated. The comparison is component-aware, so `"foobar"` is
//! never mistaken for a child of `"foo"` the way naive string-prefix checks
//! would have it. [`is_under`] is the strict-descendant shorthand the
//! covering invariant is written in: no entry of a canonical set may be
//! `is_under` another entry.
//!
//! # Examples
//!
//! ```
//! use sheaf::path::{clean_path, is_under, PathRelation};
//!
//! assert_eq!(clean_path("src\\core\\"), "src/core");
//!
//! assert!(is_under("src/core/engine.rs", "src"));
//! assert!(!is_under("foobar", "foo"));
//!
//! let rel = PathRelation::between("docs", "docs/api/index.md");
//! assert_eq!(rel, PathRelation::Ancestor);
//! ```

pub mod normalize;
pub mod relation;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key items
pub use normalize::clean_path;
pub use relation::{is_under, PathRelation};
