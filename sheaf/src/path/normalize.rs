//! Lexical path cleanup.
//!
//! This module reduces caller-supplied path strings to the canonical relative
//! form the rest of the crate works with:
//! - Converting backslash separators to `/`
//! - Dropping empty and `.` components
//! - Trimming trailing separators
//!
//! Cleanup is purely lexical. It never consults the filesystem, and it keeps
//! `..` components verbatim: whether a path escapes the workspace root is a
//! caller-level concern, not validated here.

/// Reduce a path string to canonical relative form.
///
/// Backslashes become `/`, empty and `.` components are dropped, and trailing
/// separators disappear as a consequence. Inputs that consist only of
/// separators and `.` components clean to the empty string; the operations
/// discard such arguments.
///
/// # Examples
///
/// ```
/// use sheaf::clean_path;
///
/// assert_eq!(clean_path("src\\core\\engine.rs"), "src/core/engine.rs");
/// assert_eq!(clean_path("docs//api/"), "docs/api");
/// assert_eq!(clean_path("./src/./lib.rs"), "src/lib.rs");
/// assert_eq!(clean_path("."), "");
///
/// // `..` is kept verbatim; root containment is not this layer's job.
/// assert_eq!(clean_path("../shared/util.rs"), "../shared/util.rs");
/// ```
#[must_use]
pub fn clean_path(path: &str) -> String {
    path.replace('\\', "/")
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Clean every path in a list, discarding entries that clean to nothing.
///
/// Duplicates are kept; deduplication belongs to normalization.
pub(crate) fn clean_all(paths: &[String]) -> Vec<String> {
    paths
        .iter()
        .map(|path| clean_path(path))
        .filter(|path| !path.is_empty())
        .collect()
}

/// Join a child name onto a relative directory path.
pub(crate) fn join_relative(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}
