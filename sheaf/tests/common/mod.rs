//! Common test utilities for integration tests.
//!
//! This module provides the fixture tree and assertion helpers for testing
//! the sheaf library end to end.

use sheaf::{is_under, MemoryFileSystem, Workspace};

/// Creates a workspace over the in-memory tree shared by the integration
/// tests:
///
/// ```text
/// repo/
///   foo/bar/a.txt
///   foo/bar/b.txt
///   foo/bar/baz/c.txt
///   foo/notes.txt
///   src/lib.rs
///   src/main.rs
///   src/util/fmt.rs
///   src/util/io.rs
///   docs/guide.md
///   README.md
/// ```
#[allow(dead_code)]
pub fn sample_workspace() -> Workspace<MemoryFileSystem> {
    let fs = MemoryFileSystem::new()
        .with_file("/repo/foo/bar/a.txt")
        .with_file("/repo/foo/bar/b.txt")
        .with_file("/repo/foo/bar/baz/c.txt")
        .with_file("/repo/foo/notes.txt")
        .with_file("/repo/src/lib.rs")
        .with_file("/repo/src/main.rs")
        .with_file("/repo/src/util/fmt.rs")
        .with_file("/repo/src/util/io.rs")
        .with_file("/repo/docs/guide.md")
        .with_file("/repo/README.md");
    Workspace::new("/repo", fs)
}

/// Converts string literals into owned paths.
#[allow(dead_code)]
pub fn paths(raw: &[&str]) -> Vec<String> {
    raw.iter().map(ToString::to_string).collect()
}

/// Asserts the covering-set shape: no duplicate entries and no entry nested
/// under another.
#[allow(dead_code)]
pub fn assert_covering_set(entries: &[String]) {
    for (index, entry) in entries.iter().enumerate() {
        assert!(
            !entries[index + 1..].contains(entry),
            "duplicate entry {entry}"
        );
        for other in entries {
            assert!(!is_under(entry, other), "{entry} is nested under {other}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_workspace_sees_directories() {
        let workspace = sample_workspace();
        assert!(workspace.is_directory_entry("foo/bar"));
        assert!(workspace.is_directory_entry("src/util"));
        assert!(!workspace.is_directory_entry("README.md"));
    }

    #[test]
    #[should_panic(expected = "nested")]
    fn test_covering_assertion_rejects_nesting() {
        assert_covering_set(&paths(&["src", "src/main.rs"]));
    }

    #[test]
    #[should_panic(expected = "duplicate")]
    fn test_covering_assertion_rejects_duplicates() {
        assert_covering_set(&paths(&["src", "src"]));
    }
}
