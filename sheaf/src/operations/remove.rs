//! Removing paths from a covering set.
//!
//! Removal is the one operation that can force a directory entry apart: when
//! a target lives somewhere under an entry, that entry is expanded to its
//! concrete contents, the targets are subtracted, and whatever subtrees
//! survive intact are collapsed back into directory entries.

use std::collections::HashSet;

use crate::fs::FileSystem;
use crate::operations::expand::{expand_directory, is_fully_present, Expansion};
use crate::operations::normalize::normalize_paths;
use crate::path::normalize::clean_all;
use crate::path::relation::is_under;
use crate::workspace::Workspace;

/// A removal request, classified once up front.
struct RemovalSet {
    /// Every cleaned target, in request order.
    targets: Vec<String>,
    /// Exact-match lookup over the targets.
    exact: HashSet<String>,
    /// Targets that are directories on disk. Removing one removes its
    /// entire subtree.
    directories: Vec<String>,
}

impl RemovalSet {
    fn classify<F: FileSystem>(workspace: &Workspace<F>, targets: Vec<String>) -> Self {
        let exact: HashSet<String> = targets.iter().cloned().collect();
        let directories: Vec<String> = targets
            .iter()
            .filter(|target| workspace.is_directory_entry(target.as_str()))
            .cloned()
            .collect();
        Self {
            targets,
            exact,
            directories,
        }
    }

    /// Whether `path` is removed outright, as an exact target or as a
    /// descendant of a directory target.
    fn eliminates(&self, path: &str) -> bool {
        self.exact.contains(path) || self.covered_by_directory_target(path)
    }

    fn covered_by_directory_target(&self, path: &str) -> bool {
        self.directories.iter().any(|dir| is_under(path, dir))
    }

    /// Whether any target lives strictly inside `directory`.
    fn touches(&self, directory: &str) -> bool {
        self.targets.iter().any(|target| is_under(target, directory))
    }
}

/// Remove `to_remove` from `current` and return the new covering set.
///
/// The operation runs in phases over immutable snapshots. Entries the
/// removal never touches are carried forward verbatim. Each directory entry
/// with a target somewhere beneath it is expanded, the targets and their
/// subtrees are subtracted, and surviving subdirectories whose on-disk
/// contents are all still present collapse back into single entries. A final
/// normalization restores the covering-set shape.
pub(crate) fn remove_paths<F: FileSystem>(
    workspace: &Workspace<F>,
    current: &[String],
    to_remove: &[String],
) -> Vec<String> {
    let current = clean_all(current);
    let removal = RemovalSet::classify(workspace, clean_all(to_remove));

    // Phase 1: find the directory entries whose subtrees are hit.
    let mut affected = Vec::new();
    for entry in &current {
        if workspace.is_directory_entry(entry) && removal.touches(entry) {
            affected.push(entry.clone());
        }
    }
    log::debug!(
        "Removing {} paths: {} affected directories to expand",
        removal.targets.len(),
        affected.len()
    );

    // Phase 2: carry forward everything the removal does not touch.
    let mut result = Vec::new();
    for entry in &current {
        if removal.eliminates(entry) || affected.contains(entry) {
            continue;
        }
        result.push(entry.clone());
    }

    // Phases 3 and 4: expand each affected entry, subtract the targets,
    // re-compress whatever survives intact.
    for directory in &affected {
        let surviving = surviving_content(workspace, directory, &removal);
        result.extend(recompress(workspace, &surviving));
    }

    normalize_paths(workspace, &result)
}

/// Expand `directory` and drop every file and subdirectory the removal
/// eliminates.
fn surviving_content<F: FileSystem>(
    workspace: &Workspace<F>,
    directory: &str,
    removal: &RemovalSet,
) -> Expansion {
    let expansion = expand_directory(workspace, directory);
    let mut surviving = Expansion::default();
    for file in expansion.files {
        if !removal.eliminates(&file) {
            surviving.files.push(file);
        }
    }
    for dir in expansion.directories {
        if !removal.eliminates(&dir) {
            surviving.directories.push(dir);
        }
    }
    surviving
}

/// Collapse surviving subdirectories whose on-disk files all survived, then
/// keep the files no collapsed directory covers.
///
/// Nested collapsed directories may shadow each other here; the final
/// normalization pass keeps only the outermost ones.
fn recompress<F: FileSystem>(workspace: &Workspace<F>, surviving: &Expansion) -> Vec<String> {
    let survivor_files: HashSet<String> = surviving.files.iter().cloned().collect();
    let compressed: Vec<String> = surviving
        .directories
        .iter()
        .filter(|dir| is_fully_present(workspace, dir, &survivor_files))
        .cloned()
        .collect();
    log::debug!(
        "Re-compressed {} of {} surviving subdirectories",
        compressed.len(),
        surviving.directories.len()
    );

    let mut result = compressed.clone();
    for file in &surviving.files {
        if !compressed.iter().any(|dir| is_under(file, dir)) {
            result.push(file.clone());
        }
    }
    result
}
