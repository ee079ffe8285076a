//! Canonical-set normalization.

use std::collections::HashSet;

use crate::fs::FileSystem;
use crate::path::is_under;
use crate::path::normalize::clean_all;
use crate::workspace::Workspace;

/// Reduce a raw path list to the minimal covering set.
///
/// Cleans every entry, collapses exact duplicates to their first occurrence,
/// classifies the survivors as directory-like or not via the capability, and
/// drops every entry that is a strict descendant of a directory-like entry
/// also present in the list. Nothing here walks the tree; the only filesystem
/// question asked is "is this a directory", once per unique entry.
pub(crate) fn normalize_paths<F: FileSystem>(
    workspace: &Workspace<F>,
    raw: &[String],
) -> Vec<String> {
    // Collapse exact duplicates, keeping first-occurrence order
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for path in clean_all(raw) {
        if seen.insert(path.clone()) {
            unique.push(path);
        }
    }

    // Classify directory-like entries
    let directories: Vec<String> = unique
        .iter()
        .filter(|path| workspace.is_directory_entry(path.as_str()))
        .cloned()
        .collect();

    // Drop strict descendants of any directory present in the list
    unique
        .into_iter()
        .filter(|path| !directories.iter().any(|dir| is_under(path, dir)))
        .collect()
}
