//! Property-based tests for covering-set operations.
//!
//! These tests build small in-memory trees and check the shape every
//! operation must preserve: no duplicate entries, no entry nested under
//! another, and coverage that tracks exactly what was added and removed.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::fs::MemoryFileSystem;
use crate::path::relation::is_under;
use crate::workspace::Workspace;

// Strategy for generating relative file paths under a common project root
fn file_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9]{0,5}", 1..4)
        .prop_map(|parts| format!("proj/{}", parts.join("/")))
}

// Strategy for generating a tree of distinct files, none nested under
// another (a path cannot be both a file and a directory)
fn file_tree_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(file_path_strategy(), 1..12).prop_map(|paths| {
        let mut tree: Vec<String> = Vec::new();
        for path in paths {
            let conflicts = tree
                .iter()
                .any(|kept| kept == &path || is_under(kept, &path) || is_under(&path, kept));
            if !conflicts {
                tree.push(path);
            }
        }
        tree
    })
}

fn workspace_with(files: &[String]) -> Workspace<MemoryFileSystem> {
    let mut fs = MemoryFileSystem::new();
    for file in files {
        fs = fs.with_file(format!("/w/{file}"));
    }
    Workspace::new("/w", fs)
}

// The covering-set shape: no duplicates, no entry under another entry
fn is_covering_set(paths: &[String]) -> bool {
    let unique: HashSet<&String> = paths.iter().collect();
    if unique.len() != paths.len() {
        return false;
    }
    !paths
        .iter()
        .any(|a| paths.iter().any(|b| is_under(a, b)))
}

fn covers(entries: &[String], file: &str) -> bool {
    entries
        .iter()
        .any(|entry| entry.as_str() == file || is_under(file, entry))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Normalizing twice changes nothing
    #[test]
    fn normalize_is_idempotent(files in file_tree_strategy()) {
        let workspace = workspace_with(&files);
        let once = workspace.normalize(&files);
        let twice = workspace.normalize(&once);
        prop_assert_eq!(once, twice);
    }

    // Adding yields a covering set that still covers every input
    #[test]
    fn add_produces_a_covering_set(files in file_tree_strategy()) {
        let workspace = workspace_with(&files);
        let result = workspace.add_paths(&[], &files);

        prop_assert!(is_covering_set(&result));
        for file in &files {
            prop_assert!(covers(&result, file));
        }
    }

    // Adding the project root absorbs every path beneath it
    #[test]
    fn add_absorbs_files_under_project_root(files in file_tree_strategy()) {
        let workspace = workspace_with(&files);
        let current = workspace.add_paths(&[], &files);
        let result = workspace.add_paths(&current, &["proj".to_string()]);
        prop_assert_eq!(result, vec!["proj".to_string()]);
    }

    // Removal drops exactly the targeted coverage, nothing else
    #[test]
    fn remove_purges_targets_and_keeps_the_rest(
        files in file_tree_strategy(),
        mask in any::<u16>(),
    ) {
        let workspace = workspace_with(&files);
        let current = workspace.add_paths(&[], &["proj".to_string()]);
        let targets: Vec<String> = files
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1u16 << index) != 0)
            .map(|(_, path)| path.clone())
            .collect();

        let result = workspace.remove_paths(&current, &targets);

        prop_assert!(is_covering_set(&result));
        for file in &files {
            if targets.contains(file) {
                prop_assert!(!covers(&result, file));
            } else {
                prop_assert!(covers(&result, file));
            }
        }
    }

    // Removing every file, one at a time, drains the set completely
    #[test]
    fn removing_every_file_empties_the_set(files in file_tree_strategy()) {
        let workspace = workspace_with(&files);
        let mut current = workspace.add_paths(&[], &["proj".to_string()]);

        for file in &files {
            current = workspace.remove_paths(&current, std::slice::from_ref(file));
            prop_assert!(is_covering_set(&current));
            prop_assert!(!covers(&current, file));
        }
        prop_assert!(current.is_empty());
    }
}
