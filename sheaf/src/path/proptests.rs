//! Property-based tests for path relations and cleanup.
//!
//! Run with: cargo test --features property-tests

use proptest::prelude::*;

use super::normalize::clean_path;
use super::relation::{is_under, PathRelation};

// Strategy to generate individual path segments
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

// Strategy to generate clean relative paths
fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..=6).prop_map(|parts| parts.join("/"))
}

// Strategy to generate messy input: mixed separators, doubled slashes,
// stray `.` components, trailing separators
fn messy_path_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(
            prop_oneof![segment_strategy(), Just(".".to_string())],
            1..=6,
        ),
        prop::collection::vec(prop_oneof![Just("/"), Just("\\"), Just("//")], 1..=6),
        any::<bool>(),
    )
        .prop_map(|(parts, seps, trailing)| {
            let mut out = String::new();
            for (i, part) in parts.iter().enumerate() {
                out.push_str(part);
                if i + 1 < parts.len() {
                    out.push_str(seps[i % seps.len()]);
                }
            }
            if trailing {
                out.push('/');
            }
            out
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    /// Relationship checking is reflexive (a path relates to itself as Same)
    #[test]
    fn relation_reflexive(path in path_strategy()) {
        prop_assert_eq!(PathRelation::between(&path, &path), PathRelation::Same);
    }

    /// Relationship checking has proper symmetry
    /// If A is ancestor of B, then B is descendant of A
    #[test]
    fn relation_symmetric(a in path_strategy(), b in path_strategy()) {
        let ab = PathRelation::between(&a, &b);
        let ba = PathRelation::between(&b, &a);

        match (ab, ba) {
            (PathRelation::Ancestor, PathRelation::Descendant) => {},
            (PathRelation::Descendant, PathRelation::Ancestor) => {},
            (PathRelation::Same, PathRelation::Same) => {},
            (PathRelation::Unrelated, PathRelation::Unrelated) => {},
            _ => prop_assert!(false, "asymmetric relation: {:?} vs {:?}", ab, ba),
        }
    }

    /// Appending segments always produces a strict descendant
    #[test]
    fn relation_descends_into_children(base in path_strategy(), extra in path_strategy()) {
        let child = format!("{base}/{extra}");
        prop_assert_eq!(PathRelation::between(&base, &child), PathRelation::Ancestor);
        prop_assert!(is_under(&child, &base));
    }

    /// Ancestry is transitive across two levels of extension
    #[test]
    fn relation_transitive(base in path_strategy(), mid in segment_strategy(), leaf in segment_strategy()) {
        let middle = format!("{base}/{mid}");
        let deepest = format!("{middle}/{leaf}");

        prop_assert_eq!(PathRelation::between(&base, &middle), PathRelation::Ancestor);
        prop_assert_eq!(PathRelation::between(&middle, &deepest), PathRelation::Ancestor);
        prop_assert_eq!(PathRelation::between(&base, &deepest), PathRelation::Ancestor);
    }

    /// A segment-level sibling is never under its lookalike prefix
    #[test]
    fn relation_never_matches_string_prefix(base in path_strategy(), suffix in segment_strategy()) {
        // "xyz" next to "xyzsuffix": related as strings, unrelated as paths
        let lookalike = format!("{base}{suffix}");
        prop_assert!(!is_under(&lookalike, &base));
        prop_assert_eq!(PathRelation::between(&base, &lookalike), PathRelation::Unrelated);
    }

    /// is_under is strict: nothing is under itself
    #[test]
    fn is_under_irreflexive(path in path_strategy()) {
        prop_assert!(!is_under(&path, &path));
    }

    /// is_hierarchical is true exactly when the relation is not Unrelated
    #[test]
    fn is_hierarchical_consistent(a in path_strategy(), b in path_strategy()) {
        let rel = PathRelation::between(&a, &b);
        prop_assert_eq!(rel.is_hierarchical(), !matches!(rel, PathRelation::Unrelated));
    }

    /// is_within and contains mirror each other
    #[test]
    fn is_within_contains_consistent(a in path_strategy(), b in path_strategy()) {
        prop_assert_eq!(
            PathRelation::is_within(&a, &b),
            PathRelation::contains(&b, &a)
        );
    }

    /// Cleaning is idempotent
    #[test]
    fn clean_idempotent(path in messy_path_strategy()) {
        let once = clean_path(&path);
        prop_assert_eq!(clean_path(&once), once);
    }

    /// Cleaned paths contain no backslashes, no empty components, no `.`
    #[test]
    fn clean_output_is_canonical(path in messy_path_strategy()) {
        let cleaned = clean_path(&path);
        prop_assert!(!cleaned.contains('\\'));
        prop_assert!(!cleaned.ends_with('/'));
        for segment in cleaned.split('/') {
            if !cleaned.is_empty() {
                prop_assert!(!segment.is_empty());
                prop_assert_ne!(segment, ".");
            }
        }
    }

    /// Cleaning messy input agrees with the relation over clean equivalents
    #[test]
    fn clean_preserves_relation(a in path_strategy(), b in path_strategy()) {
        let messy_a = format!("{}/", a.replace('/', "\\"));
        let rel_clean = PathRelation::between(&a, &b);
        let rel_messy = PathRelation::between(&clean_path(&messy_a), &b);
        prop_assert_eq!(rel_clean, rel_messy);
    }
}
