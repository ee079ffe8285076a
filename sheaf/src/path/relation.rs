//! Path relationship checking.
//!
//! This module determines the relationship between two relative path strings,
//! such as whether one is an ancestor or descendant of the other. Comparison
//! is component-wise over `/`-separated segments, never by raw string prefix.

/// Relationship between two relative paths.
///
/// This enum describes how two paths relate to each other in the directory
/// hierarchy.
///
/// # Examples
///
/// ```
/// use sheaf::PathRelation;
///
/// assert_eq!(
///     PathRelation::between("src", "src/lib.rs"),
///     PathRelation::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelation {
    /// The first path is an ancestor of the second.
    ///
    /// The second path is somewhere beneath the first in the directory
    /// hierarchy.
    Ancestor,

    /// The first path is a descendant of the second.
    ///
    /// The first path is somewhere beneath the second in the directory
    /// hierarchy.
    Descendant,

    /// The paths are the same after component normalization.
    Same,

    /// Neither path contains the other - they live in different branches of
    /// the tree.
    Unrelated,
}

impl PathRelation {
    /// Determine the relationship between two relative paths.
    ///
    /// Both paths are compared component by component, ignoring empty
    /// segments, so trailing or doubled separators do not affect the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use sheaf::PathRelation;
    ///
    /// assert_eq!(PathRelation::between("a", "a/b"), PathRelation::Ancestor);
    /// assert_eq!(PathRelation::between("a/b", "a"), PathRelation::Descendant);
    /// assert_eq!(PathRelation::between("a", "a/"), PathRelation::Same);
    /// assert_eq!(PathRelation::between("a", "b"), PathRelation::Unrelated);
    ///
    /// // Component-aware: "foobar" does not live under "foo".
    /// assert_eq!(PathRelation::between("foobar", "foo"), PathRelation::Unrelated);
    /// ```
    #[must_use]
    pub fn between(first: &str, second: &str) -> Self {
        let a: Vec<&str> = components(first).collect();
        let b: Vec<&str> = components(second).collect();

        if a == b {
            return Self::Same;
        }

        // Check if first is an ancestor of second
        if b.len() > a.len() && b[..a.len()] == a[..] {
            return Self::Ancestor;
        }

        // Check if first is a descendant of second
        if a.len() > b.len() && a[..b.len()] == b[..] {
            return Self::Descendant;
        }

        Self::Unrelated
    }

    /// Check if the relationship is hierarchical (not unrelated).
    ///
    /// Returns `true` for `Ancestor`, `Descendant`, or `Same`, and `false`
    /// for `Unrelated`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sheaf::PathRelation;
    ///
    /// assert!(PathRelation::Ancestor.is_hierarchical());
    /// assert!(PathRelation::Same.is_hierarchical());
    /// assert!(!PathRelation::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if a path is within a directory (descendant or same).
    ///
    /// # Examples
    ///
    /// ```
    /// use sheaf::PathRelation;
    ///
    /// assert!(PathRelation::is_within("src/lib.rs", "src"));
    /// assert!(PathRelation::is_within("src", "src"));
    /// assert!(!PathRelation::is_within("src", "src/lib.rs"));
    /// ```
    #[must_use]
    pub fn is_within(path: &str, directory: &str) -> bool {
        let rel = Self::between(path, directory);
        matches!(rel, Self::Descendant | Self::Same)
    }

    /// Check if a path contains another path (ancestor or same).
    ///
    /// # Examples
    ///
    /// ```
    /// use sheaf::PathRelation;
    ///
    /// assert!(PathRelation::contains("src", "src/lib.rs"));
    /// assert!(PathRelation::contains("src", "src"));
    /// assert!(!PathRelation::contains("src/lib.rs", "src"));
    /// ```
    #[must_use]
    pub fn contains(path: &str, other: &str) -> bool {
        let rel = Self::between(path, other);
        matches!(rel, Self::Ancestor | Self::Same)
    }
}

/// Check whether `child` is a strict descendant of `parent`.
///
/// Strict means `is_under(p, p)` is `false`. This is the predicate the
/// covering invariant is stated in: a canonical path set never contains an
/// entry that is `is_under` another entry.
///
/// # Examples
///
/// ```
/// use sheaf::is_under;
///
/// assert!(is_under("foo/bar/a.txt", "foo/bar"));
/// assert!(is_under("foo/bar", "foo"));
/// assert!(!is_under("foo", "foo"));
/// assert!(!is_under("foobar", "foo"));
/// ```
#[must_use]
pub fn is_under(child: &str, parent: &str) -> bool {
    PathRelation::between(child, parent) == PathRelation::Descendant
}

/// Iterate the non-empty components of a relative path string.
fn components(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}
