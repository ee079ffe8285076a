//! Adding paths to a covering set.

use crate::fs::FileSystem;
use crate::operations::normalize::normalize_paths;
use crate::workspace::Workspace;

/// Merge `new_paths` into `current` and return the normalized result.
///
/// Existing entries come first so that normalization keeps their relative
/// order; additions only survive if no entry (old or new) already covers
/// them.
pub(crate) fn add_paths<F: FileSystem>(
    workspace: &Workspace<F>,
    current: &[String],
    new_paths: &[String],
) -> Vec<String> {
    let mut combined = Vec::with_capacity(current.len() + new_paths.len());
    combined.extend_from_slice(current);
    combined.extend_from_slice(new_paths);
    normalize_paths(workspace, &combined)
}
