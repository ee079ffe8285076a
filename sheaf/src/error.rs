//! Error types for the sheaf library.
//!
//! The path-set operations themselves never fail: unreadable directories
//! degrade to empty subtrees (see [`crate::fs`]). This hierarchy only covers
//! the bundle metadata layer, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a sheaf error.
///
/// # Examples
///
/// ```
/// use sheaf::{Bundle, Result};
///
/// fn example_operation() -> Result<Bundle> {
///     Bundle::new("api-review")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the sheaf library.
#[derive(Debug, Error)]
pub enum Error {
    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}
