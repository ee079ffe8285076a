//! Bundle metadata.
//!
//! A bundle is a named, persistent path set plus bookkeeping fields. Bundles
//! are plain data: all path manipulation goes through
//! [`Workspace`](crate::Workspace), which keeps the `paths` field in
//! covering-set form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A named set of workspace-relative paths with usage metadata.
///
/// Serializes to camel-case JSON so bundle files read naturally in editors
/// and survive round-trips with older tooling.
///
/// # Examples
///
/// ```
/// use sheaf::Bundle;
///
/// let bundle = Bundle::new("api-review")?
///     .with_description("Endpoints touched by the v2 rollout")
///     .with_tags(vec!["active".to_string()]);
/// assert_eq!(bundle.name, "api-review");
/// assert!(bundle.is_empty());
/// # Ok::<(), sheaf::Error>(())
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    /// Display name, unique within whatever collection holds the bundle.
    pub name: String,

    /// Optional free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// When the bundle was created.
    pub created: DateTime<Utc>,

    /// When the bundle was last changed through a workspace.
    pub last_used: DateTime<Utc>,

    /// Free-form labels for filtering and grouping.
    #[serde(default)]
    pub tags: Vec<String>,

    /// The covering set of workspace-relative paths.
    #[serde(default)]
    pub paths: Vec<String>,
}

impl Bundle {
    /// Creates an empty bundle named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::Validation {
                field: "name".to_string(),
                message: "bundle name must not be blank".to_string(),
            });
        }
        let now = Utc::now();
        Ok(Self {
            name,
            description: None,
            created: now,
            last_used: now,
            tags: Vec::new(),
            paths: Vec::new(),
        })
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the tag list.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Stamps the bundle as used now.
    pub fn record_use(&mut self) {
        self.last_used = Utc::now();
    }

    /// Whether the bundle holds no paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
