//! In-memory role registry.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::{AuditError, DirectoryList, DirectoryRole};

/// A [`DirectoryList`] backed by a plain map.
///
/// # Example
///
/// ```rust
/// use perm_audit::{DirectoryList, DirectoryMap, DirectoryRole};
/// use std::path::PathBuf;
///
/// let dirs = DirectoryMap::new()
///     .with(DirectoryRole::Config, "/srv/shop/app/etc")
///     .with(DirectoryRole::Var, "/srv/shop/var");
///
/// assert_eq!(dirs.path(DirectoryRole::Var).unwrap(), PathBuf::from("/srv/shop/var"));
/// assert!(dirs.path(DirectoryRole::Media).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DirectoryMap {
    paths: BTreeMap<DirectoryRole, PathBuf>,
}

impl DirectoryMap {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry for the conventional layout of an application rooted at `root`.
    ///
    /// | Role | Path |
    /// |------|------|
    /// | config | `app/etc` |
    /// | var | `var` |
    /// | media | `pub/media` |
    /// | static | `pub/static` |
    /// | generation | `generated/code` |
    /// | di | `generated/metadata` |
    /// | session | `var/session` |
    pub fn with_default_layout(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        [
            (DirectoryRole::Config, "app/etc"),
            (DirectoryRole::Var, "var"),
            (DirectoryRole::Media, "pub/media"),
            (DirectoryRole::StaticView, "pub/static"),
            (DirectoryRole::Generation, "generated/code"),
            (DirectoryRole::Di, "generated/metadata"),
            (DirectoryRole::Session, "var/session"),
        ]
        .into_iter()
        .map(|(role, relative)| (role, root.join(relative)))
        .collect()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, role: DirectoryRole, path: impl Into<PathBuf>) -> Self {
        self.insert(role, path);
        self
    }

    /// Set the path for `role`, returning the previous one.
    pub fn insert(&mut self, role: DirectoryRole, path: impl Into<PathBuf>) -> Option<PathBuf> {
        self.paths.insert(role, path.into())
    }

    /// Path configured for `role`, if any.
    pub fn get(&self, role: DirectoryRole) -> Option<&Path> {
        self.paths.get(&role).map(PathBuf::as_path)
    }

    /// Parse a JSON object mapping role codes to paths.
    ///
    /// ```rust
    /// use perm_audit::{DirectoryMap, DirectoryRole};
    ///
    /// let dirs = DirectoryMap::from_json_str(r#"{"config": "/app/etc", "static": "/app/pub/static"}"#)?;
    /// assert!(dirs.get(DirectoryRole::StaticView).is_some());
    /// # Ok::<(), perm_audit::AuditError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// - [`AuditError::Deserialization`] if the document is not such an object
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, AuditError> {
        serde_json::from_str(json).map_err(|e| AuditError::Deserialization(e.to_string()))
    }
}

impl<P: Into<PathBuf>> FromIterator<(DirectoryRole, P)> for DirectoryMap {
    fn from_iter<I: IntoIterator<Item = (DirectoryRole, P)>>(iter: I) -> Self {
        Self {
            paths: iter
                .into_iter()
                .map(|(role, path)| (role, path.into()))
                .collect(),
        }
    }
}

impl DirectoryList for DirectoryMap {
    fn path(&self, role: DirectoryRole) -> Result<PathBuf, AuditError> {
        self.paths
            .get(&role)
            .cloned()
            .ok_or(AuditError::RoleNotConfigured { role })
    }
}
