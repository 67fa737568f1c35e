//! Existence and metadata probes.

use std::path::Path;

use crate::{AuditError, Metadata};

/// Existence and metadata queries against a filesystem.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self` so one
/// backend can serve several audit sessions.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsStat`.
pub trait FsStat: Send + Sync {
    /// Check if a path exists (follows symlinks).
    ///
    /// Returns `Ok(true)` if the path exists, `Ok(false)` if it does not.
    /// Only returns an error for unexpected failures (e.g., I/O errors).
    fn exists(&self, path: &Path) -> Result<bool, AuditError>;

    /// Get metadata for a path (follows symlinks).
    ///
    /// # Errors
    ///
    /// - [`AuditError::NotFound`] if the path does not exist
    fn metadata(&self, path: &Path) -> Result<Metadata, AuditError>;

    /// Get metadata without following symlinks.
    ///
    /// If `path` is a symlink, returns the symlink's own metadata with
    /// [`FileType::Symlink`](crate::FileType::Symlink).
    ///
    /// # Errors
    ///
    /// - [`AuditError::NotFound`] if the path does not exist
    fn symlink_metadata(&self, path: &Path) -> Result<Metadata, AuditError>;
}
