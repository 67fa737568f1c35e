//! Directory listing.

use std::path::Path;

use crate::{AuditError, DirEntry};

/// Directory listing for a filesystem.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self` to allow
/// concurrent access.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsDir`.
pub trait FsDir: Send + Sync {
    /// List the immediate children of a directory.
    ///
    /// Returns an iterator over directory entries. The outer `Result` indicates
    /// whether the directory could be opened; each item's `Result` indicates
    /// whether that specific entry could be read. The `.` and `..` entries
    /// are never yielded.
    ///
    /// # Errors
    ///
    /// - [`AuditError::NotFound`] if the path does not exist
    /// - [`AuditError::NotADirectory`] if the path is not a directory
    /// - [`AuditError::PermissionDenied`] if the directory cannot be listed
    fn read_dir(&self, path: &Path) -> Result<ReadDirIter, AuditError>;
}

/// Iterator over directory entries.
///
/// Wraps a boxed iterator for flexibility across different backends.
///
/// - Outer `Result` (from [`FsDir::read_dir`]) = "can I open this directory?"
/// - Inner `Result` (per item) = "can I read this entry?"
pub struct ReadDirIter(Box<dyn Iterator<Item = Result<DirEntry, AuditError>> + Send + 'static>);

impl ReadDirIter {
    /// Create from any compatible iterator.
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = Result<DirEntry, AuditError>> + Send + 'static,
    {
        Self(Box::new(iter))
    }

    /// Create from a pre-collected vector.
    pub fn from_vec(entries: Vec<Result<DirEntry, AuditError>>) -> Self {
        Self(Box::new(entries.into_iter()))
    }

    /// Collect all entries, short-circuiting on first error.
    pub fn collect_all(self) -> Result<Vec<DirEntry>, AuditError> {
        self.collect()
    }

    /// Collect all entries sorted by name, short-circuiting on first error.
    pub fn collect_sorted(self) -> Result<Vec<DirEntry>, AuditError> {
        let mut entries = self.collect_all()?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

impl Iterator for ReadDirIter {
    type Item = Result<DirEntry, AuditError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}
