//! Effective-user access checks.

use std::path::Path;

use crate::{Access, AuditError};

/// Access checks for the effective user of the current process.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self` to allow
/// concurrent access.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsAccess`.
///
/// # Note
///
/// Permission bits alone do not answer "may *this* process write here":
/// ownership, ACLs and read-only mounts all take part. Backends answer that
/// question here.
pub trait FsAccess: Send + Sync {
    /// Check whether every access requested in `access` is granted on `path`.
    ///
    /// Returns `Ok(false)` when access is denied or the path does not exist.
    ///
    /// # Errors
    ///
    /// Only unexpected failures are errors (e.g., an I/O error other than
    /// "denied" or "not found").
    fn check_access(&self, path: &Path, access: Access) -> Result<bool, AuditError>;
}
