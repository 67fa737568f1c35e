//! Error types for the permission audit.

use std::path::PathBuf;

use crate::DirectoryRole;

/// Audit error type with contextual variants.
///
/// Variants carry the path, role or operation involved where one exists.
/// Uses `#[non_exhaustive]` for forward compatibility.
///
/// # Examples
///
/// ```rust
/// use perm_audit::{AuditError, DirectoryRole};
///
/// let err = AuditError::RoleNotConfigured { role: DirectoryRole::Media };
/// assert_eq!(err.to_string(), "directory role not configured: media");
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    // Registry Errors
    /// The registry has no path for the role.
    #[error("directory role not configured: {role}")]
    RoleNotConfigured {
        /// The role that could not be resolved.
        role: DirectoryRole,
    },

    /// A role code did not name any known role.
    #[error("unknown directory role: {0}")]
    UnknownRole(String),

    // Path Errors
    /// Path does not exist.
    #[error("not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Expected a directory but found something else.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The path that is not a directory.
        path: PathBuf,
    },

    /// Permission denied for operation.
    #[error("{operation}: permission denied: {path}")]
    PermissionDenied {
        /// The path where permission was denied.
        path: PathBuf,
        /// The operation that was denied.
        operation: &'static str,
    },

    // Configuration Errors
    /// Deserialization error.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// I/O error with context.
    #[error("{operation} failed for {path}: {source}")]
    Io {
        /// The operation that failed.
        operation: &'static str,
        /// The path involved in the operation.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl AuditError {
    /// Convert an I/O error raised while running `operation` on `path`.
    ///
    /// Keeps the path that the plain `From<std::io::Error>` conversion has to drop.
    pub fn from_io(
        error: std::io::Error,
        operation: &'static str,
        path: &std::path::Path,
    ) -> Self {
        let path = path.to_path_buf();
        match error.kind() {
            std::io::ErrorKind::NotFound => AuditError::NotFound { path },
            std::io::ErrorKind::NotADirectory => AuditError::NotADirectory { path },
            std::io::ErrorKind::PermissionDenied => {
                AuditError::PermissionDenied { path, operation }
            }
            _ => AuditError::Io {
                operation,
                path,
                source: error,
            },
        }
    }
}

impl From<std::io::Error> for AuditError {
    fn from(error: std::io::Error) -> Self {
        AuditError::from_io(error, "io", std::path::Path::new(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn audit_error_not_found_display() {
        let err = AuditError::NotFound {
            path: PathBuf::from("/missing"),
        };
        assert_eq!(err.to_string(), "not found: /missing");
    }

    #[test]
    fn audit_error_role_not_configured_display() {
        let err = AuditError::RoleNotConfigured {
            role: DirectoryRole::StaticView,
        };
        assert_eq!(err.to_string(), "directory role not configured: static");
    }

    #[test]
    fn audit_error_permission_denied_display() {
        let err = AuditError::PermissionDenied {
            path: PathBuf::from("/app/etc"),
            operation: "read_dir",
        };
        assert_eq!(err.to_string(), "read_dir: permission denied: /app/etc");
    }

    #[test]
    fn from_io_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = AuditError::from_io(io_err, "read_dir", Path::new("/app/var"));
        match err {
            AuditError::NotFound { path } => assert_eq!(path, PathBuf::from("/app/var")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn audit_error_from_io_permission_denied() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test");
        let err = AuditError::from(io_err);
        assert!(matches!(
            err,
            AuditError::PermissionDenied {
                operation: "io",
                ..
            }
        ));
    }

    #[test]
    fn audit_error_from_io_other() {
        let io_err = std::io::Error::other("test");
        let err = AuditError::from(io_err);
        assert!(matches!(err, AuditError::Io { .. }));
    }
}
