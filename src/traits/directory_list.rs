//! Directory role registry.

use std::path::PathBuf;

use crate::{AuditError, DirectoryRole};

/// Resolves directory roles to absolute paths.
///
/// The audit resolves each role it needs once per session and memoizes the
/// answer, so implementations are free to do real work here.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn DirectoryList`.
pub trait DirectoryList: Send + Sync {
    /// Absolute path of the directory playing `role`.
    ///
    /// # Errors
    ///
    /// - [`AuditError::RoleNotConfigured`] if the registry has no path for `role`
    fn path(&self, role: DirectoryRole) -> Result<PathBuf, AuditError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl DirectoryList for Fixed {
        fn path(&self, role: DirectoryRole) -> Result<PathBuf, AuditError> {
            match role {
                DirectoryRole::Config => Ok(PathBuf::from("/app/etc")),
                role => Err(AuditError::RoleNotConfigured { role }),
            }
        }
    }

    #[test]
    fn directory_list_can_be_boxed() {
        let dirs: Box<dyn DirectoryList> = Box::new(Fixed);
        assert_eq!(
            dirs.path(DirectoryRole::Config).unwrap(),
            PathBuf::from("/app/etc")
        );
        assert!(matches!(
            dirs.path(DirectoryRole::Media),
            Err(AuditError::RoleNotConfigured {
                role: DirectoryRole::Media
            })
        ));
    }
}
