//! Ordered, lazily resolved role → path mapping.

use std::path::PathBuf;

use crate::{AuditError, DirectoryList, DirectoryRole};

/// An ordered set of roles whose paths are resolved once and then memoized.
///
/// The roles are fixed at construction. The first successful
/// [`resolve`](RoleSet::resolve) asks the registry for every role, in order;
/// later calls return the stored answer without touching the registry again.
/// A failed resolution stores nothing, so the next call retries.
#[derive(Debug, Clone)]
pub struct RoleSet {
    roles: Vec<DirectoryRole>,
    resolved: Option<Vec<(DirectoryRole, PathBuf)>>,
}

impl RoleSet {
    /// Create an unresolved set over `roles`, keeping their order.
    pub fn new(roles: impl IntoIterator<Item = DirectoryRole>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
            resolved: None,
        }
    }

    /// The roles of this set, in order.
    pub fn roles(&self) -> &[DirectoryRole] {
        &self.roles
    }

    /// Returns `true` once the paths have been resolved.
    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    /// Resolve every role through `dirs`, or return the memoized pairs.
    ///
    /// # Errors
    ///
    /// The first registry error is returned unchanged.
    pub fn resolve<D>(&mut self, dirs: &D) -> Result<&[(DirectoryRole, PathBuf)], AuditError>
    where
        D: DirectoryList + ?Sized,
    {
        let resolved = match self.resolved.take() {
            Some(resolved) => resolved,
            None => {
                let resolved = self
                    .roles
                    .iter()
                    .map(|&role| dirs.path(role).map(|path| (role, path)))
                    .collect::<Result<Vec<_>, _>>()?;
                tracing::debug!(roles = ?self.roles, "resolved directory roles");
                resolved
            }
        };
        Ok(self.resolved.insert(resolved).as_slice())
    }

    /// Resolved paths only, in role order.
    ///
    /// # Errors
    ///
    /// See [`resolve`](RoleSet::resolve).
    pub fn paths<D>(&mut self, dirs: &D) -> Result<Vec<PathBuf>, AuditError>
    where
        D: DirectoryList + ?Sized,
    {
        Ok(self
            .resolve(dirs)?
            .iter()
            .map(|(_, path)| path.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingList {
        calls: AtomicUsize,
        fail_on: Option<DirectoryRole>,
    }

    impl CountingList {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_on: None,
            }
        }
    }

    impl DirectoryList for CountingList {
        fn path(&self, role: DirectoryRole) -> Result<PathBuf, AuditError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_on == Some(role) {
                return Err(AuditError::RoleNotConfigured { role });
            }
            Ok(PathBuf::from("/app").join(role.as_str()))
        }
    }

    #[test]
    fn paths_keep_role_order() {
        let dirs = CountingList::new();
        let mut set = RoleSet::new([DirectoryRole::Media, DirectoryRole::Config]);
        assert_eq!(
            set.paths(&dirs).unwrap(),
            vec![PathBuf::from("/app/media"), PathBuf::from("/app/config")]
        );
    }

    #[test]
    fn registry_is_asked_once_per_role() {
        let dirs = CountingList::new();
        let mut set = RoleSet::new([DirectoryRole::Config, DirectoryRole::Var]);
        let first = set.paths(&dirs).unwrap();
        let second = set.paths(&dirs).unwrap();
        assert_eq!(first, second);
        assert_eq!(dirs.calls.load(Ordering::SeqCst), 2);
        assert!(set.is_resolved());
    }

    #[test]
    fn failed_resolution_is_not_memoized() {
        let dirs = CountingList {
            calls: AtomicUsize::new(0),
            fail_on: Some(DirectoryRole::Var),
        };
        let mut set = RoleSet::new([DirectoryRole::Config, DirectoryRole::Var]);
        assert!(matches!(
            set.resolve(&dirs),
            Err(AuditError::RoleNotConfigured {
                role: DirectoryRole::Var
            })
        ));
        assert!(!set.is_resolved());
    }

    #[test]
    fn empty_set_resolves_to_nothing() {
        let dirs = CountingList::new();
        let mut set = RoleSet::new(Vec::<DirectoryRole>::new());
        assert!(set.paths(&dirs).unwrap().is_empty());
        assert_eq!(dirs.calls.load(Ordering::SeqCst), 0);
    }
}
