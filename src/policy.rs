//! Which roles the audit checks, and which subtrees it leaves alone.

use crate::DirectoryRole;

/// Role lists driving a [`PermissionAudit`](crate::PermissionAudit).
///
/// [`AuditPolicy::default`] describes a standard installation: configuration,
/// var, media and static view files must be writable while installing, and
/// configuration should be locked down afterwards.
///
/// With the `serde` feature the policy can be loaded from configuration;
/// missing fields take their default.
///
/// # Example
///
/// ```rust
/// use perm_audit::{AuditPolicy, DirectoryRole};
///
/// let policy = AuditPolicy {
///     installation_writable: vec![DirectoryRole::Var, DirectoryRole::Media],
///     ..AuditPolicy::default()
/// };
/// assert_eq!(policy.application_non_writable, vec![DirectoryRole::Config]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AuditPolicy {
    /// Roles that must be writable, whole subtree included, during installation.
    pub installation_writable: Vec<DirectoryRole>,
    /// Roles that should be non-writable once the application is installed.
    pub application_non_writable: Vec<DirectoryRole>,
    /// Roles whose subtrees are neither evaluated nor descended into.
    pub pruned: Vec<DirectoryRole>,
    /// Roles whose subtrees are not evaluated but are still descended into.
    pub skipped: Vec<DirectoryRole>,
}

impl Default for AuditPolicy {
    fn default() -> Self {
        Self {
            installation_writable: vec![
                DirectoryRole::Config,
                DirectoryRole::Var,
                DirectoryRole::Media,
                DirectoryRole::StaticView,
            ],
            application_non_writable: vec![DirectoryRole::Config],
            pruned: vec![DirectoryRole::Generation, DirectoryRole::Di],
            skipped: vec![DirectoryRole::Session],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_installation_roles_keep_order() {
        assert_eq!(
            AuditPolicy::default().installation_writable,
            vec![
                DirectoryRole::Config,
                DirectoryRole::Var,
                DirectoryRole::Media,
                DirectoryRole::StaticView,
            ]
        );
    }

    #[test]
    fn default_exclusions() {
        let policy = AuditPolicy::default();
        assert_eq!(policy.pruned, vec![DirectoryRole::Generation, DirectoryRole::Di]);
        assert_eq!(policy.skipped, vec![DirectoryRole::Session]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_policy_fills_defaults() {
        let policy: AuditPolicy =
            serde_json::from_str(r#"{"application_non_writable": ["config", "static"]}"#).unwrap();
        assert_eq!(
            policy.application_non_writable,
            vec![DirectoryRole::Config, DirectoryRole::StaticView]
        );
        assert_eq!(policy.installation_writable.len(), 4);
    }
}
