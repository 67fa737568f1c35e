//! Aggregated audit results for callers that render them.

use std::path::PathBuf;

/// Every answer of one audit session, gathered by
/// [`PermissionAudit::report`](crate::PermissionAudit::report).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuditReport {
    /// Installation roots that are writable through and through.
    pub current_writable: Vec<PathBuf>,
    /// Application roots that are currently locked down.
    pub current_non_writable: Vec<PathBuf>,
    /// Specific files and directories blocking installation.
    pub missing_writable_paths: Vec<PathBuf>,
    /// Installation roots that are not fully writable.
    pub missing_writable_directories: Vec<PathBuf>,
    /// Application roots still writable after installation.
    pub unnecessary_writable_directories: Vec<PathBuf>,
}

impl AuditReport {
    /// Every installation root is writable.
    pub fn is_ready_for_installation(&self) -> bool {
        self.missing_writable_directories.is_empty()
    }

    /// No application root is left writable.
    pub fn is_locked_down(&self) -> bool {
        self.unnecessary_writable_directories.is_empty()
    }
}
