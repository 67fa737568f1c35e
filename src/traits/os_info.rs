//! Operating system identification.

/// Identifies the platform family the audit runs on.
///
/// Only one question matters to the audit: whether execute bits carry
/// meaning. On the Windows family they do not.
pub trait OsInfo: Send + Sync {
    /// Returns `true` on the Windows platform family.
    fn is_windows(&self) -> bool;
}
