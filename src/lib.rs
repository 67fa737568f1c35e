//! # perm-audit
//!
//! Read-only permission audit for an application's installation directories.
//!
//! Some directories must be writable, whole subtree included, for an
//! installation to succeed; others should be locked down once it is done. This
//! crate checks both and names the exact files and directories that break the
//! expectation. It never changes a permission.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use perm_audit::{DirectoryMap, HostOs, NativeFs, PermissionAudit};
//!
//! # fn main() -> Result<(), perm_audit::AuditError> {
//! let dirs = DirectoryMap::with_default_layout("/var/www/shop");
//! let mut audit = PermissionAudit::new(&NativeFs, &dirs);
//!
//! let report = audit.report()?;
//! if !report.is_ready_for_installation() {
//!     for path in &report.missing_writable_paths {
//!         eprintln!("make writable: {}", path.display());
//!     }
//! }
//! if !audit.check_directory_permission_for_cli_user(&HostOs)? {
//!     eprintln!("generated code is not traversable by this user");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`PermissionAudit`] | One audit run; memoizes every answer it computes |
//! | [`AuditPolicy`] | Which roles must be writable, locked down, or excluded |
//! | [`AuditReport`] | All answers of a run gathered in one value |
//! | [`ViolationIndex`] | Offending entries per installation root |
//! | [`DirectoryRole`] | Symbolic directory name (config, var, media, ...) |
//! | [`AuditError`] | Error type with context |
//!
//! ## Collaborators
//!
//! The audit asks questions of three collaborators, each a trait:
//!
//! | Trait | Provided implementation |
//! |-------|-------------------------|
//! | [`FsProbe`] = [`FsStat`] + [`FsAccess`] + [`FsDir`] | [`NativeFs`] |
//! | [`DirectoryList`] | [`DirectoryMap`] |
//! | [`OsInfo`] | [`HostOs`] |
//!
//! ---
//!
//! ## Exclusions
//!
//! The recursive scan never reports entries below the generated-code and
//! compiled-DI directories, and does not descend into them. Entries below the
//! session directory are not reported either, but the scan still walks them.
//! Symbolic links are never reported and never followed.
//!
//! ## Error Handling
//!
//! Only registry failures surface as errors. A tree that cannot be walked makes
//! its root non-compliant; a probe that fails answers "no".
//!
//! ```rust
//! use perm_audit::{AuditError, DirectoryRole};
//!
//! let err = AuditError::RoleNotConfigured { role: DirectoryRole::Session };
//! assert_eq!(err.to_string(), "directory role not configured: session");
//! ```
//!
//! ## Logging
//!
//! Diagnostics are emitted through `tracing`: role resolution, scans and
//! individual findings at `debug`, aborted scans at `warn`. Install a
//! subscriber to see them.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialization for [`AuditReport`], [`AuditPolicy`], [`DirectoryMap`] and the value types; `DirectoryMap::from_json_str` |

// Private modules
mod audit;
mod cli_access;
mod directory_map;
mod error;
mod ext;
mod native;
mod policy;
mod role_set;
mod traits;
mod types;

// Public re-exports - error types
pub use error::AuditError;

// Public re-exports - core types
pub use types::{Access, DirEntry, DirectoryRole, FileType, Metadata};

// Public re-exports - collaborator traits
pub use traits::{DirectoryList, FsAccess, FsDir, FsProbe, FsStat, OsInfo, ReadDirIter};

// Public re-exports - audit engine
pub use audit::{
    AuditReport, Exclusions, PermissionAudit, ScanOutcome, ViolationIndex, scan_tree,
};
pub use cli_access::check_cli_user_access;
pub use policy::AuditPolicy;
pub use role_set::RoleSet;

// Public re-exports - provided collaborators
pub use directory_map::DirectoryMap;
pub use native::{HostOs, NativeFs};

// Public re-exports - infrastructure
pub use ext::FsProbeExt;
