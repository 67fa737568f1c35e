//! # Collaborator Traits
//!
//! The audit consumes three collaborators, each expressed as a trait:
//!
//! | Collaborator | Trait(s) | Answers |
//! |--------------|----------|---------|
//! | Filesystem | [`FsStat`], [`FsAccess`], [`FsDir`] = [`FsProbe`] | exists, type, access, listing |
//! | Role registry | [`DirectoryList`] | role → absolute path |
//! | Platform | [`OsInfo`] | is this the Windows family? |
//!
//! ## Blanket Implementation
//!
//! [`FsProbe`] is implemented for every type implementing the three
//! filesystem component traits:
//!
//! ```rust
//! use perm_audit::{
//!     Access, AuditError, FileType, FsAccess, FsDir, FsProbe, FsStat, Metadata, ReadDirIter,
//! };
//! use std::path::Path;
//!
//! struct MyBackend;
//!
//! # impl FsStat for MyBackend {
//! #     fn exists(&self, _: &Path) -> Result<bool, AuditError> { Ok(true) }
//! #     fn metadata(&self, _: &Path) -> Result<Metadata, AuditError> { Ok(Metadata { file_type: FileType::File }) }
//! #     fn symlink_metadata(&self, _: &Path) -> Result<Metadata, AuditError> { Ok(Metadata { file_type: FileType::File }) }
//! # }
//! # impl FsAccess for MyBackend {
//! #     fn check_access(&self, _: &Path, _: Access) -> Result<bool, AuditError> { Ok(true) }
//! # }
//! # impl FsDir for MyBackend {
//! #     fn read_dir(&self, _: &Path) -> Result<ReadDirIter, AuditError> { Ok(ReadDirIter::from_vec(vec![])) }
//! # }
//!
//! // MyBackend now implements FsProbe
//! fn use_probe<B: FsProbe>(_backend: &B) {}
//! use_probe(&MyBackend);
//! ```
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync` and take `&self`.
//!
//! ## Object Safety
//!
//! All traits are object-safe:
//!
//! ```rust
//! use perm_audit::{FsProbe, FsProbeExt};
//!
//! fn writable(fs: &dyn FsProbe) -> bool {
//!     fs.is_writable(std::path::Path::new("/var/www/app/var"))
//! }
//! ```

mod directory_list;
mod fs_access;
mod fs_dir;
mod fs_stat;
mod os_info;

pub use directory_list::DirectoryList;
pub use fs_access::FsAccess;
pub use fs_dir::{FsDir, ReadDirIter};
pub use fs_stat::FsStat;
pub use os_info::OsInfo;

/// Everything the audit needs to ask of a filesystem.
///
/// Combines metadata ([`FsStat`]), effective-user access ([`FsAccess`]) and
/// listing ([`FsDir`]).
///
/// # Blanket Implementation
///
/// Automatically implemented for any type that implements all three component
/// traits. You never need to implement `FsProbe` directly.
///
/// # Example
///
/// ```rust
/// use perm_audit::{AuditError, FsProbe};
/// use std::path::Path;
///
/// fn count_children<B: FsProbe + ?Sized>(fs: &B, dir: &Path) -> Result<usize, AuditError> {
///     Ok(fs.read_dir(dir)?.collect_all()?.len())
/// }
/// ```
///
/// # Available Methods
///
/// From [`FsStat`]: `exists`, `metadata`, `symlink_metadata`
///
/// From [`FsAccess`]: `check_access`
///
/// From [`FsDir`]: `read_dir`
///
/// Boolean predicates (`is_dir`, `is_writable`, ...) come from
/// [`FsProbeExt`](crate::FsProbeExt).
pub trait FsProbe: FsStat + FsAccess + FsDir {}

// Blanket implementation - any type implementing all three gets FsProbe for free
impl<T: FsStat + FsAccess + FsDir> FsProbe for T {}
