//! # Extension Traits
//!
//! Boolean predicates over any [`FsProbe`] backend.
//!
//! ## Overview
//!
//! The audit only ever asks yes/no questions of the filesystem, and a probe
//! that fails is answered "no". [`FsProbeExt`] packages that policy so it is
//! applied the same way everywhere. Failures are logged at `debug` level and
//! otherwise swallowed.
//!
//! ## Available Methods
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`is_dir`](FsProbeExt::is_dir) | Path is a directory (follows symlinks) |
//! | [`is_symlink`](FsProbeExt::is_symlink) | Path itself is a symbolic link |
//! | [`is_readable`](FsProbeExt::is_readable) | Effective user may read |
//! | [`is_writable`](FsProbeExt::is_writable) | Effective user may write |
//! | [`is_executable`](FsProbeExt::is_executable) | Effective user may execute / traverse |
//! | [`is_readable_dir`](FsProbeExt::is_readable_dir) | Exists, is a directory, is readable |

use std::path::Path;

use crate::{Access, AuditError, FsProbe};

fn or_false(result: Result<bool, AuditError>, probe: &'static str, path: &Path) -> bool {
    match result {
        Ok(answer) => answer,
        Err(error) => {
            tracing::debug!(probe, path = %path.display(), %error, "probe failed, treating as false");
            false
        }
    }
}

/// Boolean predicates for any filesystem backend.
///
/// All methods have default implementations, so backends get them
/// automatically.
///
/// # Example
///
/// ```rust
/// use perm_audit::{FsProbe, FsProbeExt};
/// use std::path::Path;
///
/// fn can_install_into<B: FsProbe>(backend: &B, dir: &Path) -> bool {
///     backend.is_readable_dir(dir) && backend.is_writable(dir)
/// }
/// ```
pub trait FsProbeExt: FsProbe {
    /// Check if the path exists. Failures count as `false`.
    fn path_exists(&self, path: &Path) -> bool {
        or_false(self.exists(path), "exists", path)
    }

    /// Check if the path points to a directory, following symlinks.
    ///
    /// Returns `false` if the path doesn't exist.
    fn is_dir(&self, path: &Path) -> bool {
        let result = match self.metadata(path) {
            Ok(m) => Ok(m.is_dir()),
            Err(AuditError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        };
        or_false(result, "is_dir", path)
    }

    /// Check if the path itself is a symbolic link.
    ///
    /// Uses [`FsStat::symlink_metadata`](crate::FsStat::symlink_metadata),
    /// so the link is never followed.
    fn is_symlink(&self, path: &Path) -> bool {
        let result = match self.symlink_metadata(path) {
            Ok(m) => Ok(m.is_symlink()),
            Err(AuditError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        };
        or_false(result, "is_symlink", path)
    }

    /// Check if the effective user may read the path.
    fn is_readable(&self, path: &Path) -> bool {
        or_false(self.check_access(path, Access::READ), "readable", path)
    }

    /// Check if the effective user may write the path.
    fn is_writable(&self, path: &Path) -> bool {
        or_false(self.check_access(path, Access::WRITE), "writable", path)
    }

    /// Check if the effective user may execute the path (traverse, for a directory).
    fn is_executable(&self, path: &Path) -> bool {
        or_false(self.check_access(path, Access::EXECUTE), "executable", path)
    }

    /// Baseline directory check: the path exists, is a directory and is readable.
    fn is_readable_dir(&self, path: &Path) -> bool {
        self.path_exists(path) && self.is_dir(path) && self.is_readable(path)
    }
}

// Blanket implementation - any FsProbe backend gets FsProbeExt for free
impl<B: FsProbe + ?Sized> FsProbeExt for B {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FileType, FsAccess, FsDir, FsStat, Metadata, ReadDirIter};
    use std::path::PathBuf;

    /// Mock backend for testing
    struct MockFs {
        file_type: Option<FileType>,
        access: Access,
        failing: bool,
    }

    impl MockFs {
        fn dir(access: Access) -> Self {
            Self {
                file_type: Some(FileType::Directory),
                access,
                failing: false,
            }
        }

        fn symlink() -> Self {
            Self {
                file_type: Some(FileType::Symlink),
                access: Access::default(),
                failing: false,
            }
        }

        fn empty() -> Self {
            Self {
                file_type: None,
                access: Access::default(),
                failing: false,
            }
        }

        fn failing() -> Self {
            Self {
                file_type: Some(FileType::Directory),
                access: Access::TRAVERSE,
                failing: true,
            }
        }

        fn io_error(path: &Path) -> AuditError {
            AuditError::Io {
                operation: "stat",
                path: path.to_path_buf(),
                source: std::io::Error::other("device went away"),
            }
        }
    }

    impl FsStat for MockFs {
        fn exists(&self, path: &Path) -> Result<bool, AuditError> {
            if self.failing {
                return Err(Self::io_error(path));
            }
            Ok(self.file_type.is_some())
        }

        fn metadata(&self, path: &Path) -> Result<Metadata, AuditError> {
            if self.failing {
                return Err(Self::io_error(path));
            }
            match self.file_type {
                // a link to a directory
                Some(FileType::Symlink) | Some(FileType::Directory) => Ok(Metadata {
                    file_type: FileType::Directory,
                }),
                Some(file_type) => Ok(Metadata { file_type }),
                None => Err(AuditError::NotFound {
                    path: path.to_path_buf(),
                }),
            }
        }

        fn symlink_metadata(&self, path: &Path) -> Result<Metadata, AuditError> {
            if self.failing {
                return Err(Self::io_error(path));
            }
            match self.file_type {
                Some(file_type) => Ok(Metadata { file_type }),
                None => Err(AuditError::NotFound {
                    path: path.to_path_buf(),
                }),
            }
        }
    }

    impl FsAccess for MockFs {
        fn check_access(&self, path: &Path, access: Access) -> Result<bool, AuditError> {
            if self.failing {
                return Err(Self::io_error(path));
            }
            Ok((!access.read || self.access.read)
                && (!access.write || self.access.write)
                && (!access.execute || self.access.execute))
        }
    }

    impl FsDir for MockFs {
        fn read_dir(&self, _: &Path) -> Result<ReadDirIter, AuditError> {
            Ok(ReadDirIter::from_vec(vec![]))
        }
    }

    fn path() -> PathBuf {
        PathBuf::from("/app/var")
    }

    #[test]
    fn readable_dir_requires_read_access() {
        assert!(MockFs::dir(Access::READ).is_readable_dir(&path()));
        assert!(!MockFs::dir(Access::WRITE).is_readable_dir(&path()));
    }

    #[test]
    fn missing_path_is_nothing() {
        let fs = MockFs::empty();
        assert!(!fs.path_exists(&path()));
        assert!(!fs.is_dir(&path()));
        assert!(!fs.is_symlink(&path()));
        assert!(!fs.is_readable_dir(&path()));
    }

    #[test]
    fn symlink_is_detected_without_following() {
        let fs = MockFs::symlink();
        assert!(fs.is_symlink(&path()));
        assert!(fs.is_dir(&path()));
    }

    #[test]
    fn access_predicates_follow_granted_access() {
        let fs = MockFs::dir(Access::TRAVERSE);
        assert!(fs.is_readable(&path()));
        assert!(fs.is_executable(&path()));
        assert!(!fs.is_writable(&path()));
    }

    #[test]
    fn probe_failures_are_false() {
        let fs = MockFs::failing();
        assert!(!fs.path_exists(&path()));
        assert!(!fs.is_dir(&path()));
        assert!(!fs.is_readable(&path()));
        assert!(!fs.is_executable(&path()));
        assert!(!fs.is_readable_dir(&path()));
    }

    #[test]
    fn fs_probe_ext_available_on_dyn_probe() {
        let fs: &dyn FsProbe = &MockFs::dir(Access::WRITE);
        assert!(fs.is_writable(&path()));
    }
}
