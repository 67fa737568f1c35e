//! Core types for the permission audit.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::AuditError;

/// Symbolic identifier for a functionally significant application directory.
///
/// Roles are mapped to physical paths by a
/// [`DirectoryList`](crate::DirectoryList) implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DirectoryRole {
    /// Application configuration.
    Config,
    /// Variable data: caches, logs, reports.
    Var,
    /// User-uploaded media.
    Media,
    /// Published static view files.
    #[cfg_attr(feature = "serde", serde(rename = "static"))]
    StaticView,
    /// Generated code.
    Generation,
    /// Compiled dependency-injection configuration.
    Di,
    /// On-disk session storage.
    Session,
}

impl DirectoryRole {
    /// Every role, in declaration order.
    pub const ALL: [DirectoryRole; 7] = [
        DirectoryRole::Config,
        DirectoryRole::Var,
        DirectoryRole::Media,
        DirectoryRole::StaticView,
        DirectoryRole::Generation,
        DirectoryRole::Di,
        DirectoryRole::Session,
    ];

    /// Stable string code of the role.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DirectoryRole::Config => "config",
            DirectoryRole::Var => "var",
            DirectoryRole::Media => "media",
            DirectoryRole::StaticView => "static",
            DirectoryRole::Generation => "generation",
            DirectoryRole::Di => "di",
            DirectoryRole::Session => "session",
        }
    }
}

impl fmt::Display for DirectoryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DirectoryRole {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DirectoryRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| AuditError::UnknownRole(s.to_string()))
    }
}

/// Type of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileType {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Symbolic link.
    Symlink,
}

/// Metadata for a filesystem entry.
///
/// Only the entry type takes part in an audit; access questions go through
/// [`FsAccess`](crate::FsAccess) instead of permission bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Type of the entry (file, directory, symlink).
    pub file_type: FileType,
}

impl Metadata {
    /// Returns `true` if this is a regular file.
    #[inline]
    pub fn is_file(&self) -> bool {
        self.file_type == FileType::File
    }

    /// Returns `true` if this is a directory.
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }

    /// Returns `true` if this is a symbolic link.
    #[inline]
    pub fn is_symlink(&self) -> bool {
        self.file_type == FileType::Symlink
    }
}

/// A directory entry returned from `read_dir`.
///
/// `file_type` describes the entry itself: a symbolic link is reported as
/// [`FileType::Symlink`], never as its target's type.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirEntry {
    /// Name of the entry (filename only, not full path).
    pub name: String,
    /// Full path to the entry.
    pub path: PathBuf,
    /// Type of the entry.
    pub file_type: FileType,
}

/// Access being asked of [`FsAccess::check_access`](crate::FsAccess::check_access).
///
/// Checks are made for the effective user of the current process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Access {
    /// Read a file, or list a directory.
    pub read: bool,
    /// Modify a file, or create entries in a directory.
    pub write: bool,
    /// Execute a file, or traverse a directory.
    pub execute: bool,
}

impl Access {
    /// Read access.
    pub const READ: Self = Self {
        read: true,
        write: false,
        execute: false,
    };

    /// Write access.
    pub const WRITE: Self = Self {
        read: false,
        write: true,
        execute: false,
    };

    /// Execute (or, for a directory, search) access.
    pub const EXECUTE: Self = Self {
        read: false,
        write: false,
        execute: true,
    };

    /// Read plus execute: what listing and entering a directory needs.
    pub const TRAVERSE: Self = Self {
        read: true,
        write: false,
        execute: true,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_codes_round_trip_through_from_str() {
        for role in DirectoryRole::ALL {
            assert_eq!(role.as_str().parse::<DirectoryRole>().unwrap(), role);
        }
    }

    #[test]
    fn role_display_uses_code() {
        assert_eq!(DirectoryRole::StaticView.to_string(), "static");
        assert_eq!(DirectoryRole::Di.to_string(), "di");
    }

    #[test]
    fn unknown_role_code_is_rejected() {
        let err = "cache".parse::<DirectoryRole>().unwrap_err();
        assert!(matches!(err, AuditError::UnknownRole(code) if code == "cache"));
    }

    #[test]
    fn metadata_is_dir() {
        let m = Metadata { file_type: FileType::Directory };
        assert!(!m.is_file());
        assert!(m.is_dir());
        assert!(!m.is_symlink());
    }

    #[test]
    fn metadata_is_symlink() {
        let m = Metadata { file_type: FileType::Symlink };
        assert!(!m.is_file());
        assert!(!m.is_dir());
        assert!(m.is_symlink());
    }

    #[test]
    fn access_constants() {
        assert!(Access::READ.read && !Access::READ.write && !Access::READ.execute);
        assert!(Access::WRITE.write && !Access::WRITE.read);
        assert!(Access::EXECUTE.execute && !Access::EXECUTE.read);
        assert!(Access::TRAVERSE.read && Access::TRAVERSE.execute);
        assert!(!Access::TRAVERSE.write);
    }

    #[test]
    fn types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DirectoryRole>();
        assert_send_sync::<FileType>();
        assert_send_sync::<Metadata>();
        assert_send_sync::<DirEntry>();
        assert_send_sync::<Access>();
    }
}
