//! Collaborators backed by the host system.

use std::path::Path;

use crate::{
    Access, AuditError, DirEntry, FileType, FsAccess, FsDir, FsStat, Metadata, OsInfo, ReadDirIter,
};

/// [`FsProbe`](crate::FsProbe) over the real filesystem.
///
/// Metadata comes from `std::fs`. Access checks go through `faccessat(2)`
/// with `AT_EACCESS` on Unix, so they are made for the effective user and
/// ownership, ACLs and read-only mounts are honoured. On other platforms
/// writability is the inverse of the read-only attribute, and read and
/// execute access are granted to anything whose metadata can be read.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFs;

fn file_type_of(file_type: std::fs::FileType) -> FileType {
    if file_type.is_symlink() {
        FileType::Symlink
    } else if file_type.is_dir() {
        FileType::Directory
    } else {
        FileType::File
    }
}

fn metadata_of(meta: &std::fs::Metadata) -> Metadata {
    Metadata {
        file_type: file_type_of(meta.file_type()),
    }
}

impl FsStat for NativeFs {
    fn exists(&self, path: &Path) -> Result<bool, AuditError> {
        path.try_exists()
            .map_err(|e| AuditError::from_io(e, "exists", path))
    }

    fn metadata(&self, path: &Path) -> Result<Metadata, AuditError> {
        std::fs::metadata(path)
            .map(|meta| metadata_of(&meta))
            .map_err(|e| AuditError::from_io(e, "metadata", path))
    }

    fn symlink_metadata(&self, path: &Path) -> Result<Metadata, AuditError> {
        std::fs::symlink_metadata(path)
            .map(|meta| metadata_of(&meta))
            .map_err(|e| AuditError::from_io(e, "symlink_metadata", path))
    }
}

#[cfg(all(unix, not(any(target_os = "android", target_os = "redox"))))]
fn check_access(path: &Path, access: Access) -> Result<bool, AuditError> {
    use nix::errno::Errno;
    use nix::fcntl::AtFlags;
    use nix::unistd::AccessFlags;

    let mut flags = AccessFlags::F_OK;
    if access.read {
        flags |= AccessFlags::R_OK;
    }
    if access.write {
        flags |= AccessFlags::W_OK;
    }
    if access.execute {
        flags |= AccessFlags::X_OK;
    }

    match nix::unistd::faccessat(None, path, flags, AtFlags::AT_EACCESS) {
        Ok(()) => Ok(true),
        Err(Errno::EACCES | Errno::EPERM | Errno::EROFS | Errno::ENOENT | Errno::ENOTDIR) => {
            Ok(false)
        }
        Err(errno) => Err(AuditError::from_io(errno.into(), "access", path)),
    }
}

#[cfg(not(all(unix, not(any(target_os = "android", target_os = "redox")))))]
fn check_access(path: &Path, access: Access) -> Result<bool, AuditError> {
    let meta = match std::fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(AuditError::from_io(e, "access", path)),
    };
    Ok(!access.write || !meta.permissions().readonly())
}

impl FsAccess for NativeFs {
    fn check_access(&self, path: &Path, access: Access) -> Result<bool, AuditError> {
        check_access(path, access)
    }
}

impl FsDir for NativeFs {
    fn read_dir(&self, path: &Path) -> Result<ReadDirIter, AuditError> {
        let entries =
            std::fs::read_dir(path).map_err(|e| AuditError::from_io(e, "read_dir", path))?;
        let dir = path.to_path_buf();

        Ok(ReadDirIter::new(entries.map(move |entry| {
            let entry = entry.map_err(|e| AuditError::from_io(e, "read_dir", &dir))?;
            let path = entry.path();
            let file_type = entry
                .file_type()
                .map_err(|e| AuditError::from_io(e, "file_type", &path))?;
            Ok(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                path,
                file_type: file_type_of(file_type),
            })
        })))
    }
}

/// [`OsInfo`] for the platform this crate was compiled for.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostOs;

impl OsInfo for HostOs {
    fn is_windows(&self) -> bool {
        cfg!(windows)
    }
}
