//! Can the command-line user traverse the generated-code tree?

use std::path::PathBuf;

use crate::{AuditError, DirectoryList, DirectoryRole, FsProbe, FsProbeExt, OsInfo, ReadDirIter};

/// Check that the effective user can enter the generation directory and each
/// of its immediate children.
///
/// The root and every child (one level, not recursive) must be a readable
/// directory that is also executable. Execute bits are ignored on the
/// Windows family, where they carry no meaning.
///
/// Returns `Ok(false)` if the root is missing or cannot be listed, or if any
/// entry fails the check.
///
/// # Errors
///
/// Only a registry failure to resolve [`DirectoryRole::Generation`].
///
/// # Example
///
/// ```rust
/// use perm_audit::{check_cli_user_access, DirectoryMap, DirectoryRole, HostOs, NativeFs};
///
/// let dirs = DirectoryMap::new().with(DirectoryRole::Generation, "/definitely/not/here");
/// assert!(!check_cli_user_access(&NativeFs, &dirs, &HostOs).unwrap());
/// ```
pub fn check_cli_user_access<F, D, O>(fs: &F, dirs: &D, os: &O) -> Result<bool, AuditError>
where
    F: FsProbe + ?Sized,
    D: DirectoryList + ?Sized,
    O: OsInfo + ?Sized,
{
    let root = dirs.path(DirectoryRole::Generation)?;

    let children = match fs.read_dir(&root).and_then(ReadDirIter::collect_sorted) {
        Ok(children) => children,
        Err(error) => {
            tracing::debug!(root = %root.display(), %error, "cannot list generation directory");
            return Ok(false);
        }
    };

    let ignore_execute = os.is_windows();
    let mut entries: Vec<PathBuf> = Vec::with_capacity(children.len() + 1);
    entries.push(root);
    entries.extend(children.into_iter().map(|entry| entry.path));

    let denied = entries.iter().find(|path| {
        !(fs.path_exists(path)
            && fs.is_dir(path)
            && fs.is_readable(path)
            && (ignore_execute || fs.is_executable(path)))
    });

    match denied {
        Some(path) => {
            tracing::debug!(path = %path.display(), "command-line user cannot traverse");
            Ok(false)
        }
        None => Ok(true),
    }
}
