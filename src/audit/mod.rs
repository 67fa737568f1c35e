//! # Permission Audit
//!
//! [`PermissionAudit`] is one audit run. It resolves roles through a
//! [`DirectoryList`], probes an [`FsProbe`] backend and remembers every answer
//! for as long as the value lives.
//!
//! ## Memoization
//!
//! Each derived set is computed on first request and then served from the
//! session. Nothing is ever refreshed: the session reflects the filesystem as
//! it was when each set was first computed. Build a new session to observe
//! later changes.
//!
//! ## Example
//!
//! ```rust,no_run
//! use perm_audit::{DirectoryMap, NativeFs, PermissionAudit};
//!
//! # fn main() -> Result<(), perm_audit::AuditError> {
//! let dirs = DirectoryMap::with_default_layout("/var/www/shop");
//! let mut audit = PermissionAudit::new(&NativeFs, &dirs);
//!
//! for path in audit.missing_writable_paths_for_installation()? {
//!     println!("not writable: {}", path.display());
//! }
//! for path in audit.unnecessary_writable_directories_for_application()? {
//!     println!("should be read-only: {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

mod report;
mod scan;
mod violations;

pub use report::AuditReport;
pub use scan::{Exclusions, ScanOutcome, scan_tree};
pub use violations::ViolationIndex;

use std::path::{Path, PathBuf};

use crate::{
    AuditError, AuditPolicy, DirectoryList, DirectoryRole, FsProbe, FsProbeExt, OsInfo, RoleSet,
    check_cli_user_access,
};

/// One permission audit run over an application's directories.
///
/// Methods that compute or memoize take `&mut self`; a session is meant for
/// one caller and one run.
pub struct PermissionAudit<'a, F: ?Sized, D: ?Sized> {
    fs: &'a F,
    dirs: &'a D,
    installation_writable: RoleSet,
    application_non_writable: RoleSet,
    pruned: RoleSet,
    skipped: RoleSet,
    current_writable: Option<Vec<PathBuf>>,
    current_non_writable: Option<Vec<PathBuf>>,
    violations: ViolationIndex,
}

impl<'a, F, D> PermissionAudit<'a, F, D>
where
    F: FsProbe + ?Sized,
    D: DirectoryList + ?Sized,
{
    /// Start a session with [`AuditPolicy::default`].
    pub fn new(fs: &'a F, dirs: &'a D) -> Self {
        Self::with_policy(fs, dirs, AuditPolicy::default())
    }

    /// Start a session with a custom policy.
    pub fn with_policy(fs: &'a F, dirs: &'a D, policy: AuditPolicy) -> Self {
        Self {
            fs,
            dirs,
            installation_writable: RoleSet::new(policy.installation_writable),
            application_non_writable: RoleSet::new(policy.application_non_writable),
            pruned: RoleSet::new(policy.pruned),
            skipped: RoleSet::new(policy.skipped),
            current_writable: None,
            current_non_writable: None,
            violations: ViolationIndex::default(),
        }
    }

    /// Directories that must be writable for installation, in role order.
    ///
    /// # Errors
    ///
    /// Registry failures propagate unchanged.
    pub fn installation_writable_directories(&mut self) -> Result<Vec<PathBuf>, AuditError> {
        self.installation_writable.paths(self.dirs)
    }

    /// Directories that should be non-writable once installed, in role order.
    ///
    /// # Errors
    ///
    /// Registry failures propagate unchanged.
    pub fn application_non_writable_directories(&mut self) -> Result<Vec<PathBuf>, AuditError> {
        self.application_non_writable.paths(self.dirs)
    }

    /// Installation directories that are currently writable, subtree included.
    ///
    /// A root whose top-level check fails is recorded in the
    /// [`violations`](Self::violations) index as itself. A root whose scan finds
    /// non-writable entries has those entries recorded instead. A root whose
    /// scan aborts is left out without any record.
    ///
    /// # Errors
    ///
    /// Registry failures propagate unchanged.
    pub fn installation_current_writable_directories(
        &mut self,
    ) -> Result<Vec<PathBuf>, AuditError> {
        if let Some(current) = &self.current_writable {
            return Ok(current.clone());
        }

        let roots = self.installation_writable.resolve(self.dirs)?.to_vec();
        let mut current = Vec::with_capacity(roots.len());
        for (role, path) in roots {
            if self.is_writable_dir(&path) {
                if self.check_recursive_directories(&path)? {
                    current.push(path);
                }
            } else {
                tracing::debug!(%role, path = %path.display(), "directory is not writable");
                self.violations.record(&path, [path.clone()]);
            }
        }

        self.current_writable = Some(current.clone());
        Ok(current)
    }

    /// Scan everything beneath `root` for entries that are not writable.
    ///
    /// Entries under the pruned roles (generation, DI by default) are skipped
    /// along with their subtrees; entries under the skipped roles (session by
    /// default) are walked but not evaluated. Symbolic links never count.
    /// Offending entries replace whatever the
    /// [`violations`](Self::violations) index held for `root`, so scanning a
    /// root again never duplicates them.
    ///
    /// Returns `Ok(true)` iff the walk completed and found nothing. A walk that
    /// cannot complete returns `Ok(false)` and leaves no record for `root`.
    ///
    /// # Errors
    ///
    /// Registry failures while resolving the excluded roles.
    pub fn check_recursive_directories(&mut self, root: &Path) -> Result<bool, AuditError> {
        let exclusions = Exclusions::new(
            self.pruned.paths(self.dirs)?,
            self.skipped.paths(self.dirs)?,
        );

        match scan_tree(self.fs, root, &exclusions) {
            ScanOutcome::Clean => {
                self.violations.forget(root);
                Ok(true)
            }
            ScanOutcome::Violations(paths) => {
                tracing::debug!(
                    root = %root.display(),
                    count = paths.len(),
                    "found entries that are not writable"
                );
                self.violations.record(root, paths);
                Ok(false)
            }
            ScanOutcome::Aborted(error) => {
                tracing::warn!(root = %root.display(), %error, "permission scan aborted");
                self.violations.forget(root);
                Ok(false)
            }
        }
    }

    /// Application directories that are currently non-writable.
    ///
    /// # Errors
    ///
    /// Registry failures propagate unchanged.
    pub fn application_current_non_writable_directories(
        &mut self,
    ) -> Result<Vec<PathBuf>, AuditError> {
        if let Some(current) = &self.current_non_writable {
            return Ok(current.clone());
        }

        let roots = self.application_non_writable.resolve(self.dirs)?.to_vec();
        let current: Vec<PathBuf> = roots
            .into_iter()
            .filter(|(_, path)| self.is_non_writable_dir(path))
            .map(|(_, path)| path)
            .collect();

        self.current_non_writable = Some(current.clone());
        Ok(current)
    }

    /// The directory playing `role` is a readable directory and is writable.
    ///
    /// # Errors
    ///
    /// Registry failures propagate unchanged.
    pub fn is_writable(&self, role: DirectoryRole) -> Result<bool, AuditError> {
        Ok(self.is_writable_dir(&self.dirs.path(role)?))
    }

    /// The directory playing `role` is a readable directory and is not writable.
    ///
    /// A missing or unreadable directory is neither writable nor non-writable.
    ///
    /// # Errors
    ///
    /// Registry failures propagate unchanged.
    pub fn is_non_writable(&self, role: DirectoryRole) -> Result<bool, AuditError> {
        Ok(self.is_non_writable_dir(&self.dirs.path(role)?))
    }

    fn is_writable_dir(&self, path: &Path) -> bool {
        self.fs.is_readable_dir(path) && self.fs.is_writable(path)
    }

    fn is_non_writable_dir(&self, path: &Path) -> bool {
        self.fs.is_readable_dir(path) && !self.fs.is_writable(path)
    }

    /// Every specific entry that keeps installation from proceeding.
    ///
    /// Walks the installation roots that are not currently writable, in role
    /// order, and flattens what the [`violations`](Self::violations) index holds
    /// for each. A root whose scan aborted contributes nothing.
    ///
    /// # Errors
    ///
    /// Registry failures propagate unchanged.
    pub fn missing_writable_paths_for_installation(&mut self) -> Result<Vec<PathBuf>, AuditError> {
        let missing = self.missing_installation_roots()?;
        Ok(missing
            .iter()
            .filter_map(|root| self.violations.get(root))
            .flatten()
            .cloned()
            .collect())
    }

    /// Installation roots that are not currently writable.
    ///
    /// # Errors
    ///
    /// Registry failures propagate unchanged.
    #[deprecated(note = "use `missing_writable_paths_for_installation` for the offending entries")]
    pub fn missing_writable_directories_for_installation(
        &mut self,
    ) -> Result<Vec<PathBuf>, AuditError> {
        self.missing_installation_roots()
    }

    fn missing_installation_roots(&mut self) -> Result<Vec<PathBuf>, AuditError> {
        let required = self.installation_writable_directories()?;
        let current = self.installation_current_writable_directories()?;
        Ok(difference(required, &current))
    }

    /// Application roots that are still writable but should not be.
    ///
    /// # Errors
    ///
    /// Registry failures propagate unchanged.
    pub fn unnecessary_writable_directories_for_application(
        &mut self,
    ) -> Result<Vec<PathBuf>, AuditError> {
        let required = self.application_non_writable_directories()?;
        let current = self.application_current_non_writable_directories()?;
        Ok(difference(required, &current))
    }

    /// Entries recorded so far, per installation root.
    pub fn violations(&self) -> &ViolationIndex {
        &self.violations
    }

    /// Check that the command-line user can traverse the generation tree.
    ///
    /// See [`check_cli_user_access`].
    ///
    /// # Errors
    ///
    /// Registry failures propagate unchanged.
    pub fn check_directory_permission_for_cli_user<O>(&self, os: &O) -> Result<bool, AuditError>
    where
        O: OsInfo + ?Sized,
    {
        check_cli_user_access(self.fs, self.dirs, os)
    }

    /// Run every query and gather the answers.
    ///
    /// # Errors
    ///
    /// Registry failures propagate unchanged.
    pub fn report(&mut self) -> Result<AuditReport, AuditError> {
        Ok(AuditReport {
            current_writable: self.installation_current_writable_directories()?,
            current_non_writable: self.application_current_non_writable_directories()?,
            missing_writable_paths: self.missing_writable_paths_for_installation()?,
            missing_writable_directories: self.missing_installation_roots()?,
            unnecessary_writable_directories: self
                .unnecessary_writable_directories_for_application()?,
        })
    }
}

/// `required` minus `current`, keeping the order of `required`.
fn difference(required: Vec<PathBuf>, current: &[PathBuf]) -> Vec<PathBuf> {
    required
        .into_iter()
        .filter(|path| !current.contains(path))
        .collect()
}
