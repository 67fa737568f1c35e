//! Recursive compliance scan of one directory tree.

use std::path::{Path, PathBuf};

use crate::{AuditError, DirEntry, FileType, FsProbe, FsProbeExt};

/// Result of scanning one tree.
#[derive(Debug)]
pub enum ScanOutcome {
    /// Every evaluated entry is writable (or a symbolic link).
    Clean,
    /// The scan completed and found these non-writable entries, children
    /// listed before their parent directory.
    Violations(Vec<PathBuf>),
    /// The tree could not be walked, e.g. a directory vanished or could not
    /// be listed mid-scan.
    Aborted(AuditError),
}

impl ScanOutcome {
    /// Returns `true` only for [`ScanOutcome::Clean`].
    pub fn is_clean(&self) -> bool {
        matches!(self, ScanOutcome::Clean)
    }
}

/// Subtrees a scan leaves out.
///
/// A root given here matches entries strictly below it; the root directory
/// itself is still evaluated as an ordinary entry.
#[derive(Debug, Clone, Default)]
pub struct Exclusions {
    pruned: Vec<PathBuf>,
    skipped: Vec<PathBuf>,
}

impl Exclusions {
    /// `pruned` subtrees are neither evaluated nor descended into.
    /// `skipped` subtrees are not evaluated but are still walked.
    pub fn new(pruned: Vec<PathBuf>, skipped: Vec<PathBuf>) -> Self {
        Self { pruned, skipped }
    }

    /// Entry lies under a pruned root.
    pub fn prunes(&self, path: &Path) -> bool {
        self.pruned.iter().any(|root| is_below(path, root))
    }

    /// Entry lies under a skipped root.
    pub fn skips(&self, path: &Path) -> bool {
        self.skipped.iter().any(|root| is_below(path, root))
    }
}

fn is_below(path: &Path, root: &Path) -> bool {
    path != root && path.starts_with(root)
}

fn list<F>(fs: &F, dir: &Path) -> Result<std::vec::IntoIter<DirEntry>, AuditError>
where
    F: FsProbe + ?Sized,
{
    Ok(fs.read_dir(dir)?.collect_sorted()?.into_iter())
}

/// Walk everything beneath `root`, children before their parent.
///
/// Symbolic links are evaluated but never followed. Directory listings are
/// visited in name order.
pub fn scan_tree<F>(fs: &F, root: &Path, exclusions: &Exclusions) -> ScanOutcome
where
    F: FsProbe + ?Sized,
{
    tracing::debug!(root = %root.display(), "scanning tree");

    let mut violations = Vec::new();
    let mut evaluate = |entry: DirEntry| {
        if exclusions.skips(&entry.path) {
            return;
        }
        if !fs.is_writable(&entry.path) && !fs.is_symlink(&entry.path) {
            tracing::debug!(path = %entry.path.display(), "entry is not writable");
            violations.push(entry.path);
        }
    };

    let mut stack: Vec<(Option<DirEntry>, std::vec::IntoIter<DirEntry>)> = match list(fs, root) {
        Ok(children) => vec![(None, children)],
        Err(error) => return ScanOutcome::Aborted(error),
    };

    while let Some((_, children)) = stack.last_mut() {
        match children.next() {
            Some(entry) if exclusions.prunes(&entry.path) => {}
            Some(entry) if entry.file_type == FileType::Directory => match list(fs, &entry.path) {
                Ok(grandchildren) => stack.push((Some(entry), grandchildren)),
                Err(error) => return ScanOutcome::Aborted(error),
            },
            Some(entry) => evaluate(entry),
            None => {
                if let Some((Some(dir), _)) = stack.pop() {
                    evaluate(dir);
                }
            }
        }
    }

    if violations.is_empty() {
        ScanOutcome::Clean
    } else {
        ScanOutcome::Violations(violations)
    }
}
