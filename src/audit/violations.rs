//! Per-root record of non-compliant entries.

use std::path::{Path, PathBuf};

/// Non-compliant entries found for each audited root, in discovery order.
///
/// Roots keep the order in which they were first recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViolationIndex {
    entries: Vec<(PathBuf, Vec<PathBuf>)>,
}

impl ViolationIndex {
    /// Entries recorded under `root`, if any were.
    pub fn get(&self, root: &Path) -> Option<&[PathBuf]> {
        self.entries
            .iter()
            .find(|(recorded, _)| recorded == root)
            .map(|(_, paths)| paths.as_slice())
    }

    /// Iterate `(root, entries)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &[PathBuf])> {
        self.entries
            .iter()
            .map(|(root, paths)| (root.as_path(), paths.as_slice()))
    }

    /// Number of roots with recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the list kept for `root` with `paths`.
    pub(crate) fn record(&mut self, root: &Path, paths: impl IntoIterator<Item = PathBuf>) {
        let paths: Vec<PathBuf> = paths.into_iter().collect();
        match self.entries.iter_mut().find(|(recorded, _)| recorded == root) {
            Some((_, existing)) => *existing = paths,
            None => self.entries.push((root.to_path_buf(), paths)),
        }
    }

    /// Drop whatever is recorded for `root`.
    pub(crate) fn forget(&mut self, root: &Path) {
        self.entries.retain(|(recorded, _)| recorded != root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_replaces_entries_of_existing_root() {
        let mut index = ViolationIndex::default();
        index.record(Path::new("/app/var"), [PathBuf::from("/app/var/a")]);
        index.record(Path::new("/app/var"), [PathBuf::from("/app/var/b")]);
        assert_eq!(index.len(), 1);
        assert_eq!(
            index.get(Path::new("/app/var")).unwrap(),
            &[PathBuf::from("/app/var/b")]
        );
    }

    #[test]
    fn forget_removes_only_that_root() {
        let mut index = ViolationIndex::default();
        index.record(Path::new("/a"), [PathBuf::from("/a")]);
        index.record(Path::new("/b"), [PathBuf::from("/b/x")]);
        index.forget(Path::new("/a"));
        index.forget(Path::new("/nowhere"));
        assert!(index.get(Path::new("/a")).is_none());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn roots_keep_first_recorded_order() {
        let mut index = ViolationIndex::default();
        index.record(Path::new("/b"), [PathBuf::from("/b/x")]);
        index.record(Path::new("/a"), [PathBuf::from("/a")]);
        let roots: Vec<_> = index.iter().map(|(root, _)| root.to_path_buf()).collect();
        assert_eq!(roots, vec![PathBuf::from("/b"), PathBuf::from("/a")]);
    }

    #[test]
    fn unknown_root_has_no_entries() {
        let index = ViolationIndex::default();
        assert!(index.is_empty());
        assert!(index.get(Path::new("/nowhere")).is_none());
    }
}
