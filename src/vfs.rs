use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Filesystem probes needed by import resolution.
///
/// The resolution algorithm only ever asks two questions of the filesystem,
/// so the whole of it can run against an in-memory tree in tests.
pub trait FsView {
    /// Whether an entry (file or directory) exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Whether the entry at `path` is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Live filesystem. Probe failures (permissions, dangling links) read as
/// "not there" — a missing answer never aborts a check.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl FsView for RealFs {
    fn exists(&self, path: &Path) -> bool {
        std::fs::metadata(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        std::fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
    }
}

/// In-memory filesystem: a set of file paths. Directories are implied by
/// the files under them.
#[derive(Debug, Clone, Default)]
pub struct MemFs {
    files: BTreeSet<PathBuf>,
}

impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of file paths.
    pub fn with_files<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut fs = Self::new();
        for p in paths {
            fs.add_file(p);
        }
        fs
    }

    pub fn add_file<P: Into<PathBuf>>(&mut self, path: P) {
        self.files.insert(path.into());
    }
}

impl FsView for MemFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.files
            .iter()
            .any(|f| f.starts_with(path) && f.as_path() != path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memfs_files_and_implied_dirs() {
        let fs = MemFs::with_files(["/repo/src/a/index.js", "/repo/src/a/lib/helper.js"]);
        assert!(fs.exists(Path::new("/repo/src/a/index.js")));
        assert!(fs.exists(Path::new("/repo/src/a")));
        assert!(fs.is_dir(Path::new("/repo/src/a/lib")));
        assert!(!fs.is_dir(Path::new("/repo/src/a/index.js")));
        assert!(!fs.exists(Path::new("/repo/src/b")));
    }

    #[test]
    fn memfs_dir_prefix_is_component_wise() {
        let fs = MemFs::with_files(["/repo/src/abc/x.js"]);
        assert!(!fs.is_dir(Path::new("/repo/src/ab")));
    }
}
