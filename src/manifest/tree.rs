// src/manifest/tree.rs
//! Directory-listing capability the scanner walks.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read-only view of a workflows tree.
pub trait RunTree {
    /// Names of the immediate subdirectories of `dir`, in no particular order.
    /// Errors when `dir` itself cannot be listed.
    fn child_dirs(&self, dir: &Path) -> io::Result<Vec<String>>;

    /// Contents of `file`, `Ok(None)` when it does not exist.
    fn read_file(&self, file: &Path) -> io::Result<Option<Vec<u8>>>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTree;

impl RunTree for LocalTree {
    fn child_dirs(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            // file_type() does not follow symlinks; metadata() does.
            let is_dir = match entry.file_type() {
                Ok(t) if t.is_symlink() => entry.path().is_dir(),
                Ok(t) => t.is_dir(),
                Err(_) => false,
            };
            if is_dir {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    fn read_file(&self, file: &Path) -> io::Result<Option<Vec<u8>>> {
        match fs::read(file) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// In-memory tree for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl MemoryTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let mut tree = Self::default();
        tree.dirs.insert(root.into());
        tree
    }

    /// Adds a directory and all of its ancestors.
    pub fn with_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.insert_dir(dir.as_ref());
        self
    }

    /// Adds a file, creating its parent directories.
    pub fn with_file(mut self, file: impl AsRef<Path>, contents: impl Into<Vec<u8>>) -> Self {
        let file = file.as_ref();
        if let Some(parent) = file.parent() {
            self.insert_dir(parent);
        }
        self.files.insert(file.to_path_buf(), contents.into());
        self
    }

    fn insert_dir(&mut self, dir: &Path) {
        for ancestor in dir.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl RunTree for MemoryTree {
    fn child_dirs(&self, dir: &Path) -> io::Result<Vec<String>> {
        if !self.dirs.contains(dir) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not a directory", dir.display()),
            ));
        }
        Ok(self
            .dirs
            .iter()
            .filter(|d| d.parent() == Some(dir))
            .filter_map(|d| d.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect())
    }

    fn read_file(&self, file: &Path) -> io::Result<Option<Vec<u8>>> {
        Ok(self.files.get(file).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_tree_lists_children() {
        let tree = MemoryTree::new("/w")
            .with_file("/w/AAPL/run_a/summary.json", "{}")
            .with_dir("/w/MSFT")
            .with_file("/w/manifest.json", "[]");

        let mut tickers = tree.child_dirs(Path::new("/w")).unwrap();
        tickers.sort();
        assert_eq!(tickers, vec!["AAPL", "MSFT"]);
        assert_eq!(tree.child_dirs(Path::new("/w/AAPL/run_a")).unwrap(), Vec::<String>::new());
        assert!(tree.child_dirs(Path::new("/nope")).is_err());
        assert_eq!(
            tree.read_file(Path::new("/w/AAPL/run_a/summary.json")).unwrap(),
            Some(b"{}".to_vec())
        );
        assert_eq!(tree.read_file(Path::new("/w/AAPL/summary.json")).unwrap(), None);
    }

    #[test]
    fn test_local_tree_skips_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("AAPL")).unwrap();
        fs::write(temp_dir.path().join("manifest.json"), "[]").unwrap();

        let tree = LocalTree;
        assert_eq!(tree.child_dirs(temp_dir.path()).unwrap(), vec!["AAPL"]);
        assert_eq!(tree.read_file(&temp_dir.path().join("missing.json")).unwrap(), None);
        assert!(tree.child_dirs(&temp_dir.path().join("missing")).is_err());
    }
}
