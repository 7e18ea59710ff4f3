//! Test discovery I/O boundary
//!
//! Listing the scripts of a test directory is the only filesystem access selection needs. It sits
//! behind [`TestDiscovery`] so the selection rules can run against an in-memory tree
//! ([`MemoryDiscovery`]) as well as a real one ([`FsDiscovery`]).

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tinytest_core::harness::SCRIPT_EXTENSION;

use crate::errors::{GenError, GenResult};

/// List the test scripts of one directory.
pub trait TestDiscovery {
    /// Return `<dir>/<name>.py` paths for the scripts directly under `dir`, in a stable order.
    ///
    /// A directory that does not exist has no scripts.
    fn list_scripts(&self, dir: &str) -> GenResult<Vec<String>>;
}

/// Filesystem-based discovery relative to a root directory.
#[derive(Debug, Clone)]
pub struct FsDiscovery {
    root: PathBuf,
}

impl FsDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl TestDiscovery for FsDiscovery {
    fn list_scripts(&self, dir: &str) -> GenResult<Vec<String>> {
        let dir_path = self.root.join(dir);
        let entries = match fs::read_dir(&dir_path) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(dir, "test directory not found, nothing to scan");
                return Ok(Vec::new());
            }
            Err(source) => return Err(GenError::Io { path: dir_path, source }),
        };

        let mut scripts = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| GenError::Io {
                path: dir_path.clone(),
                source,
            })?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                tracing::warn!(dir, name = ?file_name, "skipping non UTF-8 file name");
                continue;
            };
            if !is_script_name(name) || !entry.path().is_file() {
                continue;
            }
            scripts.push(format!("{dir}/{name}"));
        }

        scripts.sort();
        Ok(scripts)
    }
}

/// In-memory discovery: a fixed map from directory name to script file names.
#[derive(Debug, Clone, Default)]
pub struct MemoryDiscovery {
    dirs: BTreeMap<String, Vec<String>>,
}

impl MemoryDiscovery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the file names found in `dir`. Non-script names are filtered on listing.
    pub fn with_dir<I>(mut self, dir: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.dirs
            .entry(dir.into())
            .or_default()
            .extend(names.into_iter().map(Into::into));
        self
    }
}

impl TestDiscovery for MemoryDiscovery {
    fn list_scripts(&self, dir: &str) -> GenResult<Vec<String>> {
        let mut scripts: Vec<String> = self
            .dirs
            .get(dir)
            .into_iter()
            .flatten()
            .filter(|name| is_script_name(name))
            .map(|name| format!("{dir}/{name}"))
            .collect();
        scripts.sort();
        Ok(scripts)
    }
}

/// Whether a file name matches `*.py` (hidden files never match).
fn is_script_name(name: &str) -> bool {
    !name.starts_with('.')
        && Path::new(name)
            .extension()
            .is_some_and(|ext| ext == SCRIPT_EXTENSION)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_is_script_name() {
        assert!(is_script_name("foo.py"));
        assert!(!is_script_name("foo.py.exp"));
        assert!(!is_script_name(".hidden.py"));
        assert!(!is_script_name("foo.pyc"));
        assert!(!is_script_name("py"));
    }

    #[test]
    fn test_fs_discovery_lists_sorted_scripts() {
        let root = tempfile::tempdir().unwrap();
        let basics = root.path().join("basics");
        fs::create_dir(&basics).unwrap();
        for name in ["b.py", "a.py", "a.py.exp", "notes.txt", ".c.py"] {
            fs::write(basics.join(name), "").unwrap();
        }
        fs::create_dir(basics.join("sub.py")).unwrap();

        let found = FsDiscovery::new(root.path()).list_scripts("basics").unwrap();
        assert_eq!(found, vec!["basics/a.py", "basics/b.py"]);
    }

    #[test]
    fn test_fs_discovery_missing_dir_is_empty() {
        let root = tempfile::tempdir().unwrap();
        assert!(FsDiscovery::new(root.path()).list_scripts("nope").unwrap().is_empty());
    }

    #[test]
    fn test_memory_discovery() {
        let discovery = MemoryDiscovery::new().with_dir("misc", ["z.py", "a.py", "a.py.exp"]);
        assert_eq!(discovery.list_scripts("misc").unwrap(), vec!["misc/a.py", "misc/z.py"]);
        assert!(discovery.list_scripts("other").unwrap().is_empty());
    }
}
