//! In-memory host backends for tests
//!
//! Each fake records the calls it receives so tests can assert on order.

use crate::error::{RazeError, Result};
use crate::host::{FileTree, ProcessRecord, ProcessTable, RegistryHive, ServiceControl};
use crate::target::RegistryNode;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};

#[derive(Default)]
pub struct FakeProcesses {
    pub running: Vec<ProcessRecord>,
    pub broken_snapshot: bool,
    /// Opening these fails with access denied
    pub unopenable: HashSet<u32>,
    /// Opened fine, but termination is refused
    pub protected: HashSet<u32>,
    /// Listed in the snapshot but gone by the time they are opened
    pub exited: HashSet<u32>,
    pub terminated: RefCell<Vec<u32>>,
}

impl FakeProcesses {
    pub fn with(processes: &[(u32, &str)]) -> Self {
        Self {
            running: processes
                .iter()
                .map(|(pid, name)| ProcessRecord {
                    pid: *pid,
                    name: name.to_string(),
                })
                .collect(),
            ..Default::default()
        }
    }
}

impl ProcessTable for FakeProcesses {
    fn snapshot(&self) -> Result<Vec<ProcessRecord>> {
        if self.broken_snapshot {
            return Err(RazeError::EnumerationError("snapshot unavailable".into()));
        }
        Ok(self.running.clone())
    }

    fn terminate(&self, process: &ProcessRecord) -> Result<()> {
        if self.exited.contains(&process.pid) {
            return Ok(());
        }
        if self.unopenable.contains(&process.pid) {
            return Err(RazeError::TerminationError {
                name: process.name.clone(),
                pid: process.pid,
                reason: "cannot open process: access denied".into(),
            });
        }
        if self.protected.contains(&process.pid) {
            return Err(RazeError::TerminationError {
                name: process.name.clone(),
                pid: process.pid,
                reason: "termination refused".into(),
            });
        }
        self.terminated.borrow_mut().push(process.pid);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeServices {
    pub installed: RefCell<BTreeSet<String>>,
    pub protected: HashSet<String>,
    pub deleted: RefCell<Vec<String>>,
}

impl FakeServices {
    pub fn with(names: &[&str]) -> Self {
        Self {
            installed: RefCell::new(names.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        }
    }
}

impl ServiceControl for FakeServices {
    fn delete_service(&self, name: &str) -> Result<()> {
        if self.protected.contains(name) {
            return Err(RazeError::AccessError(format!("service {}", name)));
        }
        if !self.installed.borrow_mut().remove(name) {
            return Err(RazeError::ServiceNotFoundError(name.to_string()));
        }
        self.deleted.borrow_mut().push(name.to_string());
        Ok(())
    }
}

/// A registry holding keys as full paths; a key's children are the keys one
/// separator below it.
#[derive(Default)]
pub struct FakeRegistry {
    pub keys: RefCell<BTreeSet<String>>,
    pub unreadable: HashSet<String>,
    pub protected: HashSet<String>,
    pub deleted: RefCell<Vec<String>>,
    pub listed: RefCell<Vec<String>>,
}

impl FakeRegistry {
    /// Every prefix of every given path becomes a key.
    pub fn with(paths: &[&str]) -> Self {
        let mut keys = BTreeSet::new();
        for path in paths {
            let mut current = String::new();
            for part in path.split('\\') {
                if !current.is_empty() {
                    current.push('\\');
                }
                current.push_str(part);
                keys.insert(current.clone());
            }
        }
        Self {
            keys: RefCell::new(keys),
            ..Default::default()
        }
    }

    fn children(&self, path: &str) -> Vec<String> {
        let prefix = format!("{}\\", path);
        self.keys
            .borrow()
            .iter()
            .filter_map(|k| k.strip_prefix(&prefix))
            .filter(|rest| !rest.contains('\\'))
            .map(|rest| rest.to_string())
            .collect()
    }

    pub fn exists(&self, path: &str) -> bool {
        self.keys.borrow().contains(path)
    }
}

impl RegistryHive for FakeRegistry {
    fn subkey_names(&self, node: &RegistryNode) -> Result<Vec<String>> {
        if !self.exists(&node.path) {
            return Err(RazeError::KeyNotFoundError(node.to_string()));
        }
        if self.unreadable.contains(&node.path) {
            return Err(RazeError::EnumerationError(node.to_string()));
        }
        self.listed.borrow_mut().push(node.path.clone());
        Ok(self.children(&node.path))
    }

    fn delete_key(&self, node: &RegistryNode) -> Result<()> {
        if !self.exists(&node.path) {
            return Err(RazeError::KeyNotFoundError(node.to_string()));
        }
        if self.protected.contains(&node.path) {
            return Err(RazeError::AccessError(node.to_string()));
        }
        if !self.children(&node.path).is_empty() {
            // Mirrors the host refusing to delete a key that still has children.
            return Err(RazeError::AccessError(format!("{} has sub-keys", node)));
        }
        self.keys.borrow_mut().remove(&node.path);
        self.deleted.borrow_mut().push(node.path.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeFiles {
    pub trees: RefCell<BTreeMap<PathBuf, u64>>,
    pub locked: HashSet<PathBuf>,
    pub removed: RefCell<Vec<PathBuf>>,
}

impl FakeFiles {
    pub fn with(trees: &[(&str, u64)]) -> Self {
        Self {
            trees: RefCell::new(
                trees
                    .iter()
                    .map(|(p, size)| (PathBuf::from(p), *size))
                    .collect(),
            ),
            ..Default::default()
        }
    }
}

impl FileTree for FakeFiles {
    fn remove_tree(&self, path: &Path) -> Result<()> {
        if self.locked.contains(path) {
            return Err(RazeError::PathAccessError {
                path: path.display().to_string(),
                reason: "file in use".into(),
            });
        }
        if self.trees.borrow_mut().remove(path).is_some() {
            self.removed.borrow_mut().push(path.to_path_buf());
        }
        Ok(())
    }

    fn measure(&self, path: &Path) -> Result<Option<u64>> {
        Ok(self.trees.borrow().get(path).copied())
    }
}
