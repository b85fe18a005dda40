//! Host primitives
//!
//! The removal logic never talks to the operating system directly. It goes
//! through these four traits, one per kind of artifact. Each call acquires
//! whatever system handle it needs and releases it before returning, on
//! success and failure alike.

pub mod fs;
pub mod process;
pub mod registry;
pub mod service;

#[cfg(test)]
pub mod fake;

pub use fs::LocalFiles;
pub use process::SystemProcesses;
pub use registry::SystemRegistry;
pub use service::SystemServices;

use crate::error::Result;
use crate::target::RegistryNode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One entry of a process snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub pid: u32,
    /// Executable file name, without its directory
    pub name: String,
}

pub trait ProcessTable {
    /// Point-in-time list of all running processes.
    fn snapshot(&self) -> Result<Vec<ProcessRecord>>;

    /// Request termination without waiting for the process to exit.
    fn terminate(&self, process: &ProcessRecord) -> Result<()>;
}

pub trait ServiceControl {
    /// Mark a service for deletion. The host may defer the actual removal
    /// until the service stops.
    fn delete_service(&self, name: &str) -> Result<()>;
}

pub trait RegistryHive {
    /// Open `node` for read/enumerate/write access and list the names of its
    /// immediate sub-keys.
    fn subkey_names(&self, node: &RegistryNode) -> Result<Vec<String>>;

    /// Delete a single key, which must have no sub-keys left.
    fn delete_key(&self, node: &RegistryNode) -> Result<()>;
}

pub trait FileTree {
    /// Remove `path` and everything beneath it. A missing path is success.
    fn remove_tree(&self, path: &Path) -> Result<()>;

    /// Total size in bytes of the files under `path`, or `None` if it does
    /// not exist.
    fn measure(&self, path: &Path) -> Result<Option<u64>>;
}

/// The set of primitives one run works against.
#[derive(Clone, Copy)]
pub struct Host<'a> {
    pub processes: &'a dyn ProcessTable,
    pub services: &'a dyn ServiceControl,
    pub registry: &'a dyn RegistryHive,
    pub files: &'a dyn FileTree,
}

/// Owns the real operating system backends.
#[derive(Default)]
pub struct SystemHost {
    processes: SystemProcesses,
    services: SystemServices,
    registry: SystemRegistry,
    files: LocalFiles,
}

impl SystemHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host(&self) -> Host<'_> {
        Host {
            processes: &self.processes,
            services: &self.services,
            registry: &self.registry,
            files: &self.files,
        }
    }
}
