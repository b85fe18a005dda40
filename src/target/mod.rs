//! Target identities
//!
//! A target profile names everything that belongs to one piece of software:
//! the executable name prefix of its processes, its services, its registry
//! subtrees and its directories. Profiles are compiled in and never change
//! during a run.

mod profiles;

pub use profiles::{builtin_profile_names, zscaler};

use crate::error::{RazeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Predefined root of the configuration database. Removal only ever works
/// on the machine-wide configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistryRoot {
    LocalMachine,
}

impl RegistryRoot {
    pub fn short_name(&self) -> &'static str {
        match self {
            RegistryRoot::LocalMachine => "HKLM",
        }
    }
}

/// A key in the configuration database, addressed relative to its root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegistryNode {
    pub root: RegistryRoot,
    pub path: String,
}

impl RegistryNode {
    pub fn new(root: RegistryRoot, path: impl Into<String>) -> Self {
        Self {
            root,
            path: path.into(),
        }
    }

    pub fn local_machine(path: impl Into<String>) -> Self {
        Self::new(RegistryRoot::LocalMachine, path)
    }

    /// The sub-key `name` under the same root.
    pub fn child(&self, name: &str) -> Self {
        let path = if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}\\{}", self.path.trim_end_matches('\\'), name)
        };
        Self::new(self.root, path)
    }
}

impl fmt::Display for RegistryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\\{}", self.root.short_name(), self.path)
    }
}

/// Everything to remove for one piece of software.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetProfile {
    /// Catalogue name used on the command line
    pub name: String,
    /// Case-sensitive prefix of the executable file names to terminate
    pub process_prefix: String,
    /// Services to delete, in order
    pub services: Vec<String>,
    /// Registry subtrees to delete, in order
    pub registry_keys: Vec<RegistryNode>,
    /// Directory trees to delete, in order
    pub directories: Vec<PathBuf>,
}

impl TargetProfile {
    /// Look up a compiled-in profile by name (case-insensitive).
    pub fn builtin(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "zscaler" => Ok(zscaler()),
            _ => Err(RazeError::InvalidTarget(format!(
                "unknown profile '{}' (available: {})",
                name,
                builtin_profile_names().join(", ")
            ))),
        }
    }

    /// Reject profiles that would match too much or address nothing.
    pub fn validate(&self) -> Result<()> {
        if self.process_prefix.is_empty() {
            return Err(RazeError::InvalidTarget(format!(
                "{}: process prefix must not be empty",
                self.name
            )));
        }
        if let Some(pos) = self.services.iter().position(|s| s.trim().is_empty()) {
            return Err(RazeError::InvalidTarget(format!(
                "{}: service #{} has an empty name",
                self.name,
                pos + 1
            )));
        }
        if let Some(node) = self
            .registry_keys
            .iter()
            .find(|k| k.path.trim_matches('\\').trim().is_empty())
        {
            // An empty path would address the root itself.
            return Err(RazeError::InvalidTarget(format!(
                "{}: registry key {} addresses a whole root",
                self.name, node
            )));
        }
        if let Some(pos) = self
            .directories
            .iter()
            .position(|d| d.as_os_str().is_empty())
        {
            return Err(RazeError::InvalidTarget(format!(
                "{}: directory #{} is empty",
                self.name,
                pos + 1
            )));
        }
        Ok(())
    }
}
