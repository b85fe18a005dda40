//! Configuration database access backed by winreg

use crate::error::{RazeError, Result};
use crate::host::RegistryHive;
use crate::target::RegistryNode;

#[derive(Debug, Default)]
pub struct SystemRegistry;

#[cfg(windows)]
mod imp {
    use super::*;
    use crate::target::RegistryRoot;
    use std::io;
    use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_READ, KEY_WRITE};
    use winreg::RegKey;

    fn root_key(root: RegistryRoot) -> RegKey {
        RegKey::predef(match root {
            RegistryRoot::LocalMachine => HKEY_LOCAL_MACHINE,
        })
    }

    pub(super) fn map_open_error(node: &RegistryNode, err: io::Error) -> RazeError {
        match err.kind() {
            io::ErrorKind::NotFound => RazeError::KeyNotFoundError(node.to_string()),
            _ => RazeError::AccessError(format!("{}: {}", node, err)),
        }
    }

    impl RegistryHive for SystemRegistry {
        fn subkey_names(&self, node: &RegistryNode) -> Result<Vec<String>> {
            let key = root_key(node.root)
                .open_subkey_with_flags(&node.path, KEY_READ | KEY_WRITE)
                .map_err(|e| map_open_error(node, e))?;

            key.enum_keys()
                .collect::<io::Result<Vec<String>>>()
                .map_err(|e| RazeError::EnumerationError(format!("{}: {}", node, e)))
            // `key` is closed here, before the caller deletes anything.
        }

        fn delete_key(&self, node: &RegistryNode) -> Result<()> {
            root_key(node.root)
                .delete_subkey(&node.path)
                .map_err(|e| map_open_error(node, e))
        }
    }
}

#[cfg(not(windows))]
impl RegistryHive for SystemRegistry {
    fn subkey_names(&self, node: &RegistryNode) -> Result<Vec<String>> {
        Err(unsupported(node))
    }

    fn delete_key(&self, node: &RegistryNode) -> Result<()> {
        Err(unsupported(node))
    }
}

#[cfg(not(windows))]
fn unsupported(node: &RegistryNode) -> RazeError {
    RazeError::AccessError(format!(
        "{}: the registry is only available on Windows",
        node
    ))
}
