//! Directory removal action

use crate::error::{RazeError, Result};
use crate::host::FileTree;
use std::path::Path;
use tracing::debug;

/// Remove the directory tree at `path`, read-only entries included.
///
/// A path that does not exist is not an error. A failure partway leaves
/// whatever was not yet removed in place and is reported as
/// `PathAccessError`.
pub fn remove_directory(files: &dyn FileTree, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(RazeError::InvalidTarget(
            "directory path must not be empty".to_string(),
        ));
    }

    files.remove_tree(path)?;
    debug!(path = %path.display(), "directory removed");
    Ok(())
}
