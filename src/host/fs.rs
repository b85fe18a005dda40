//! Directory tree removal on the local filesystem

use crate::error::{RazeError, Result};
use crate::host::FileTree;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Default)]
pub struct LocalFiles;

impl FileTree for LocalFiles {
    fn remove_tree(&self, path: &Path) -> Result<()> {
        let metadata = match fs::symlink_metadata(path) {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(path_error(path, e)),
        };

        // Read-only entries would otherwise stop the removal halfway.
        clear_readonly(path, &metadata).map_err(|e| path_error(path, e))?;

        let removed = if metadata.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };

        match removed {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(path_error(path, e)),
        }
    }

    fn measure(&self, path: &Path) -> Result<Option<u64>> {
        match fs::symlink_metadata(path) {
            Ok(metadata) => tree_size(path, &metadata)
                .map(Some)
                .map_err(|e| path_error(path, e)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(path_error(path, e)),
        }
    }
}

fn path_error(path: &Path, err: io::Error) -> RazeError {
    RazeError::PathAccessError {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

fn clear_readonly(path: &Path, metadata: &fs::Metadata) -> io::Result<()> {
    if metadata.file_type().is_symlink() {
        return Ok(());
    }

    make_writable(path, metadata)?;

    if metadata.is_dir() {
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let child = entry.path();
            clear_readonly(&child, &fs::symlink_metadata(&child)?)?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn make_writable(path: &Path, metadata: &fs::Metadata) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = metadata.permissions();
    if perms.mode() & 0o200 != 0 {
        return Ok(());
    }
    perms.set_mode(perms.mode() | 0o200);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn make_writable(path: &Path, metadata: &fs::Metadata) -> io::Result<()> {
    let mut perms = metadata.permissions();
    if !perms.readonly() {
        return Ok(());
    }
    #[allow(clippy::permissions_set_readonly_false)]
    perms.set_readonly(false);
    fs::set_permissions(path, perms)
}

fn tree_size(path: &Path, metadata: &fs::Metadata) -> io::Result<u64> {
    if !metadata.is_dir() {
        return Ok(metadata.len());
    }

    let mut total = 0;
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let child = entry.path();
        total += tree_size(&child, &fs::symlink_metadata(&child)?)?;
    }
    Ok(total)
}
