//! Common file system operations with unified error handling

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Result, TrackerError};

/// Create a directory and its parents. An existing directory is success.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| {
        warn!("Creating directory {} failed: {}", path.display(), e);
        TrackerError::DirectoryCreateFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
    })?;
    debug!("Directory {} created", path.display());
    Ok(())
}

/// Write `content` to `path`, replacing any previous file, and set its mode.
///
/// The parent directory must already exist.
pub fn write_file(path: &Path, content: &str, mode: u32) -> Result<()> {
    let write_failed = |e: std::io::Error| {
        warn!("Writing {} failed: {}", path.display(), e);
        TrackerError::FileWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
    };

    fs::write(path, content).map_err(write_failed)?;
    set_mode(path, mode).map_err(write_failed)?;
    Ok(())
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> std::io::Result<()> {
    Ok(())
}

/// Remove a file. A missing file is success.
pub fn remove_file_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => {
            warn!("Removing {} failed: {}", path.display(), e);
            Err(TrackerError::FileRemoveFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
        }
    }
}

/// Remove a directory tree. A missing directory is success.
pub fn remove_dir_all_if_exists(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(TrackerError::FileRemoveFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        }),
    }
}
