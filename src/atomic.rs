//! Atomic file replacement
//!
//! The task file is always rewritten whole. Writing goes to a temporary file
//! in the same directory which is then renamed over the target, so the task
//! file is either the old contents or the new contents, never a truncated
//! mix of the two.
//!
//! No locking is done: two processes racing on the same file still lose one
//! of the updates.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::Result;

/// Mode given to a task file that does not exist yet
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Upper bound on symlink hops when resolving the real target
const MAX_SYMLINK_HOPS: usize = 40;

/// Atomically write data to a file
///
/// Missing parent directories are created first. If `path` is a symlink the
/// file it points at is replaced and the link is left in place. An existing
/// file keeps its permissions.
pub fn write_atomic(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    let target = resolve_symlinks(path.as_ref())?;

    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    // Same directory as the target so the rename stays on one filesystem
    let mut temp_file = NamedTempFile::new_in(&parent)?;
    temp_file.write_all(data)?;

    match fs::metadata(&target) {
        Ok(meta) => temp_file.as_file().set_permissions(meta.permissions())?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            set_new_file_mode(temp_file.as_file())?
        }
        Err(err) => return Err(err.into()),
    }
    temp_file.as_file().sync_all()?;

    temp_file.persist(&target).map_err(|err| err.error)?;

    Ok(())
}

fn resolve_symlinks(path: &Path) -> Result<PathBuf> {
    let mut target = path.to_path_buf();
    for _ in 0..MAX_SYMLINK_HOPS {
        match fs::symlink_metadata(&target) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let link = fs::read_link(&target)?;
                target = match target.parent() {
                    Some(parent) => parent.join(link),
                    None => link,
                };
            }
            _ => return Ok(target),
        }
    }
    Err(io::Error::new(
        io::ErrorKind::Other,
        format!("too many levels of symbolic links: {}", path.display()),
    )
    .into())
}

#[cfg(unix)]
fn set_new_file_mode(file: &File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(NEW_FILE_MODE))
}

#[cfg(not(unix))]
fn set_new_file_mode(_file: &File) -> io::Result<()> {
    Ok(())
}
