// cursorrules - platform/fs.rs
//
// Filesystem primitives for installing the rules file.
//
// The rules file is written atomically (write -> sibling temp, fsync,
// rename -> final) so a failed run never leaves a truncated `.cursorrules`
// behind. Symlinked targets are resolved first so the link survives.

use crate::util::constants::TEMP_FILE_SUFFIX;
use crate::util::error::{Result, SetupError};
use std::ffi::OsString;
use std::fs::{OpenOptions, Permissions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Make sure `dir` exists, creating it and any missing ancestors.
///
/// Returns `true` when the directory had to be created.
pub fn ensure_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }

    std::fs::create_dir_all(dir).map_err(|e| SetupError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    tracing::info!(dir = %dir.display(), "Created directory");
    Ok(true)
}

/// Sibling temp path used while `path` is being written.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(TEMP_FILE_SUFFIX);
    path.with_file_name(name)
}

/// Follow `path` to the file that should actually receive the content.
///
/// A symlinked rules file (e.g. into a dotfiles repo) is written through,
/// not replaced. A dangling link resolves to where it points.
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    let is_link = match std::fs::symlink_metadata(path) {
        Ok(meta) => meta.file_type().is_symlink(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(path.to_path_buf()),
        Err(e) => return Err(e),
    };
    if !is_link {
        return Ok(path.to_path_buf());
    }

    match std::fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let link = std::fs::read_link(path)?;
            let parent = path.parent().unwrap_or_else(|| Path::new("."));
            Ok(parent.join(link))
        }
        Err(e) => Err(e),
    }
}

/// Write `contents` to a freshly created `tmp` and flush it to disk.
fn write_temp(tmp: &Path, contents: &[u8], permissions: Option<Permissions>) -> io::Result<()> {
    // A stale temp file, or a symlink planted at the temp name, is removed
    // rather than followed.
    match std::fs::remove_file(tmp) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    let mut file = OpenOptions::new().write(true).create_new(true).open(tmp)?;
    file.write_all(contents)?;
    file.sync_all()?;
    if let Some(perms) = permissions {
        file.set_permissions(perms)?;
    }
    Ok(())
}

/// Replace `path` with `contents`, all or nothing.
///
/// Symlinks are followed, and an existing file keeps its permissions. An
/// existing file this process may not write to is an error, as it would be
/// for an in-place truncate. Returns the number of bytes written. On
/// failure the previous file (if any) is untouched and the temp file is
/// removed.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<usize> {
    let write_err = |source: io::Error| SetupError::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = resolve_target(path).map_err(write_err)?;

    let permissions = match std::fs::metadata(&target) {
        Ok(meta) if meta.is_file() => {
            // Open without truncating: only the OS access check matters here.
            OpenOptions::new()
                .write(true)
                .open(&target)
                .map_err(write_err)?;
            Some(meta.permissions())
        }
        _ => None,
    };

    let tmp = temp_path_for(&target);
    tracing::debug!(
        path = %path.display(),
        target = %target.display(),
        tmp = %tmp.display(),
        "Writing via temp file"
    );

    if let Err(e) = write_temp(&tmp, contents, permissions) {
        let _ = std::fs::remove_file(&tmp);
        return Err(write_err(e));
    }

    std::fs::rename(&tmp, &target).map_err(|e| {
        // Ignore any secondary error; the primary one is what gets reported.
        let _ = std::fs::remove_file(&tmp);
        SetupError::Finalise {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "File written");
    Ok(contents.len())
}
