//! File operations for lsr: rename, delete and create inside the current directory.
//!
//! Each operation resolves the absolute target by joining the directory with a user
//! supplied name, performs a single file-system call and returns [BrowserError] on failure.
//! None of them touch the snapshot; the caller reloads through
//! [load_snapshot](crate::core::load_snapshot) afterwards.

use crate::core::error::{BrowserError, BrowserResult};

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Joins `dir` with `name` after checking that `name` names a single entry.
///
/// Rejects empty names, `.` and `..`, and anything containing a path separator.
pub fn resolve_child(dir: &Path, name: &OsStr) -> BrowserResult<PathBuf> {
    let joined = dir.join(name);
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) if part == name => Ok(joined),
        (None, _) => Err(BrowserError::path(joined, "name is empty")),
        (Some(Component::CurDir | Component::ParentDir), None) => {
            Err(BrowserError::path(joined, "'.' and '..' are not entry names"))
        }
        _ => Err(BrowserError::path(
            joined,
            "name must not contain a path separator",
        )),
    }
}

/// Renames `old` to `new`, both relative to `dir`.
///
/// Refuses to replace an existing entry. Returns the new absolute path.
pub fn rename_entry(dir: &Path, old: &OsStr, new: &OsStr) -> BrowserResult<PathBuf> {
    let from = resolve_child(dir, old)?;
    let to = resolve_child(dir, new)?;

    if from == to {
        return Ok(to);
    }

    // symlink_metadata so a dangling link still counts as taken
    if fs::symlink_metadata(&to).is_ok() && !same_entry_different_case(&from, &to) {
        let err = io::Error::new(io::ErrorKind::AlreadyExists, "target already exists");
        tracing::warn!(from = %from.display(), to = %to.display(), "rename refused");
        return Err(BrowserError::io(to, err));
    }

    match fs::rename(&from, &to) {
        Ok(()) => {
            tracing::info!(from = %from.display(), to = %to.display(), "renamed");
            Ok(to)
        }
        Err(e) => {
            tracing::warn!(from = %from.display(), error = %e, "rename failed");
            Err(BrowserError::io(from, e))
        }
    }
}

/// Deletes `name` inside `dir`. Directories are removed recursively.
///
/// With `to_trash` the entry is handed to the system trash instead.
pub fn delete_entry(dir: &Path, name: &OsStr, to_trash: bool) -> BrowserResult<PathBuf> {
    let path = resolve_child(dir, name)?;

    let res = if to_trash {
        trash::delete(&path).map_err(|e| BrowserError::Trash {
            path: path.clone(),
            reason: e.to_string(),
        })
    } else {
        let md = fs::symlink_metadata(&path).map_err(|e| BrowserError::io(&path, e))?;
        let removed = if md.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        removed.map_err(|e| BrowserError::io(&path, e))
    };

    match res {
        Ok(()) => {
            tracing::info!(path = %path.display(), to_trash, "deleted");
            Ok(path)
        }
        Err(e) => {
            tracing::warn!(error = %e, "delete failed");
            Err(e)
        }
    }
}

/// Creates an empty file called `name` inside `dir`, or a directory when `name` ends
/// with a path separator.
///
/// Never truncates an existing file. Returns the created entry's name.
pub fn create_entry(dir: &Path, name: &str) -> BrowserResult<OsString> {
    let (name, is_dir) = match name.strip_suffix(['/', std::path::MAIN_SEPARATOR]) {
        Some(stripped) => (stripped, true),
        None => (name, false),
    };
    let path = resolve_child(dir, OsStr::new(name))?;

    let res = if is_dir {
        fs::create_dir(&path)
    } else {
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map(|_| ())
    };

    match res {
        Ok(()) => {
            tracing::info!(path = %path.display(), is_dir, "created");
            Ok(OsString::from(name))
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "create failed");
            Err(BrowserError::io(path, e))
        }
    }
}

/// On case-insensitive file systems `a.txt` -> `A.txt` finds the target "existing"
/// because it is the source itself.
///
/// Only names that differ by ASCII case qualify, and links are never followed: a symlink
/// and the file it points to are different entries.
fn same_entry_different_case(from: &Path, to: &Path) -> bool {
    let (Some(a), Some(b)) = (from.file_name(), to.file_name()) else {
        return false;
    };
    if a == b || !a.eq_ignore_ascii_case(b) {
        return false;
    }

    match (fs::symlink_metadata(from), fs::symlink_metadata(to)) {
        (Ok(from_md), Ok(to_md)) => same_identity(&from_md, &to_md),
        _ => false,
    }
}

#[cfg(unix)]
fn same_identity(a: &fs::Metadata, b: &fs::Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    (a.dev(), a.ino()) == (b.dev(), b.ino())
}

// Two case variants of one name in one directory can only both exist on a
// case-insensitive file system, where they are the same entry.
#[cfg(not(unix))]
fn same_identity(a: &fs::Metadata, b: &fs::Metadata) -> bool {
    a.file_type() == b.file_type() && a.len() == b.len()
}
