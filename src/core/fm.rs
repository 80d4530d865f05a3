//! Directory listing for lsr.
//!
//! Provides the [FileEntry] struct which is used throughout lsr, the [Snapshot] of one
//! directory, and [load_snapshot], the single reload path used by navigation, create,
//! delete and rename.

use crate::core::error::{BrowserError, BrowserResult};
use crate::core::formatter::{Formatter, format_attributes};

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Represents a single entry in a directory listing.
/// Holds the name, the lowercase name used for sorting, attribute flags and the
/// permission string shown with `-l`.
/// Created and populated by [browse_dir]; never mutated after that.
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    name: Box<OsStr>,
    lowercase_name: Box<str>,
    flags: u8,
    permissions: Option<Box<str>>,
}

impl FileEntry {
    // Flag bit definitions
    pub const IS_DIR: u8 = 1 << 0;
    pub const IS_HIDDEN: u8 = 1 << 1;
    pub const IS_SYMLINK: u8 = 1 << 2;
    pub const IS_BROKEN_SYM: u8 = 1 << 3;
    pub const IS_EXECUTABLE: u8 = 1 << 4;

    #[cfg(unix)]
    const EXEC_FLAG: u32 = 0o111;

    pub fn new(name: OsString, flags: u8, permissions: Option<String>) -> Self {
        let lowercase_name = name.to_string_lossy().to_lowercase().into_boxed_str();
        FileEntry {
            name: name.into_boxed_os_str(),
            lowercase_name,
            flags,
            permissions: permissions.map(String::into_boxed_str),
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn lowercase_name(&self) -> &str {
        &self.lowercase_name
    }

    #[inline]
    pub fn permissions(&self) -> Option<&str> {
        self.permissions.as_deref()
    }

    #[inline(always)]
    pub fn flags(&self) -> u8 {
        self.flags
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.flags & Self::IS_DIR != 0
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.flags & Self::IS_HIDDEN != 0
    }

    #[inline]
    pub fn is_symlink(&self) -> bool {
        self.flags & Self::IS_SYMLINK != 0
    }

    #[inline]
    pub fn is_broken_sym(&self) -> bool {
        self.flags & Self::IS_BROKEN_SYM != 0
    }

    #[inline]
    pub fn is_executable(&self) -> bool {
        self.flags & Self::IS_EXECUTABLE != 0
    }

    /// The name as shown in the list, with a trailing separator for directories.
    pub fn display_name(&self) -> Cow<'_, str> {
        if self.is_dir() {
            let mut s = self.name_str().into_owned();
            s.push(std::path::MAIN_SEPARATOR);
            Cow::Owned(s)
        } else {
            self.name_str()
        }
    }
}

/// The ordered entries of exactly one directory at one point in time.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    path: PathBuf,
    entries: Vec<FileEntry>,
}

impl Snapshot {
    pub fn new(path: PathBuf, entries: Vec<FileEntry>) -> Self {
        Snapshot { path, entries }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&FileEntry> {
        self.entries.get(idx)
    }

    /// Index of the entry called `name`, if the snapshot has one.
    pub fn position(&self, name: &OsStr) -> Option<usize> {
        self.entries.iter().position(|e| e.name() == name)
    }
}

/// Settings that decide which entries a snapshot holds and in what order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub show_hidden: bool,
    pub dirs_first: bool,
    pub case_insensitive: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            show_hidden: false,
            dirs_first: true,
            case_insensitive: true,
        }
    }
}

/// Reads `path` and returns a filtered, sorted [Snapshot] of it.
///
/// Every reload in lsr goes through here.
pub fn load_snapshot(path: &Path, opts: &LoadOptions) -> BrowserResult<Snapshot> {
    let mut entries = browse_dir(path).map_err(|e| BrowserError::io(path, e))?;
    Formatter::new(opts.dirs_first, opts.show_hidden, opts.case_insensitive)
        .filter_entries(&mut entries);
    tracing::debug!(path = %path.display(), count = entries.len(), "directory loaded");
    Ok(Snapshot::new(path.to_path_buf(), entries))
}

/// Reads the contents of the provided directory and returns them in a vector of FileEntry.
///
/// Entries whose type or metadata cannot be read are skipped; only a failure to read the
/// directory itself is an error. The returned order is whatever the platform yields.
pub fn browse_dir(path: &Path) -> io::Result<Vec<FileEntry>> {
    let mut entries = Vec::with_capacity(64);

    for entry in fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!(dir = %path.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };

        let name = entry.file_name();
        let md = match entry.metadata() {
            Ok(md) => md,
            Err(e) => {
                tracing::debug!(
                    dir = %path.display(),
                    name = %name.to_string_lossy(),
                    error = %e,
                    "skipping entry without metadata"
                );
                continue;
            }
        };

        let ft = md.file_type();
        let mut flags = 0u8;
        if ft.is_dir() {
            flags |= FileEntry::IS_DIR;
        }

        let mut target_md = None;
        if ft.is_symlink() {
            flags |= FileEntry::IS_SYMLINK;
            match fs::metadata(entry.path()) {
                Ok(t) => {
                    if t.is_dir() {
                        flags |= FileEntry::IS_DIR;
                    }
                    target_md = Some(t);
                }
                Err(_) => flags |= FileEntry::IS_BROKEN_SYM,
            }
        }

        #[cfg(unix)]
        {
            use std::os::unix::ffi::OsStrExt;
            use std::os::unix::fs::PermissionsExt;

            let mode = target_md.as_ref().unwrap_or(&md).permissions().mode();
            if flags & FileEntry::IS_DIR == 0 && mode & FileEntry::EXEC_FLAG != 0 {
                flags |= FileEntry::IS_EXECUTABLE;
            }
            if name.as_bytes().first() == Some(&b'.') {
                flags |= FileEntry::IS_HIDDEN;
            }
        }

        #[cfg(windows)]
        {
            use std::os::windows::fs::MetadataExt;
            let _ = &target_md;
            if md.file_attributes() & 0x2 != 0 || name.to_string_lossy().starts_with('.') {
                flags |= FileEntry::IS_HIDDEN;
            }
            if let Some(ext) = Path::new(&name).extension().and_then(|e| e.to_str())
                && matches!(
                    ext.to_ascii_lowercase().as_str(),
                    "exe" | "com" | "bat" | "cmd" | "ps1"
                )
            {
                flags |= FileEntry::IS_EXECUTABLE;
            }
        }

        entries.push(FileEntry::new(name, flags, Some(format_attributes(&md))));
    }
    Ok(entries)
}
