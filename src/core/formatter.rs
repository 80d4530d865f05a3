//! Sorting, filtering, and attribute formatting for file entries in lsr.
//!
//! The [Formatter] struct holds the rules for sorting and filtering entries,
//! based on user preferences from the lsr.toml configuration and the `-a` flag.

use crate::core::FileEntry;

use std::cmp::Ordering;
use std::fs::Metadata;

/// Formatter struct to handle sorting and filtering of file entries
/// based on user preferences.
pub struct Formatter {
    dirs_first: bool,
    show_hidden: bool,
    case_insensitive: bool,
}

impl Formatter {
    pub fn new(dirs_first: bool, show_hidden: bool, case_insensitive: bool) -> Self {
        Self {
            dirs_first,
            show_hidden,
            case_insensitive,
        }
    }

    /// Sorts the given file entries in place according to the formatter's settings.
    ///
    /// Names that compare equal case-insensitively fall back to the raw name, so the
    /// order never depends on what the platform listing returned.
    pub fn sort_entries(&self, entries: &mut [FileEntry]) {
        entries.sort_by(|a, b| {
            if self.dirs_first {
                match (a.is_dir(), b.is_dir()) {
                    (true, false) => return Ordering::Less,
                    (false, true) => return Ordering::Greater,
                    _ => {}
                }
            }
            if self.case_insensitive {
                a.lowercase_name()
                    .cmp(b.lowercase_name())
                    .then_with(|| a.name().cmp(b.name()))
            } else {
                a.name().cmp(b.name())
            }
        });
    }

    /// Filters the given file entries in place according to the formatter's settings,
    /// then sorts them.
    pub fn filter_entries(&self, entries: &mut Vec<FileEntry>) {
        if !self.show_hidden {
            entries.retain(|e| !e.is_hidden());
        }
        self.sort_entries(entries);
    }
}

/// Formats the file attributes in a unix-like format.
///
/// On Unix: Returns a string like 'drwxr-xr-x' for directories and files.
/// On Windows: Returns the attribute letters 'd', 'h', 's', 'a', 'r' or '-'.
pub fn format_attributes(meta: &Metadata) -> String {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let file_type = meta.file_type();
        let first = if file_type.is_dir() {
            'd'
        } else if file_type.is_symlink() {
            'l'
        } else {
            '-'
        };
        let mode = meta.permissions().mode();
        let mut chars = [first, '-', '-', '-', '-', '-', '-', '-', '-', '-'];
        let shifts = [6, 3, 0];
        for (i, &shift) in shifts.iter().enumerate() {
            let base = 1 + i * 3;
            if (mode >> (shift + 2)) & 1u32 != 0 {
                chars[base] = 'r';
            }
            if (mode >> (shift + 1)) & 1u32 != 0 {
                chars[base + 1] = 'w';
            }
            if (mode >> shift) & 1u32 != 0 {
                chars[base + 2] = 'x';
            }
        }
        chars.iter().collect()
    }
    #[cfg(windows)]
    {
        use std::os::windows::fs::MetadataExt;
        let attr = meta.file_attributes();
        let mut out = String::with_capacity(5);
        out.push(if attr & 0x10 != 0 {
            'd'
        } else if attr & 0x400 != 0 {
            'l'
        } else {
            '-'
        });
        out.push(if attr & 0x02 != 0 { 'h' } else { '-' });
        out.push(if attr & 0x04 != 0 { 's' } else { '-' });
        out.push(if attr & 0x20 != 0 { 'a' } else { '-' });
        out.push(if attr & 0x01 != 0 { 'r' } else { '-' });
        out
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = meta;
        String::from("----------")
    }
}
