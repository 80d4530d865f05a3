//! Navigation state for lsr.
//!
//! Owns the current [Snapshot], the cursor, the selection and the one-level return cursor.
//! Every way of swapping the snapshot goes through here so the cursor bound and the
//! selection reset hold after each reload.

use crate::core::{FileEntry, Snapshot};
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::Path;

/// Holds the listing, cursor and selection of the browser.
///
/// Invariants: `cursor < len` when the snapshot has entries and `cursor == 0` when it is
/// empty; every index in `selection` is `< len`.
#[derive(Debug, Clone, Default)]
pub struct NavState {
    snapshot: Snapshot,
    cursor: usize,
    selection: BTreeSet<usize>,
    return_cursor: Option<usize>,
}

impl NavState {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            ..Self::default()
        }
    }

    // Getters / Accessors

    #[inline]
    pub fn current_dir(&self) -> &Path {
        self.snapshot.path()
    }

    #[inline]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    #[inline]
    pub fn entries(&self) -> &[FileEntry] {
        self.snapshot.entries()
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn selection(&self) -> &BTreeSet<usize> {
        &self.selection
    }

    #[inline]
    pub fn return_cursor(&self) -> Option<usize> {
        self.return_cursor
    }

    /// The entry under the cursor, `None` for an empty directory.
    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.snapshot.get(self.cursor)
    }

    pub fn is_selected(&self, idx: usize) -> bool {
        self.selection.contains(&idx)
    }

    // Cursor movement

    /// Moves the cursor up by one entry, stopping at the first.
    /// Returns `true` if the cursor moved.
    pub fn move_up(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Moves the cursor down by one entry, stopping at the last.
    /// Returns `true` if the cursor moved.
    pub fn move_down(&mut self) -> bool {
        if self.cursor + 1 >= self.snapshot.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Adds or removes the cursor index from the selection. No-op on an empty listing.
    pub fn toggle_selection(&mut self) -> bool {
        if self.snapshot.is_empty() {
            return false;
        }
        if !self.selection.remove(&self.cursor) {
            self.selection.insert(self.cursor);
        }
        true
    }

    // Snapshot replacement

    /// Swaps in a fresh listing, keeping the cursor index clamped to it.
    /// The selection refers to the old listing and is cleared.
    pub fn replace_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
        self.selection.clear();
        self.set_cursor(self.cursor);
    }

    /// Swaps in the listing of a child directory and remembers where the cursor was.
    pub fn enter(&mut self, snapshot: Snapshot) {
        self.return_cursor = Some(self.cursor);
        self.cursor = 0;
        self.replace_snapshot(snapshot);
    }

    /// Swaps in the listing of the parent directory and restores the remembered cursor.
    pub fn leave(&mut self, snapshot: Snapshot) {
        self.cursor = self.return_cursor.take().unwrap_or(0);
        self.replace_snapshot(snapshot);
    }

    /// Puts the cursor on `name` if the listing has it. Returns whether it was found.
    pub fn focus_name(&mut self, name: &OsStr) -> bool {
        match self.snapshot.position(name) {
            Some(idx) => {
                self.cursor = idx;
                true
            }
            None => false,
        }
    }

    pub fn set_cursor(&mut self, idx: usize) {
        self.cursor = idx.min(self.snapshot.len().saturating_sub(1));
    }
}
