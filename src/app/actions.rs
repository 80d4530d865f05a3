//! Interaction modes and input editing for lsr.
//!
//! [Mode] is the single source of truth for what the browser is doing. The text being
//! typed while renaming or creating lives in an [EditBuffer] inside the variant, so it
//! exists exactly as long as that mode is active.

use std::time::{Duration, Instant};

/// The active interaction mode.
///
/// Variants:
/// * `Browse` - Default mode: move, mark, open and start the other modes.
/// * `Rename` - Typing a new name for the entry under the cursor.
/// * `DeleteConfirm` - Waiting for `y` or `n` before deleting the entry under the cursor.
/// * `Create` - Typing the name of a new file (or directory, with a trailing `/`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browse,
    Rename(EditBuffer),
    DeleteConfirm,
    Create(EditBuffer),
}

impl Mode {
    #[inline]
    pub fn is_browse(&self) -> bool {
        matches!(self, Mode::Browse)
    }

    /// The edit buffer of the Rename or Create mode.
    pub fn edit_buffer(&self) -> Option<&EditBuffer> {
        match self {
            Mode::Rename(buf) | Mode::Create(buf) => Some(buf),
            _ => None,
        }
    }

    pub fn edit_buffer_mut(&mut self) -> Option<&mut EditBuffer> {
        match self {
            Mode::Rename(buf) | Mode::Create(buf) => Some(buf),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Browse => "browse",
            Mode::Rename(_) => "rename",
            Mode::DeleteConfirm => "delete-confirm",
            Mode::Create(_) => "create",
        }
    }
}

/// Single line text input with a byte-offset cursor.
///
/// The cursor always sits on a char boundary of `text`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditBuffer {
    text: String,
    cursor: usize,
    placeholder: String,
}

impl EditBuffer {
    /// Empty buffer showing `placeholder` until the first character is typed.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            placeholder: placeholder.into(),
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consumes the buffer and returns the typed text.
    pub fn into_text(self) -> String {
        self.text
    }

    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Removes the char before the cursor.
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    /// Removes the char under the cursor.
    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Transient one-line message shown under the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    text: String,
    kind: StatusKind,
    expires_at: Option<Instant>,
}

impl Status {
    /// A `ttl` too large to represent as an instant never expires.
    pub fn new(text: impl Into<String>, kind: StatusKind, ttl: Option<Duration>) -> Self {
        Self {
            text: text.into(),
            kind,
            expires_at: ttl.and_then(|d| Instant::now().checked_add(d)),
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|t| now >= t)
    }

    #[cfg(test)]
    pub(crate) fn force_expire(&mut self) {
        self.expires_at = Some(Instant::now());
    }
}
