//! Core runtime logic for lsr.
//!
//! This module contains the non-UI pieces used by the browser:
//! - [fm]: directory listing and the [Snapshot] every reload produces (see [load_snapshot]).
//! - [formatter]: sorting, filtering and permission formatting for entries.
//! - [ops]: rename, delete and create against the file system.
//! - [error]: the [BrowserError] type shared by all of the above.
//! - [terminal]: terminal setup/teardown and the crossterm/ratatui event loop.

pub mod error;
pub mod fm;
pub mod formatter;
pub mod ops;
pub mod terminal;

pub use error::{BrowserError, BrowserResult};
pub use fm::{FileEntry, LoadOptions, Snapshot, browse_dir, load_snapshot};
pub use formatter::{Formatter, format_attributes};
pub use ops::{create_entry, delete_entry, rename_entry, resolve_child};
