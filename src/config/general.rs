//! The general configuration settings for lsr.
//!
//! Listing order, hidden entries, the permission column and how delete behaves.

use crate::core::LoadOptions;

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct General {
    dirs_first: bool,
    case_insensitive: bool,
    show_hidden: bool,
    show_permissions: bool,
    move_to_trash: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            dirs_first: true,
            case_insensitive: true,
            show_hidden: false,
            show_permissions: false,
            move_to_trash: false,
        }
    }
}

impl General {
    #[inline]
    pub fn dirs_first(&self) -> bool {
        self.dirs_first
    }

    #[inline]
    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub fn show_permissions(&self) -> bool {
        self.show_permissions
    }

    #[inline]
    pub fn move_to_trash(&self) -> bool {
        self.move_to_trash
    }

    /// Command-line flags can only switch these on.
    pub(crate) fn enable(&mut self, show_hidden: bool, show_permissions: bool) {
        self.show_hidden |= show_hidden;
        self.show_permissions |= show_permissions;
    }

    /// The subset that decides what a directory load returns.
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            show_hidden: self.show_hidden,
            dirs_first: self.dirs_first,
            case_insensitive: self.case_insensitive,
        }
    }
}
