//! Application state and input handling for lsr.
//!
//! - [state]: [BrowserState], the value the terminal loop owns, and [KeypressResult]
//! - [nav]: snapshot, cursor, selection and return cursor
//! - [actions]: the [Mode] sum type, the [EditBuffer] and the [Status] line
//! - [handlers]: one key handler per mode
//! - [keymap]: key strings from the config turned into actions

pub mod actions;
pub mod handlers;
pub mod keymap;
pub mod nav;
pub mod state;

pub use actions::{EditBuffer, Mode, Status, StatusKind};
pub use keymap::{Action, EditAction, Keymap};
pub use nav::NavState;
pub use state::{BrowserState, KeypressResult};
