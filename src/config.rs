//! Configuration for lsr.
//!
//! [Config] is read once at startup from `lsr.toml` (see [Config::default_path]) and then
//! shared by reference with the browser state and the renderer.
//!
//! - [general]: listing order, hidden entries, permissions column, trash
//! - [display]: icons, directory marker, legend, status timeout, border
//! - [theme]: colors and the selection marker
//! - [input]: key lists per action
//! - [log]: log level and directory

pub mod display;
pub mod general;
pub mod input;
pub mod load;
pub mod log;
pub mod theme;

pub use display::{BorderShape, Display};
pub use general::General;
pub use input::Keys;
pub use load::Config;
pub use log::Log;
pub use theme::Theme;
