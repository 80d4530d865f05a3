//! Miscellaneous utility functions for lsr.
//!
//! - [cli]: command-line parsing, help and version output
//! - [helpers]: color parsing, home path shortening and start directory resolution
//! - [logging]: the file-backed tracing subscriber

pub mod cli;
pub mod helpers;
pub mod logging;

pub use helpers::{parse_color, readable_path, resolve_start_dir, shorten_home_path};
pub use logging::init_logging;
