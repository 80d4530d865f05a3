//! UI rendering for lsr.
//!
//! - [render]: the screen as lines and the frame layout
//! - [widgets]: header, status line and key legend
//! - [icons]: emoji icons per entry

pub mod icons;
pub mod render;
pub mod widgets;

pub use render::{render, render_lines};
