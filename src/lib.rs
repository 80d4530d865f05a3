//! Internal library crate for lsr.
//!
//! The shipped application is the `lsr` binary (`src/main.rs`).
//!
//! The library exists so the binary and the integration tests share one set of modules.
//! It is not meant as a public API.

pub mod app;
pub mod config;
pub mod core;
pub mod ui;
pub mod utils;
