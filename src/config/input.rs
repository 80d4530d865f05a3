//! Input configuration options for lsr
//!
//! Key lists for every action, read from the `[keys]` table of lsr.toml.
//! The strings are parsed into key events by [crate::app::keymap].

use serde::Deserialize;

/// Input configuration options of all actions
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Keys {
    quit: Vec<String>,
    up: Vec<String>,
    down: Vec<String>,
    toggle: Vec<String>,
    open: Vec<String>,
    parent: Vec<String>,
    rename: Vec<String>,
    delete: Vec<String>,
    add: Vec<String>,
    confirm: Vec<String>,
    cancel: Vec<String>,
}

macro_rules! accessor {
    ($($name:ident),+ $(,)?) => {
        impl Keys {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(
    quit, up, down, toggle, open, parent, rename, delete, add, confirm, cancel,
);

impl Default for Keys {
    fn default() -> Self {
        Keys {
            quit: vec!["q".into()],
            up: vec!["k".into(), "Up".into()],
            down: vec!["j".into(), "Down".into()],
            toggle: vec!["Space".into()],
            open: vec!["Enter".into()],
            parent: vec!["Backspace".into()],
            rename: vec!["r".into()],
            delete: vec!["d".into()],
            add: vec!["a".into()],
            confirm: vec!["Enter".into()],
            cancel: vec!["Esc".into()],
        }
    }
}
