//! Browser state and main controller module for lsr.
//!
//! [BrowserState] holds everything the browser knows while it runs:
//! - a reference to the loaded [Config] and the [Keymap] built from it
//! - the [NavState] (snapshot, cursor, selection, return cursor)
//! - the active [Mode] with its edit buffer
//! - the transient [Status] line
//!
//! The terminal loop owns one value of it and passes it by `&mut` to
//! [BrowserState::handle_keypress] and by `&` to the renderer.

use crate::app::actions::{Mode, Status, StatusKind};
use crate::app::keymap::{Keymap, is_interrupt};
use crate::app::nav::NavState;
use crate::config::Config;
use crate::core::{BrowserError, BrowserResult, load_snapshot};

use crossterm::event::KeyEvent;

use std::ffi::OsStr;
use std::path::Path;
use std::time::Instant;

/// Enumeration for each individual keypress result processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypressResult {
    /// The key had no effect.
    Continue,
    /// The key changed state; redraw.
    Consumed,
    Quit,
}

/// Main struct which holds the central state of lsr
pub struct BrowserState<'a> {
    pub(super) config: &'a Config,
    pub(super) keymap: Keymap,
    pub(super) nav: NavState,
    pub(super) mode: Mode,
    pub(super) status: Option<Status>,
}

impl<'a> BrowserState<'a> {
    /// Loads `path` and starts in Browse mode with the cursor on the first entry.
    ///
    /// Fails if the directory cannot be read; at startup that is fatal.
    pub fn from_dir(config: &'a Config, path: &Path) -> BrowserResult<Self> {
        let snapshot = load_snapshot(path, &config.load_options())?;
        tracing::info!(path = %path.display(), entries = snapshot.len(), "browser started");
        Ok(Self {
            config,
            keymap: Keymap::from_config(config),
            nav: NavState::new(snapshot),
            mode: Mode::Browse,
            status: None,
        })
    }

    // Getters/ accessors

    #[inline]
    pub fn config(&self) -> &Config {
        self.config
    }

    #[inline]
    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    #[inline]
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    #[inline]
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    #[inline]
    pub fn current_dir(&self) -> &Path {
        self.nav.current_dir()
    }

    /// Expires the status message. Returns `true` when something needs a redraw.
    ///
    /// Called by the event loop on every iteration.
    pub fn tick(&mut self) -> bool {
        if self
            .status
            .as_ref()
            .is_some_and(|s| s.is_expired(Instant::now()))
        {
            self.status = None;
            return true;
        }
        false
    }

    /// Central key handler
    ///
    /// Ctrl+C quits from every mode; everything else goes to the handler of the active mode.
    pub fn handle_keypress(&mut self, key: KeyEvent) -> KeypressResult {
        if is_interrupt(&key) {
            return KeypressResult::Quit;
        }

        match self.mode {
            Mode::Browse => self.handle_browse(key),
            Mode::Rename(_) => self.handle_rename(key),
            Mode::DeleteConfirm => self.handle_delete_confirm(key),
            Mode::Create(_) => self.handle_create(key),
        }
    }

    // Status line

    pub(crate) fn push_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        let ttl = self.config.display().status_duration();
        self.status = Some(Status::new(text, kind, ttl));
    }

    pub(crate) fn push_error(&mut self, err: &BrowserError) {
        tracing::warn!(error = %err, mode = self.mode.name(), "operation failed");
        self.push_status(err.to_string(), StatusKind::Error);
    }

    // Reloading

    /// Reloads the current directory and optionally moves the cursor to `focus`.
    ///
    /// The cursor keeps its index, clamped to the new listing, when `focus` is `None` or
    /// not found. The selection is cleared. On failure the old snapshot stays and an
    /// error status is shown.
    pub(crate) fn reload(&mut self, focus: Option<&OsStr>) -> bool {
        match load_snapshot(self.nav.current_dir(), &self.config.load_options()) {
            Ok(snapshot) => {
                self.nav.replace_snapshot(snapshot);
                if let Some(name) = focus {
                    self.nav.focus_name(name);
                }
                true
            }
            Err(e) => {
                self.push_error(&e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::EditBuffer;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn from_dir_sets_initial_state() -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::default();
        let temp = tempdir()?;
        File::create(temp.path().join("one.txt"))?;

        let state = BrowserState::from_dir(&config, temp.path())?;
        assert_eq!(state.current_dir(), temp.path());
        assert_eq!(state.nav().entries().len(), 1);
        assert_eq!(state.nav().cursor(), 0);
        assert!(state.mode().is_browse());
        assert!(state.status().is_none());
        Ok(())
    }

    #[test]
    fn from_dir_fails_for_missing_directory() -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::default();
        let temp = tempdir()?;
        let res = BrowserState::from_dir(&config, &temp.path().join("missing"));
        assert!(res.is_err());
        Ok(())
    }

    #[test]
    fn tick_clears_expired_status() -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::default();
        let temp = tempdir()?;
        let mut state = BrowserState::from_dir(&config, temp.path())?;

        assert!(!state.tick());
        state.push_status("hello", StatusKind::Info);
        assert!(!state.tick());

        if let Some(status) = state.status.as_mut() {
            status.force_expire();
        }
        assert!(state.tick());
        assert!(state.status().is_none());
        Ok(())
    }

    #[test]
    fn oversized_status_timeout_keeps_message() -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::parse("[display]\nstatus_secs = 9223372036854775807\n")?;
        let temp = tempdir()?;
        let mut state = BrowserState::from_dir(&config, temp.path())?;

        state.push_status("x", StatusKind::Info);
        assert!(!state.tick());
        assert_eq!(state.status().map(|s| s.text()), Some("x"));
        Ok(())
    }

    #[test]
    fn ctrl_c_quits_from_every_mode() -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::default();
        let temp = tempdir()?;
        let mut state = BrowserState::from_dir(&config, temp.path())?;
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        for mode in [
            Mode::Browse,
            Mode::Rename(EditBuffer::new("x")),
            Mode::DeleteConfirm,
            Mode::Create(EditBuffer::default()),
        ] {
            state.mode = mode;
            assert_eq!(state.handle_keypress(ctrl_c), KeypressResult::Quit);
        }
        Ok(())
    }

    #[test]
    fn unbound_key_is_ignored() -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::default();
        let temp = tempdir()?;
        let mut state = BrowserState::from_dir(&config, temp.path())?;
        let key = KeyEvent::new(KeyCode::Null, KeyModifiers::NONE);
        assert_eq!(state.handle_keypress(key), KeypressResult::Continue);
        Ok(())
    }

    #[test]
    fn reload_failure_keeps_snapshot() -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::default();
        let temp = tempdir()?;
        let gone = temp.path().join("gone");
        std::fs::create_dir(&gone)?;
        File::create(gone.join("f"))?;

        let mut state = BrowserState::from_dir(&config, &gone)?;
        std::fs::remove_dir_all(&gone)?;

        assert!(!state.reload(None));
        assert_eq!(state.nav().entries().len(), 1);
        assert!(state.status().is_some_and(|s| s.is_error()));
        Ok(())
    }
}
