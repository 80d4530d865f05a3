//! Input handler methods for lsr.
//!
//! One handler per [Mode] variant. Each handler only touches the state its mode owns;
//! a key that means nothing in the active mode is a no-op.

use crate::app::actions::{EditBuffer, Mode, StatusKind};
use crate::app::keymap::{Action, EditAction, FileAction, NavAction, SystemAction};
use crate::app::state::{BrowserState, KeypressResult};
use crate::core::{create_entry, delete_entry, load_snapshot, rename_entry, resolve_child};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::ffi::{OsStr, OsString};
use std::mem;

const CREATE_PLACEHOLDER: &str = "new name, end with / for a directory";

impl<'a> BrowserState<'a> {
    // Mode handlers

    /// Browse mode: movement, selection, navigation and entering the other modes.
    pub(super) fn handle_browse(&mut self, key: KeyEvent) -> KeypressResult {
        let Some(action) = self.keymap.lookup(key) else {
            return KeypressResult::Continue;
        };

        match action {
            Action::System(SystemAction::Quit) => KeypressResult::Quit,
            Action::Nav(nav_act) => self.handle_nav_action(nav_act),
            Action::File(file_act) => self.handle_file_action(file_act),
        }
    }

    /// Rename mode: edit the buffer, confirm renames the entry under the cursor.
    pub(super) fn handle_rename(&mut self, key: KeyEvent) -> KeypressResult {
        match self.keymap.lookup_edit(key) {
            Some(EditAction::Confirm) => {
                if let Mode::Rename(buf) = mem::take(&mut self.mode) {
                    self.confirm_rename(buf);
                }
                KeypressResult::Consumed
            }
            Some(EditAction::Cancel) => {
                self.mode = Mode::Browse;
                KeypressResult::Consumed
            }
            None => self.handle_text_input(key),
        }
    }

    /// Create mode: edit the buffer, confirm creates the entry.
    pub(super) fn handle_create(&mut self, key: KeyEvent) -> KeypressResult {
        match self.keymap.lookup_edit(key) {
            Some(EditAction::Confirm) => {
                if let Mode::Create(buf) = mem::take(&mut self.mode) {
                    self.confirm_create(buf);
                }
                KeypressResult::Consumed
            }
            Some(EditAction::Cancel) => {
                self.mode = Mode::Browse;
                KeypressResult::Consumed
            }
            None => self.handle_text_input(key),
        }
    }

    /// DeleteConfirm mode: `y`/`Y` deletes, `n`/`N` or cancel returns to Browse.
    pub(super) fn handle_delete_confirm(&mut self, key: KeyEvent) -> KeypressResult {
        match key.code {
            KeyCode::Char('y' | 'Y') => {
                self.mode = Mode::Browse;
                self.confirm_delete();
                KeypressResult::Consumed
            }
            KeyCode::Char('n' | 'N') => {
                self.mode = Mode::Browse;
                KeypressResult::Consumed
            }
            _ if self.keymap.lookup_edit(key) == Some(EditAction::Cancel) => {
                self.mode = Mode::Browse;
                KeypressResult::Consumed
            }
            _ => KeypressResult::Continue,
        }
    }

    /// Editing keys shared by Rename and Create.
    fn handle_text_input(&mut self, key: KeyEvent) -> KeypressResult {
        let Some(buf) = self.mode.edit_buffer_mut() else {
            return KeypressResult::Continue;
        };

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                buf.insert(c)
            }
            KeyCode::Backspace => buf.backspace(),
            KeyCode::Delete => buf.delete(),
            KeyCode::Left => buf.move_left(),
            KeyCode::Right => buf.move_right(),
            KeyCode::Home => buf.home(),
            KeyCode::End => buf.end(),
            _ => return KeypressResult::Continue,
        }
        KeypressResult::Consumed
    }

    // Browse actions

    fn handle_nav_action(&mut self, action: NavAction) -> KeypressResult {
        let changed = match action {
            NavAction::Up => self.nav.move_up(),
            NavAction::Down => self.nav.move_down(),
            NavAction::ToggleSelection => self.nav.toggle_selection(),
            NavAction::Open => self.open_selected(),
            NavAction::Parent => self.go_parent(),
        };
        if changed {
            KeypressResult::Consumed
        } else {
            KeypressResult::Continue
        }
    }

    fn handle_file_action(&mut self, action: FileAction) -> KeypressResult {
        match action {
            FileAction::Create => {
                self.mode = Mode::Create(EditBuffer::new(CREATE_PLACEHOLDER));
            }
            FileAction::Rename => {
                let Some(entry) = self.nav.selected_entry() else {
                    return KeypressResult::Continue;
                };
                self.mode = Mode::Rename(EditBuffer::new(entry.name_str()));
            }
            FileAction::Delete => {
                if self.nav.selected_entry().is_none() {
                    return KeypressResult::Continue;
                }
                self.mode = Mode::DeleteConfirm;
            }
        }
        KeypressResult::Consumed
    }

    /// Opens the directory under the cursor. Files are left alone.
    fn open_selected(&mut self) -> bool {
        let Some(entry) = self.nav.selected_entry() else {
            return false;
        };
        if !entry.is_dir() {
            return false;
        }

        let target = resolve_child(self.nav.current_dir(), entry.name())
            .and_then(|path| load_snapshot(&path, &self.config.load_options()));
        match target {
            Ok(snapshot) => {
                tracing::debug!(path = %snapshot.path().display(), "entered directory");
                self.nav.enter(snapshot);
            }
            Err(e) => self.push_error(&e),
        }
        true
    }

    /// Goes to the parent directory. No-op at the file-system root.
    fn go_parent(&mut self) -> bool {
        let Some(parent) = self.nav.current_dir().parent() else {
            return false;
        };

        match load_snapshot(parent, &self.config.load_options()) {
            Ok(snapshot) => {
                tracing::debug!(path = %snapshot.path().display(), "left directory");
                self.nav.leave(snapshot);
            }
            Err(e) => self.push_error(&e),
        }
        true
    }

    // Confirmations

    fn confirm_rename(&mut self, buf: EditBuffer) {
        if buf.is_empty() {
            return;
        }
        let Some(entry) = self.nav.selected_entry() else {
            return;
        };
        let old = entry.name().to_os_string();
        let new = OsString::from(buf.into_text());

        match rename_entry(self.nav.current_dir(), &old, &new) {
            Ok(_) => {
                if self.reload(Some(new.as_os_str())) {
                    let note = self.hidden_note(&new);
                    self.push_status(
                        format!(
                            "Renamed {} to {}{note}",
                            old.to_string_lossy(),
                            new.to_string_lossy()
                        ),
                        StatusKind::Info,
                    );
                }
            }
            Err(e) => self.push_error(&e),
        }
    }

    fn confirm_delete(&mut self) {
        let Some(entry) = self.nav.selected_entry() else {
            return;
        };
        let name = entry.name().to_os_string();
        let to_trash = self.config.general().move_to_trash();

        match delete_entry(self.nav.current_dir(), &name, to_trash) {
            Ok(_) => {
                if self.reload(None) {
                    let verb = if to_trash { "Trashed" } else { "Deleted" };
                    self.push_status(
                        format!("{verb} {}", name.to_string_lossy()),
                        StatusKind::Info,
                    );
                }
            }
            Err(e) => self.push_error(&e),
        }
    }

    fn confirm_create(&mut self, buf: EditBuffer) {
        if buf.is_empty() {
            return;
        }
        match create_entry(self.nav.current_dir(), buf.text()) {
            Ok(name) => {
                if self.reload(Some(name.as_os_str())) {
                    let note = self.hidden_note(&name);
                    self.push_status(
                        format!("Created {}{note}", buf.text()),
                        StatusKind::Info,
                    );
                }
            }
            Err(e) => self.push_error(&e),
        }
    }

    /// Suffix for a status message about `name` when the listing filters it out.
    fn hidden_note(&self, name: &OsStr) -> &'static str {
        if self.nav.snapshot().position(name).is_none() {
            " (hidden)"
        } else {
            ""
        }
    }
}
