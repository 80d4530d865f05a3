//! Browser scenario tests for lsr
//!
//! Each test opens a temporary directory, feeds key events to [BrowserState] the way the
//! terminal loop does and then checks both the state and the file system.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lsr::app::{BrowserState, KeypressResult, Mode};
use lsr::config::Config;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::path::Path;
use tempfile::tempdir;

fn press(state: &mut BrowserState, code: KeyCode) -> KeypressResult {
    state.handle_keypress(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(state: &mut BrowserState, text: &str) {
    for c in text.chars() {
        press(state, KeyCode::Char(c));
    }
}

fn names(state: &BrowserState) -> Vec<String> {
    state
        .nav()
        .entries()
        .iter()
        .map(|e| e.name_str().into_owned())
        .collect()
}

fn cursor_name(state: &BrowserState) -> Option<String> {
    state.nav().selected_entry().map(|e| e.name_str().into_owned())
}

fn touch(dir: &Path, name: &str) -> std::io::Result<()> {
    File::create(dir.join(name)).map(|_| ())
}

#[test]
fn mark_then_delete_second_file() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    let temp = tempdir()?;
    touch(temp.path(), "a.txt")?;
    touch(temp.path(), "b.txt")?;

    let mut state = BrowserState::from_dir(&config, temp.path())?;
    assert_eq!(names(&state), ["a.txt", "b.txt"]);

    assert_eq!(press(&mut state, KeyCode::Down), KeypressResult::Consumed);
    assert_eq!(press(&mut state, KeyCode::Char(' ')), KeypressResult::Consumed);
    assert!(state.nav().is_selected(1));

    press(&mut state, KeyCode::Char('d'));
    assert_eq!(state.mode(), &Mode::DeleteConfirm);
    press(&mut state, KeyCode::Char('y'));

    assert!(state.mode().is_browse());
    assert!(!temp.path().join("b.txt").exists());
    assert_eq!(names(&state), ["a.txt"]);
    assert_eq!(state.nav().cursor(), 0);
    assert!(state.nav().selection().is_empty());
    assert_eq!(state.status().map(|s| s.text()), Some("Deleted b.txt"));
    Ok(())
}

#[test]
fn enter_subdirectory_and_come_back() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    let temp = tempdir()?;
    fs::create_dir(temp.path().join("sub"))?;
    touch(&temp.path().join("sub"), "inner.txt")?;
    touch(temp.path(), "z.txt")?;

    let mut state = BrowserState::from_dir(&config, temp.path())?;
    assert_eq!(cursor_name(&state).as_deref(), Some("sub"));

    press(&mut state, KeyCode::Enter);
    assert_eq!(state.current_dir(), temp.path().join("sub"));
    assert_eq!(names(&state), ["inner.txt"]);
    assert_eq!(state.nav().return_cursor(), Some(0));

    press(&mut state, KeyCode::Backspace);
    assert_eq!(state.current_dir(), temp.path());
    assert_eq!(cursor_name(&state).as_deref(), Some("sub"));
    assert_eq!(state.nav().return_cursor(), None);
    Ok(())
}

#[test]
fn create_file_from_typed_name() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    let temp = tempdir()?;
    touch(temp.path(), "existing.txt")?;

    let mut state = BrowserState::from_dir(&config, temp.path())?;
    press(&mut state, KeyCode::Char('a'));
    assert!(matches!(state.mode(), Mode::Create(_)));

    type_text(&mut state, "note.md");
    press(&mut state, KeyCode::Enter);

    assert!(state.mode().is_browse());
    assert!(temp.path().join("note.md").is_file());
    assert_eq!(cursor_name(&state).as_deref(), Some("note.md"));
    assert_eq!(state.status().map(|s| s.text()), Some("Created note.md"));
    Ok(())
}

#[test]
fn create_directory_with_trailing_slash() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    let temp = tempdir()?;

    let mut state = BrowserState::from_dir(&config, temp.path())?;
    press(&mut state, KeyCode::Char('a'));
    type_text(&mut state, "newdir/");
    press(&mut state, KeyCode::Enter);

    assert!(temp.path().join("newdir").is_dir());
    assert_eq!(cursor_name(&state).as_deref(), Some("newdir"));
    Ok(())
}

#[test]
fn rename_there_and_back() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    let temp = tempdir()?;
    touch(temp.path(), "A")?;
    fs::write(temp.path().join("M"), "neighbour")?;

    let mut state = BrowserState::from_dir(&config, temp.path())?;
    assert_eq!(names(&state), ["A", "M"]);

    press(&mut state, KeyCode::Char('r'));
    type_text(&mut state, "B");
    press(&mut state, KeyCode::Enter);
    assert_eq!(names(&state), ["B", "M"]);
    assert_eq!(cursor_name(&state).as_deref(), Some("B"));

    press(&mut state, KeyCode::Char('r'));
    type_text(&mut state, "A");
    press(&mut state, KeyCode::Enter);
    assert_eq!(names(&state), ["A", "M"]);
    assert_eq!(cursor_name(&state).as_deref(), Some("A"));
    assert!(temp.path().join("A").exists());
    assert!(!temp.path().join("B").exists());
    assert_eq!(fs::read_to_string(temp.path().join("M"))?, "neighbour");
    Ok(())
}

#[test]
fn rename_onto_existing_name_reports_error() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    let temp = tempdir()?;
    fs::write(temp.path().join("first.txt"), "one")?;
    fs::write(temp.path().join("second.txt"), "two")?;

    let mut state = BrowserState::from_dir(&config, temp.path())?;
    press(&mut state, KeyCode::Char('r'));
    type_text(&mut state, "second.txt");
    press(&mut state, KeyCode::Enter);

    assert!(state.mode().is_browse());
    assert!(state.status().is_some_and(|s| s.is_error()));
    assert_eq!(fs::read_to_string(temp.path().join("first.txt"))?, "one");
    assert_eq!(fs::read_to_string(temp.path().join("second.txt"))?, "two");
    assert_eq!(names(&state), ["first.txt", "second.txt"]);
    Ok(())
}

#[test]
fn cancel_leaves_everything_untouched() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    let temp = tempdir()?;
    touch(temp.path(), "keep.txt")?;

    let mut state = BrowserState::from_dir(&config, temp.path())?;

    press(&mut state, KeyCode::Char('d'));
    press(&mut state, KeyCode::Char('n'));
    press(&mut state, KeyCode::Char('r'));
    type_text(&mut state, "other");
    press(&mut state, KeyCode::Esc);
    press(&mut state, KeyCode::Char('a'));
    press(&mut state, KeyCode::Esc);

    assert!(state.mode().is_browse());
    assert!(temp.path().join("keep.txt").exists());
    assert_eq!(names(&state), ["keep.txt"]);
    assert!(state.status().is_none());
    Ok(())
}

#[test]
fn quit_key_and_hidden_entries() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    touch(temp.path(), ".hidden")?;
    touch(temp.path(), "shown")?;

    let config = Config::default();
    let state = BrowserState::from_dir(&config, temp.path())?;
    assert_eq!(names(&state), ["shown"]);

    let config = Config::parse("[general]\nshow_hidden = true")?;
    let mut state = BrowserState::from_dir(&config, temp.path())?;
    assert_eq!(names(&state), [".hidden", "shown"]);
    assert!(state.nav().snapshot().position(OsStr::new(".hidden")).is_some());

    assert_eq!(press(&mut state, KeyCode::Char('q')), KeypressResult::Quit);
    Ok(())
}
