//! UI tests for lsr
//!
//! These tests render [BrowserState] into plain lines and into a ratatui test backend and
//! check what a user would see in each mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lsr::app::BrowserState;
use lsr::config::Config;
use lsr::ui::{render, render_lines};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::text::Line;
use std::fs::{self, File};
use tempfile::tempdir;

fn plain_config() -> Result<Config, toml::de::Error> {
    Config::parse("[display]\nicons = false\nborder_shape = \"none\"")
}

fn text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

fn screen(state: &BrowserState) -> Vec<String> {
    render_lines(state).iter().map(text).collect()
}

fn press(state: &mut BrowserState, code: KeyCode) {
    state.handle_keypress(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn cursor_marker_and_selection() -> Result<(), Box<dyn std::error::Error>> {
    let config = plain_config()?;
    let temp = tempdir()?;
    File::create(temp.path().join("a.txt"))?;
    File::create(temp.path().join("b.txt"))?;
    fs::create_dir(temp.path().join("dir"))?;

    let mut state = BrowserState::from_dir(&config, temp.path())?;
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Char(' '));

    let lines = screen(&state);
    assert!(lines[1].starts_with(' '), "{:?}", lines[1]);
    assert!(lines[1].ends_with("dir/"), "{:?}", lines[1]);
    assert!(lines[2].starts_with("→"), "{:?}", lines[2]);
    assert!(lines[2].contains('✓'), "{:?}", lines[2]);
    assert!(lines[2].ends_with("a.txt"));
    assert!(!lines[3].contains('✓'));
    assert!(lines.last().is_some_and(|l| l.contains("quit")));
    Ok(())
}

#[test]
fn empty_directory_shows_placeholder_row() -> Result<(), Box<dyn std::error::Error>> {
    let config = plain_config()?;
    let temp = tempdir()?;
    let state = BrowserState::from_dir(&config, temp.path())?;

    let lines = screen(&state);
    assert_eq!(lines[1].trim(), "[Empty]");
    Ok(())
}

#[test]
fn delete_prompt_replaces_row() -> Result<(), Box<dyn std::error::Error>> {
    let config = plain_config()?;
    let temp = tempdir()?;
    File::create(temp.path().join("doomed.txt"))?;

    let mut state = BrowserState::from_dir(&config, temp.path())?;
    press(&mut state, KeyCode::Char('d'));

    let lines = screen(&state);
    assert!(lines[1].ends_with("Delete doomed.txt? [y/n]"), "{:?}", lines[1]);
    Ok(())
}

#[test]
fn rename_shows_placeholder_then_typed_text() -> Result<(), Box<dyn std::error::Error>> {
    let config = plain_config()?;
    let temp = tempdir()?;
    File::create(temp.path().join("old.txt"))?;

    let mut state = BrowserState::from_dir(&config, temp.path())?;
    press(&mut state, KeyCode::Char('r'));
    assert!(screen(&state)[1].ends_with("old.txt"));

    press(&mut state, KeyCode::Char('n'));
    press(&mut state, KeyCode::Char('e'));
    press(&mut state, KeyCode::Char('w'));
    let lines = screen(&state);
    assert!(lines[1].ends_with("new"), "{:?}", lines[1]);
    assert!(lines.last().is_some_and(|l| l.contains("esc cancel")));
    Ok(())
}

#[test]
fn create_row_is_appended() -> Result<(), Box<dyn std::error::Error>> {
    let config = plain_config()?;
    let temp = tempdir()?;
    File::create(temp.path().join("one"))?;

    let mut state = BrowserState::from_dir(&config, temp.path())?;
    press(&mut state, KeyCode::Char('a'));

    let lines = screen(&state);
    assert!(lines[2].starts_with('+'), "{:?}", lines[2]);
    assert!(lines[2].contains("end with /"));
    Ok(())
}

#[test]
fn permissions_column_and_no_legend() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse(
        "[general]\nshow_permissions = true\n[display]\nicons = false\nlegend = false",
    )?;
    let temp = tempdir()?;
    fs::create_dir(temp.path().join("d"))?;

    let state = BrowserState::from_dir(&config, temp.path())?;
    let lines = screen(&state);
    assert_eq!(lines.len(), 2);
    #[cfg(unix)]
    assert!(lines[1].contains("drwx"), "{:?}", lines[1]);
    Ok(())
}

#[test]
fn frame_render_scrolls_to_cursor() -> Result<(), Box<dyn std::error::Error>> {
    let config = plain_config()?;
    let temp = tempdir()?;
    for i in 0..20 {
        File::create(temp.path().join(format!("file{i:02}")))?;
    }

    let mut state = BrowserState::from_dir(&config, temp.path())?;
    for _ in 0..15 {
        press(&mut state, KeyCode::Down);
    }

    let mut terminal = Terminal::new(TestBackend::new(40, 8))?;
    terminal.draw(|f| render(f, &state))?;

    let buffer = terminal.backend().buffer();
    let shown: String = buffer.content.iter().map(|c| c.symbol()).collect();
    assert!(shown.contains("file15"));
    assert!(!shown.contains("file00"));
    Ok(())
}
