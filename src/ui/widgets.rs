//! Small single-line widgets around the entry list: path header, status line and the
//! key legend.

use crate::app::keymap::key_label;
use crate::app::{BrowserState, Mode, StatusKind};
use crate::utils::shorten_home_path;

use ratatui::text::{Line, Span};

/// The current directory, home shortened to `~`.
pub fn header_line(state: &BrowserState) -> Line<'static> {
    let theme = state.config().theme();
    Line::from(Span::styled(
        shorten_home_path(state.current_dir()),
        theme.path_style(),
    ))
}

/// The status message, if one is showing.
pub fn status_line(state: &BrowserState) -> Option<Line<'static>> {
    let status = state.status()?;
    let theme = state.config().theme();
    let style = match status.kind() {
        StatusKind::Error => theme.error_style(),
        StatusKind::Info => theme.info_style(),
    };
    Some(Line::from(Span::styled(status.text().to_string(), style)))
}

/// Key hints for the active mode, built from the configured bindings.
pub fn legend_line(state: &BrowserState) -> Line<'static> {
    let keys = state.config().keys();
    let label = |list: &[String]| key_label(list).unwrap_or_else(|| "-".to_string());

    let hints: Vec<(String, &str)> = match state.mode() {
        Mode::Browse => vec![
            (format!("{}/{}", label(keys.up()), label(keys.down())), "move"),
            (label(keys.toggle()), "select"),
            (label(keys.open()), "open"),
            (label(keys.parent()), "parent"),
            (label(keys.rename()), "rename"),
            (label(keys.delete()), "delete"),
            (label(keys.add()), "new"),
            (label(keys.quit()), "quit"),
        ],
        Mode::Rename(_) | Mode::Create(_) => vec![
            (label(keys.confirm()), "confirm"),
            (label(keys.cancel()), "cancel"),
        ],
        Mode::DeleteConfirm => vec![
            ("y".to_string(), "delete"),
            (format!("n/{}", label(keys.cancel())), "keep"),
        ],
    };

    let text = hints
        .iter()
        .map(|(key, what)| format!("{key} {what}"))
        .collect::<Vec<_>>()
        .join("  ");
    Line::from(Span::styled(text, state.config().theme().legend_style()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tempfile::tempdir;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn legend_follows_mode() -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::default();
        let dir = tempdir()?;
        std::fs::File::create(dir.path().join("f"))?;
        let mut state = BrowserState::from_dir(&config, dir.path())?;

        let browse = plain(&legend_line(&state));
        assert!(browse.contains("k/j move"), "{browse}");
        assert!(browse.contains("q quit"), "{browse}");

        state.handle_keypress(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE));
        let confirm = plain(&legend_line(&state));
        assert_eq!(confirm, "y delete  n/esc keep");
        Ok(())
    }

    #[test]
    fn status_line_only_when_set() -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::default();
        let dir = tempdir()?;
        let mut state = BrowserState::from_dir(&config, dir.path())?;
        assert!(status_line(&state).is_none());

        state.push_status("done", StatusKind::Info);
        let line = status_line(&state).ok_or("missing status")?;
        assert_eq!(plain(&line), "done");
        Ok(())
    }
}
