//! Rendering of the browser screen.
//!
//! [render_lines] builds the whole screen as plain [Line]s without touching a terminal,
//! which is what the tests look at. [render] lays the same pieces out in a frame, scrolls
//! the entry list so the cursor stays visible and places the terminal caret in the edit
//! field.

use crate::app::{BrowserState, EditBuffer, Mode};
use crate::core::FileEntry;
use crate::ui::icons::icon_for;
use crate::ui::widgets::{header_line, legend_line, status_line};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

pub const CURSOR_SYMBOL: &str = "→";
pub const EMPTY_TEXT: &str = "[Empty]";
const CREATE_SYMBOL: &str = "+";

/// The entry list plus where the edit caret goes, if an edit field is shown.
struct ListView {
    lines: Vec<Line<'static>>,
    /// Row of the line that should stay on screen.
    focus: usize,
    /// (row, column) of the caret inside the list.
    caret: Option<(usize, usize)>,
}

/// The full screen as lines: header, entries, status and legend.
pub fn render_lines(state: &BrowserState) -> Vec<Line<'static>> {
    let mut lines = vec![header_line(state)];
    lines.extend(list_view(state).lines);
    if let Some(status) = status_line(state) {
        lines.push(status);
    }
    if state.config().display().legend() {
        lines.push(legend_line(state));
    }
    lines
}

/// Draws the browser into `frame`.
pub fn render(frame: &mut Frame, state: &BrowserState) {
    let display = state.config().display();
    let theme = state.config().theme();

    let mut constraints = vec![
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ];
    if display.legend() {
        constraints.push(Constraint::Length(1));
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    frame.render_widget(Paragraph::new(header_line(state)), chunks[0]);

    let mut block = Block::default();
    if let Some(border_type) = display.border_shape().as_border_type() {
        block = block
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(theme.border_style());
    }
    let inner = block.inner(chunks[1]);
    let view = list_view(state);
    let offset = scroll_offset(view.focus, inner.height as usize);

    frame.render_widget(
        Paragraph::new(view.lines)
            .block(block)
            .scroll((offset as u16, 0)),
        chunks[1],
    );

    if let Some((row, col)) = view.caret {
        place_caret(frame, inner, row.saturating_sub(offset), col);
    }

    if let Some(status) = status_line(state) {
        frame.render_widget(Paragraph::new(status), chunks[2]);
    }
    if display.legend() {
        frame.render_widget(Paragraph::new(legend_line(state)), chunks[3]);
    }
}

/// First visible row so that `focus` is inside a window of `height` rows.
fn scroll_offset(focus: usize, height: usize) -> usize {
    if height == 0 || focus < height {
        0
    } else {
        focus + 1 - height
    }
}

fn place_caret(frame: &mut Frame, area: Rect, row: usize, col: usize) {
    if row >= area.height as usize || col >= area.width as usize {
        return;
    }
    frame.set_cursor_position((area.x + col as u16, area.y + row as u16));
}

fn list_view(state: &BrowserState) -> ListView {
    let nav = state.nav();
    let entries = nav.entries();
    let mut lines = Vec::with_capacity(entries.len() + 1);
    let mut caret = None;
    let mut focus = nav.cursor();

    if entries.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  {EMPTY_TEXT}"),
            state.config().theme().entry_style(),
        )));
    }

    for (idx, entry) in entries.iter().enumerate() {
        let is_cursor = idx == nav.cursor();
        let mut spans = row_prefix(state, idx, is_cursor, Some(entry));

        match state.mode() {
            Mode::Rename(buf) if is_cursor => {
                let col = spans_width(&spans) + buf_caret_col(buf);
                caret = Some((lines.len(), col));
                spans.extend(edit_spans(state, buf));
            }
            Mode::DeleteConfirm if is_cursor => {
                spans.push(Span::styled(
                    format!("Delete {}? [y/n]", entry.display_name()),
                    state.config().theme().confirm_style(),
                ));
            }
            _ => spans.push(name_span(state, entry, is_cursor)),
        }
        lines.push(Line::from(spans));
    }

    if let Mode::Create(buf) = state.mode() {
        let mut spans = row_prefix(state, usize::MAX, false, None);
        let col = spans_width(&spans) + buf_caret_col(buf);
        focus = lines.len();
        caret = Some((lines.len(), col));
        spans.extend(edit_spans(state, buf));
        lines.push(Line::from(spans));
    }

    ListView {
        lines,
        focus,
        caret,
    }
}

/// Cursor column, permissions, selection marker and icon, each followed by a space.
///
/// `entry` is `None` for the synthetic create row, which gets a `+` in the cursor
/// column and blanks elsewhere.
fn row_prefix(
    state: &BrowserState,
    idx: usize,
    is_cursor: bool,
    entry: Option<&FileEntry>,
) -> Vec<Span<'static>> {
    let config = state.config();
    let theme = config.theme();
    let marker = theme.marker();
    let mut spans = Vec::with_capacity(6);

    let cursor = match entry {
        None => Span::styled(CREATE_SYMBOL, theme.edit_style()),
        Some(_) if is_cursor => Span::styled(CURSOR_SYMBOL, theme.cursor_style()),
        Some(_) => Span::raw(" "),
    };
    spans.push(cursor);
    spans.push(Span::raw(" "));

    if config.general().show_permissions() {
        let perms = entry
            .and_then(FileEntry::permissions)
            .map(str::to_string)
            .unwrap_or_else(|| " ".repeat(10));
        spans.push(Span::styled(perms, theme.legend_style()));
        spans.push(Span::raw(" "));
    }

    let marker_width = marker.icon().width().max(1);
    if entry.is_some() && state.nav().is_selected(idx) {
        spans.push(Span::styled(
            marker.icon().to_string(),
            marker.style_or_theme(),
        ));
    } else {
        spans.push(Span::raw(" ".repeat(marker_width)));
    }
    spans.push(Span::raw(" "));

    if config.display().icons()
        && let Some(entry) = entry
    {
        spans.push(Span::raw(icon_for(entry)));
        spans.push(Span::raw(" "));
    }
    spans
}

fn name_span(state: &BrowserState, entry: &FileEntry, is_cursor: bool) -> Span<'static> {
    let theme = state.config().theme();
    let name = if state.config().display().dir_marker() {
        entry.display_name().into_owned()
    } else {
        entry.name_str().into_owned()
    };
    let style = if is_cursor {
        theme.cursor_style()
    } else if entry.is_dir() {
        theme.directory_style()
    } else if entry.is_executable() {
        theme.executable_style()
    } else {
        theme.entry_style()
    };
    Span::styled(name, style)
}

/// The edit field: the typed text, or the dimmed placeholder while nothing is typed.
fn edit_spans(state: &BrowserState, buf: &EditBuffer) -> Vec<Span<'static>> {
    let theme = state.config().theme();
    if buf.is_empty() {
        vec![Span::styled(
            buf.placeholder().to_string(),
            theme.placeholder_style(),
        )]
    } else {
        vec![Span::styled(buf.text().to_string(), theme.edit_style())]
    }
}

fn buf_caret_col(buf: &EditBuffer) -> usize {
    buf.text()[..buf.cursor()].width()
}

fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| s.content.width()).sum()
}
