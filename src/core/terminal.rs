//! Terminal rendering and event loop for lsr.
//!
//! Handles setup/teardown of raw mode, alternate screen, redraws,
//! and events (keypress, resize) to the browser state.

use crate::app::{BrowserState, KeypressResult};
use crate::ui;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use std::{io, time::Duration};

/// Initializes the terminal in raw mode and alternate screen and runs the main event loop.
///
/// Blocks until quit. Returns an std::io::Error if terminal setup or teardown fails.
pub fn run_terminal(state: &mut BrowserState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, state);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    result
}

/// Main event loop: draws, polls for one event and hands it to the state.
/// Returns on quit.
fn event_loop<B: Backend>(terminal: &mut Terminal<B>, state: &mut BrowserState) -> io::Result<()>
where
    io::Error: From<<B as Backend>::Error>,
{
    terminal.draw(|f| ui::render(f, state))?;

    loop {
        if state.tick() {
            terminal.draw(|f| ui::render(f, state))?;
        }

        if !event::poll(Duration::from_millis(16))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let KeypressResult::Quit = state.handle_keypress(key) {
                    tracing::info!("quit requested");
                    break;
                }
                terminal.draw(|f| ui::render(f, state))?;
            }
            Event::Resize(_, _) => {
                terminal.draw(|f| ui::render(f, state))?;
            }
            _ => {}
        }
    }
    Ok(())
}
