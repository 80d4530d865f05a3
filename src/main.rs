//! main.rs
//! Entry point for lsr

use lsr::app::BrowserState;
use lsr::config::Config;
use lsr::core::terminal;
use lsr::utils::cli::{CliAction, handle_args};
use lsr::utils::{init_logging, resolve_start_dir};

use std::process::ExitCode;

fn main() -> ExitCode {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        eprintln!("\n[lsr] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let opts = match handle_args() {
        CliAction::Run(opts) => opts,
        CliAction::Exit => return ExitCode::SUCCESS,
        CliAction::Fail => return ExitCode::FAILURE,
    };

    let mut config = Config::load();
    config.apply_cli(&opts);
    let _log_guard = init_logging(config.log());

    let start = match resolve_start_dir(opts.path.as_deref()) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("[lsr] Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut state = match BrowserState::from_dir(&config, &start) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("[lsr] Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match terminal::run_terminal(&mut state) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "terminal failure");
            eprintln!("[lsr] Error: {e}");
            ExitCode::FAILURE
        }
    }
}
