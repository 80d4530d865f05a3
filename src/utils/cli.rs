//! Command-line argument parsing and help for lsr.
//!
//! `lsr [OPTIONS] [PATH]`. With no arguments the browser opens the current directory.
//! Short flags may be clustered (`-la`, `-al`).

use crate::config::Config;

/// Options for a browsing session taken from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub path: Option<String>,
    pub show_hidden: bool,
    pub show_permissions: bool,
}

/// What `main` should do after the arguments were handled.
#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    Run(CliOptions),
    /// Informational flag handled; exit 0.
    Exit,
    /// Bad arguments or a failed `--init`; exit 1.
    Fail,
}

/// Parsed form of the arguments before any side effect happens.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(CliOptions),
    Help,
    Version,
    Keybinds,
    Init,
}

/// Reads `std::env::args`, prints help/version/keybinds or writes the default config,
/// and tells the caller whether to run.
pub fn handle_args() -> CliAction {
    let command = match parse_args(std::env::args().skip(1)) {
        Ok(cmd) => cmd,
        Err(msg) => {
            eprintln!("[lsr] Error: {msg}");
            eprintln!("Try --help for available options");
            return CliAction::Fail;
        }
    };

    match command {
        Command::Run(opts) => CliAction::Run(opts),
        Command::Help => {
            print_help();
            CliAction::Exit
        }
        Command::Version => {
            print_version();
            CliAction::Exit
        }
        Command::Keybinds => {
            println!("{KEYBINDS_TEXT}");
            CliAction::Exit
        }
        Command::Init => {
            let path = Config::default_path();
            match Config::generate_default(&path) {
                Ok(()) => {
                    println!("Default config written to {}", path.display());
                    CliAction::Exit
                }
                Err(e) => {
                    eprintln!("[lsr] Error: {}: {e}", path.display());
                    CliAction::Fail
                }
            }
        }
    }
}

/// Parses the arguments after the program name.
///
/// Informational flags win as soon as they are seen. Returns the error message for
/// unknown flags or a second path.
pub fn parse_args<I, S>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut opts = CliOptions::default();

    for arg in args {
        let arg: String = arg.into();
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-v" | "--version" => return Ok(Command::Version),
            "--keybinds" => return Ok(Command::Keybinds),
            "--init" => return Ok(Command::Init),
            flag if flag.starts_with("--") => return Err(format!("unknown option '{flag}'")),
            flag if flag.starts_with('-') && flag.len() > 1 => {
                for c in flag[1..].chars() {
                    match c {
                        'l' => opts.show_permissions = true,
                        'a' => opts.show_hidden = true,
                        _ => return Err(format!("unknown option '-{c}' in '{flag}'")),
                    }
                }
            }
            path => {
                if opts.path.is_some() {
                    return Err("only one PATH may be given".to_string());
                }
                opts.path = Some(path.to_string());
            }
        }
    }
    Ok(Command::Run(opts))
}

fn print_version() {
    println!("lsr {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"lsr - A small keyboard-driven directory browser

USAGE:
  lsr [OPTIONS] [PATH]

PATH:
  Directory to open (defaults to current directory)

OPTIONS:
  -l                      Show permissions next to each entry
  -a                      Show hidden entries (dotfiles)
                          Short flags combine: -la, -al
      --init              Write the default configuration file
      --keybinds          Display the default keybinds
  -h, --help              Print help information
  -v, --version           Display the installed version of lsr

ENVIRONMENT:
  LSR_CONFIG              Override the default config path
  LSR_LOG                 Log filter, e.g. "debug" or "lsr=trace"
"#
    );
}

const KEYBINDS_TEXT: &str = r##"
=========================
 Key Bindings
=========================
[keys]
  quit                      ["q"]            (Ctrl+C always quits)
  up                        ["k", "up"]
  down                      ["j", "down"]
  toggle                    ["space"]
  open                      ["enter"]
  parent                    ["backspace"]
  rename                    ["r"]
  delete                    ["d"]            (then "y" to confirm, "n" to cancel)
  add                       ["a"]            (end the name with "/" for a directory)
  confirm                   ["enter"]        (rename / create)
  cancel                    ["esc"]          (rename / create / delete)

  Syntax Reference:
    Modifiers: <c-x> (Ctrl), <m-x>/<a-x> (Alt/Meta), <s-x> (Shift)
    Standard:  ctrl+x, alt+x, shift+x
    Special:   " ", "space", "backspace", "enter", "esc", "tab", "up", "down"
"##;
