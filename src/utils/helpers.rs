//! Helpers for lsr.
//!
//! - Color parsing from names or hex codes for the theme
//! - Displaying the home directory as "~" in the header
//! - Resolving the starting directory given on the command line

use crate::core::{BrowserError, BrowserResult};
use ratatui::style::Color;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Parses a string (color name or hex) into a ratatui::style::Color
///
/// Supports standard names (red, green, etc.) as well as hex values (#RRGGBB or #RGB).
/// Anything else falls back to [Color::Reset].
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        _ => s
            .strip_prefix('#')
            .and_then(parse_hex)
            .unwrap_or(Color::Reset),
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let expanded: String = match hex.len() {
        6 => hex.to_string(),
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        _ => return None,
    };
    let rgb = u32::from_str_radix(&expanded, 16).ok()?;
    Some(Color::Rgb(
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
    ))
}

/// Util function to shorten home directory to ~.
/// Used for the path header.
pub fn shorten_home_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Some(home_dir) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home_dir)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~{}{}", MAIN_SEPARATOR, stripped.display());
    }
    readable_path(path)
}

/// Path text without the verbatim `\\?\` prefix canonicalize adds on Windows.
pub fn readable_path(path: &Path) -> String {
    #[cfg(windows)]
    {
        let display = path.display().to_string();
        display
            .strip_prefix(r"\\?\")
            .unwrap_or(&display)
            .to_string()
    }
    #[cfg(not(windows))]
    {
        path.display().to_string()
    }
}

/// Turns the PATH argument (or `.` when absent) into the absolute directory to start in.
///
/// A leading `~` expands to the home directory.
pub fn resolve_start_dir(arg: Option<&str>) -> BrowserResult<PathBuf> {
    let raw = arg.unwrap_or(".");
    let expanded = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', MAIN_SEPARATOR]) => {
            let home = dirs::home_dir()
                .ok_or_else(|| BrowserError::path(raw, "home directory is unknown"))?;
            home.join(rest.trim_start_matches(['/', MAIN_SEPARATOR]))
        }
        _ => PathBuf::from(raw),
    };

    let path = expanded
        .canonicalize()
        .map_err(|e| BrowserError::io(&expanded, e))?;
    if !path.is_dir() {
        return Err(BrowserError::path(path, "not a directory"));
    }
    Ok(path)
}
