//! The main config loading module for lsr.
//!
//! Handles loading and deserializing settings from `lsr.toml`, and writing the default
//! file for `lsr --init`.

use crate::config::{Display, General, Keys, Log, Theme};
use crate::core::LoadOptions;
use crate::utils::cli::CliOptions;

use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

pub const CONFIG_ENV: &str = "LSR_CONFIG";

/// Raw configuration as read from the toml file.
/// It is then converted into the main [Config] struct.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct RawConfig {
    general: General,
    display: Display,
    theme: Theme,
    keys: Keys,
    log: Log,
}

/// Main configuration struct for lsr
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    general: General,
    display: Display,
    theme: Theme,
    keys: Keys,
    log: Log,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: raw.general,
            display: raw.display,
            theme: raw.theme,
            keys: raw.keys,
            log: raw.log,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// A missing file silently gives the internal defaults; a file that fails to parse
    /// is reported on stderr and also gives the defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                eprintln!("[lsr] Error reading {}: {e}", path.display());
                return Self::default();
            }
        };
        match Self::parse(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("[lsr] Error parsing {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawConfig>(content).map(Config::from)
    }

    /// Command-line `-a` / `-l` switch the matching options on.
    pub fn apply_cli(&mut self, opts: &CliOptions) {
        self.general
            .enable(opts.show_hidden, opts.show_permissions);
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    #[inline]
    pub fn log(&self) -> &Log {
        &self.log
    }

    pub fn load_options(&self) -> LoadOptions {
        self.general.load_options()
    }

    /// Determine the default configuration file path.
    /// Checks the LSR_CONFIG environment variable first,
    /// then XDG_CONFIG_HOME,
    /// then defaults to ~/.config/lsr/lsr.toml.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
            && !xdg_config.is_empty()
        {
            return PathBuf::from(xdg_config).join("lsr").join("lsr.toml");
        }

        if let Some(home) = dirs::home_dir() {
            return home.join(".config").join("lsr").join("lsr.toml");
        }
        PathBuf::from("lsr.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "config file already exists",
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)
    }
}

pub(crate) const DEFAULT_TOML: &str = r##"# lsr.toml - default configuration for lsr
#
# Commented values are the internal defaults.
# Colors: terminal names ("cyan") or hex codes ("#RRGGBB", "#RGB").

[general]
# dirs_first = true
# case_insensitive = true
# show_hidden = false          # same as -a
# show_permissions = false     # same as -l
# move_to_trash = false        # delete moves entries to the system trash

[display]
# icons = true
# dir_marker = true
# legend = true
# status_secs = 4              # 0 keeps messages until the next one
# border_shape = "rounded"     # "none", "square", "rounded", "double", "thick"

[theme]
# executable = "green"

# [theme.entry]
# fg = "default"
# bg = "default"

# [theme.cursor]
# fg = "#d8b172"

# [theme.directory]
# fg = "blue"

# [theme.edit]
# fg = "magenta"

# [theme.confirm]
# fg = "#ff0000"

# [theme.error]
# fg = "red"

# [theme.info]
# fg = "cyan"

# [theme.path]
# fg = "magenta"

# [theme.legend]
# fg = "darkgray"

# [theme.border]
# fg = "darkgray"

# [theme.marker]
# icon = "✓"
# fg = "#00ff00"

[keys]
# quit = ["q"]
# up = ["k", "Up"]
# down = ["j", "Down"]
# toggle = ["Space"]
# open = ["Enter"]
# parent = ["Backspace"]
# rename = ["r"]
# delete = ["d"]
# add = ["a"]
# confirm = ["Enter"]
# cancel = ["Esc"]

[log]
# level = "info"               # overridden by LSR_LOG
# dir = "~/.cache/lsr"
"##;
