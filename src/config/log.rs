//! Logging configuration for lsr.

use serde::Deserialize;
use std::path::PathBuf;

/// `[log]` table: the default filter level and where `lsr.log` is written.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Log {
    level: String,
    dir: Option<PathBuf>,
}

impl Default for Log {
    fn default() -> Self {
        Log {
            level: "info".into(),
            dir: None,
        }
    }
}

impl Log {
    pub fn level(&self) -> &str {
        let trimmed = self.level.trim();
        if trimmed.is_empty() { "info" } else { trimmed }
    }

    /// The configured directory, else `<cache dir>/lsr`. `None` when neither is known.
    pub fn dir(&self) -> Option<PathBuf> {
        self.dir
            .clone()
            .or_else(|| dirs::cache_dir().map(|d| d.join("lsr")))
    }
}
