//! Display configuration options for lsr
//!
//! This module defines the display configuration options which are read from the lsr.toml
//! configuration file.

use ratatui::widgets::BorderType;
use serde::Deserialize;
use std::time::Duration;

/// Display configuration options
///
/// What each row shows, whether the key legend is drawn, how long status messages stay
/// and the border around the list.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Display {
    icons: bool,
    dir_marker: bool,
    legend: bool,
    status_secs: u64,
    border_shape: BorderShape,
}

impl Display {
    pub fn icons(&self) -> bool {
        self.icons
    }

    pub fn dir_marker(&self) -> bool {
        self.dir_marker
    }

    pub fn legend(&self) -> bool {
        self.legend
    }

    /// How long a status message stays on screen. Zero keeps it until the next one.
    pub fn status_duration(&self) -> Option<Duration> {
        (self.status_secs > 0).then(|| Duration::from_secs(self.status_secs))
    }

    pub fn border_shape(&self) -> BorderShape {
        self.border_shape
    }
}

impl Default for Display {
    fn default() -> Self {
        Display {
            icons: true,
            dir_marker: true,
            legend: true,
            status_secs: 4,
            border_shape: BorderShape::Rounded,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BorderShape {
    None,
    Square,
    #[default]
    Rounded,
    Double,
    Thick,
}

impl BorderShape {
    /// `None` when no border should be drawn.
    pub fn as_border_type(&self) -> Option<BorderType> {
        match self {
            BorderShape::None => None,
            BorderShape::Square => Some(BorderType::Plain),
            BorderShape::Rounded => Some(BorderType::Rounded),
            BorderShape::Double => Some(BorderType::Double),
            BorderShape::Thick => Some(BorderType::Thick),
        }
    }
}
