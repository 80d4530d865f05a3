//! Theme configuration options for lsr
//!
//! This module defines the theme configuration options which are read from the lsr.toml
//! configuration file. Every color accepts a terminal color name or a hex code.

use crate::utils::parse_color;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use std::sync::LazyLock;

/// Theme configuration options
/// # Examples
/// ```toml
/// [theme.cursor]
/// fg = "#d8b172"
/// [theme.marker]
/// icon = "✓"
/// fg = "green"
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Theme {
    entry: ColorPair,
    cursor: ColorPair,
    directory: ColorPair,
    #[serde(deserialize_with = "deserialize_color_field")]
    executable: Color,
    edit: ColorPair,
    confirm: ColorPair,
    error: ColorPair,
    info: ColorPair,
    path: ColorPair,
    legend: ColorPair,
    border: ColorPair,
    marker: MarkerTheme,
}

impl Default for Theme {
    fn default() -> Self {
        let gold = Color::Rgb(0xd8, 0xb1, 0x72);
        Theme {
            entry: ColorPair::default(),
            cursor: ColorPair::fg(gold),
            directory: ColorPair::fg(Color::Blue),
            executable: Color::Green,
            edit: ColorPair::fg(Color::Indexed(5)),
            confirm: ColorPair::fg(Color::Rgb(0xff, 0, 0)),
            error: ColorPair::fg(Color::Red),
            info: ColorPair::fg(Color::Cyan),
            path: ColorPair::fg(Color::Magenta),
            legend: ColorPair::fg(Color::DarkGray),
            border: ColorPair::fg(Color::Indexed(238)),
            marker: MarkerTheme::default(),
        }
    }
}

impl Theme {
    /// Internal defaults, used wherever a user color is left at `default`.
    pub fn internal_defaults() -> &'static Self {
        static DEFAULT: LazyLock<Theme> = LazyLock::new(Theme::default);
        &DEFAULT
    }

    pub fn entry_style(&self) -> Style {
        self.entry.style_or(&Theme::internal_defaults().entry)
    }

    /// The focused row. Always bold.
    pub fn cursor_style(&self) -> Style {
        self.cursor
            .style_or(&Theme::internal_defaults().cursor)
            .add_modifier(Modifier::BOLD)
    }

    pub fn directory_style(&self) -> Style {
        self.directory
            .style_or(&Theme::internal_defaults().directory)
    }

    pub fn executable_style(&self) -> Style {
        let fg = if self.executable == Color::Reset {
            Theme::internal_defaults().executable
        } else {
            self.executable
        };
        Style::default().fg(fg)
    }

    pub fn edit_style(&self) -> Style {
        self.edit
            .style_or(&Theme::internal_defaults().edit)
            .add_modifier(Modifier::BOLD)
    }

    /// The dimmed hint shown while the edit buffer is empty.
    pub fn placeholder_style(&self) -> Style {
        self.edit
            .style_or(&Theme::internal_defaults().edit)
            .add_modifier(Modifier::DIM)
    }

    pub fn confirm_style(&self) -> Style {
        self.confirm
            .style_or(&Theme::internal_defaults().confirm)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        self.error.style_or(&Theme::internal_defaults().error)
    }

    pub fn info_style(&self) -> Style {
        self.info.style_or(&Theme::internal_defaults().info)
    }

    pub fn path_style(&self) -> Style {
        self.path
            .style_or(&Theme::internal_defaults().path)
            .add_modifier(Modifier::BOLD)
    }

    pub fn legend_style(&self) -> Style {
        self.legend.style_or(&Theme::internal_defaults().legend)
    }

    pub fn border_style(&self) -> Style {
        self.border.style_or(&Theme::internal_defaults().border)
    }

    pub fn marker(&self) -> &MarkerTheme {
        &self.marker
    }
}

/// Foreground and background color of one element.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    #[serde(default, deserialize_with = "deserialize_color_field")]
    fg: Color,
    #[serde(default, deserialize_with = "deserialize_color_field")]
    bg: Color,
}

impl Default for ColorPair {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

impl ColorPair {
    const fn fg(fg: Color) -> Self {
        Self {
            fg,
            bg: Color::Reset,
        }
    }

    /// Replaces Reset colors with those from `other`.
    pub fn resolve(&self, other: &ColorPair) -> Self {
        Self {
            fg: if self.fg == Color::Reset {
                other.fg
            } else {
                self.fg
            },
            bg: if self.bg == Color::Reset {
                other.bg
            } else {
                self.bg
            },
        }
    }

    pub fn style_or(&self, fallback: &ColorPair) -> Style {
        let resolved = self.resolve(fallback);
        Style::default().fg(resolved.fg).bg(resolved.bg)
    }
}

/// Icon and colors of the selection marker.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MarkerTheme {
    icon: String,
    #[serde(flatten)]
    color: ColorPair,
}

impl MarkerTheme {
    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn style_or_theme(&self) -> Style {
        self.color.style_or(&MarkerTheme::default().color)
    }
}

impl Default for MarkerTheme {
    fn default() -> Self {
        MarkerTheme {
            icon: "✓".to_string(),
            color: ColorPair::fg(Color::Rgb(0, 0xff, 0)),
        }
    }
}

fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_colors_fall_back_to_internal_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let theme: Theme = toml::from_str(
            r##"
            [cursor]
            fg = "default"
            [directory]
            fg = "#00ff00"
            "##,
        )?;
        assert_eq!(
            theme.cursor_style().fg,
            Some(Color::Rgb(0xd8, 0xb1, 0x72))
        );
        assert!(theme.cursor_style().add_modifier.contains(Modifier::BOLD));
        assert_eq!(theme.directory_style().fg, Some(Color::Rgb(0, 0xff, 0)));
        Ok(())
    }

    #[test]
    fn marker_icon_is_configurable() -> Result<(), Box<dyn std::error::Error>> {
        let theme: Theme = toml::from_str("[marker]\nicon = \"*\"\nfg = \"yellow\"\n")?;
        assert_eq!(theme.marker().icon(), "*");
        assert_eq!(theme.marker().style_or_theme().fg, Some(Color::Yellow));
        Ok(())
    }
}
