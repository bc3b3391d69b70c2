//! Theme system for the pricedash TUI.
//!
//! Provides color themes with runtime switching. The starting theme comes
//! from the config file; switching at runtime lasts for the session only.

use pricedash_catalog::Series;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme name identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Default theme (dark terminal, brand series colors)
    #[default]
    Default,
    /// Dark theme (enhanced contrast)
    Dark,
    /// Light theme (for bright environments)
    Light,
}

impl ThemeName {
    const CYCLE: [ThemeName; 3] = [ThemeName::Default, ThemeName::Dark, ThemeName::Light];

    /// Theme that `t` switches to.
    pub fn next(&self) -> ThemeName {
        let idx = Self::CYCLE.iter().position(|t| t == self).unwrap_or(0);
        Self::CYCLE[(idx + 1) % Self::CYCLE.len()]
    }

    /// Name shown in the status line.
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeName::Default => "Default",
            ThemeName::Dark => "Dark",
            ThemeName::Light => "Light",
        }
    }
}

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Primary headers and focused borders
    pub header: Color,
    /// Hotkey hints
    pub hotkey: Color,
    /// Normal text
    pub text: Color,
    /// Secondary text (description, timestamps, axis labels)
    pub text_dim: Color,
    /// Unfocused borders
    pub border_dim: Color,
    /// Row under the cursor
    pub cursor: Color,
    /// Checked checkbox marks
    pub checked: Color,
    /// Status line warnings (rejected toggles)
    pub status_warning: Color,
    /// Input price bars
    pub input_series: Color,
    /// Output price bars
    pub output_series: Color,
}

/// Complete theme definition.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Color palette
    pub colors: ThemeColors,
}

impl Theme {
    /// Create the Default theme.
    pub fn default_theme() -> Self {
        Self {
            name: ThemeName::Default,
            colors: ThemeColors {
                header: Color::Cyan,
                hotkey: Color::Yellow,
                text: Color::White,
                text_dim: Color::Gray,
                border_dim: Color::DarkGray,
                cursor: Color::Cyan,
                checked: Color::Green,
                status_warning: Color::Yellow,
                // #5865F2
                input_series: Color::Rgb(88, 101, 242),
                // #00A8FC
                output_series: Color::Rgb(0, 168, 252),
            },
        }
    }

    /// Create the Dark theme (enhanced contrast).
    pub fn dark_theme() -> Self {
        Self {
            name: ThemeName::Dark,
            colors: ThemeColors {
                header: Color::LightBlue,
                hotkey: Color::LightYellow,
                text: Color::White,
                text_dim: Color::DarkGray,
                border_dim: Color::Black,
                cursor: Color::LightYellow,
                checked: Color::LightGreen,
                status_warning: Color::LightYellow,
                input_series: Color::LightMagenta,
                output_series: Color::LightCyan,
            },
        }
    }

    /// Create the Light theme (for bright environments).
    pub fn light_theme() -> Self {
        Self {
            name: ThemeName::Light,
            colors: ThemeColors {
                header: Color::Blue,
                hotkey: Color::DarkGray,
                text: Color::Black,
                text_dim: Color::DarkGray,
                border_dim: Color::Gray,
                cursor: Color::Rgb(0, 100, 255),
                checked: Color::Green,
                status_warning: Color::Red,
                input_series: Color::Rgb(88, 101, 242),
                output_series: Color::Rgb(0, 120, 200),
            },
        }
    }

    /// Get a theme by name.
    pub fn by_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Default => Self::default_theme(),
            ThemeName::Dark => Self::dark_theme(),
            ThemeName::Light => Self::light_theme(),
        }
    }

    /// Bar color for a price series.
    pub fn series_color(&self, series: Series) -> Color {
        match series {
            Series::Input => self.colors.input_series,
            Series::Output => self.colors.output_series,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

/// Active theme for the session. Starts from the config value; `t` cycles it.
#[derive(Debug, Clone, Default)]
pub struct ThemeManager {
    current: Theme,
}

impl ThemeManager {
    /// Start on the named theme.
    pub fn with_name(name: ThemeName) -> Self {
        tracing::debug!(theme = name.display_name(), "theme selected");
        Self {
            current: Theme::by_name(name),
        }
    }

    /// Palette used for drawing.
    pub fn current(&self) -> &Theme {
        &self.current
    }

    /// Switch to the next theme and return its name.
    pub fn cycle_theme(&mut self) -> ThemeName {
        let next_name = self.current.name.next();
        self.current = Theme::by_name(next_name);
        next_name
    }

    /// Name of the active theme.
    pub fn theme_name(&self) -> ThemeName {
        self.current.name
    }
}
