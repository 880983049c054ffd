//! Light and dark colour themes shared by every page.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Local storage key holding the last chosen [`ThemeMode`].
pub const THEME_STORAGE_KEY: &str = "theme";

/// Background and text colours for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: "#e1f4f3",
        text: "#222831",
    };

    pub const DARK: Palette = Palette {
        background: "#1b262c",
        text: "#fff",
    };

    /// Inline style for a themed surface.
    pub fn surface_style(&self) -> String {
        format!("background: {};", self.background)
    }

    /// Inline style for themed text.
    pub fn text_style(&self) -> String {
        format!("color: {};", self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            ThemeMode::Light => Palette::LIGHT,
            ThemeMode::Dark => Palette::DARK,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
