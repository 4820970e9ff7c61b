//! Color palettes for Folio Studio.
//!
//! A slate base with an indigo primary, in light and dark variants.

use iced::Color;
use iced::theme::Palette;
use serde::{Deserialize, Serialize};

// =============================================================================
// THEME MODE
// =============================================================================

/// Theme mode for light/dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemeMode {
    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// All available modes, in the order the header toggle cycles them.
    pub const ALL: [Self; 3] = [Self::Dark, Self::Light, Self::System];

    /// The mode after this one in [`Self::ALL`].
    pub fn next(&self) -> Self {
        let position = Self::ALL.iter().position(|mode| mode == self).unwrap_or(0);
        Self::ALL[(position + 1) % Self::ALL.len()]
    }

    /// Check if this is a dark mode (or resolves to dark).
    pub fn is_dark(&self, system_is_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_is_dark,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// PALETTE CREATION
// =============================================================================

/// Create the Iced Palette for the given mode.
pub fn folio_palette(theme_mode: ThemeMode, system_is_dark: bool) -> Palette {
    if theme_mode.is_dark(system_is_dark) {
        dark()
    } else {
        light()
    }
}

/// Slate-900 background.
fn dark() -> Palette {
    Palette {
        background: Color::from_rgb8(0x0f, 0x17, 0x2a),
        text: Color::from_rgb8(0xe2, 0xe8, 0xf0),
        primary: Color::from_rgb8(0x63, 0x66, 0xf1),
        success: Color::from_rgb8(0x10, 0xb9, 0x81),
        warning: Color::from_rgb8(0xf5, 0x9e, 0x0b),
        danger: Color::from_rgb8(0xf4, 0x3f, 0x5e),
    }
}

/// Slate-50 background.
fn light() -> Palette {
    Palette {
        background: Color::from_rgb8(0xf8, 0xfa, 0xfc),
        text: Color::from_rgb8(0x0f, 0x17, 0x2a),
        primary: Color::from_rgb8(0x4f, 0x46, 0xe5),
        success: Color::from_rgb8(0x05, 0x96, 0x69),
        warning: Color::from_rgb8(0xd9, 0x77, 0x06),
        danger: Color::from_rgb8(0xe1, 0x1d, 0x48),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycles_through_every_mode() {
        let mut mode = ThemeMode::Dark;
        let mut seen = Vec::new();
        for _ in 0..ThemeMode::ALL.len() {
            seen.push(mode);
            mode = mode.next();
        }
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(seen, ThemeMode::ALL);
    }

    #[test]
    fn system_follows_the_os() {
        assert!(ThemeMode::System.is_dark(true));
        assert!(!ThemeMode::System.is_dark(false));
        assert_ne!(
            folio_palette(ThemeMode::Light, true).background,
            folio_palette(ThemeMode::Dark, true).background
        );
    }
}
