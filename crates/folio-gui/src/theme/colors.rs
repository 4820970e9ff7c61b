//! Folio color extension trait for app-specific colors.
//!
//! Provides an extension trait `FolioColors` that adds portfolio-specific
//! colors to Iced's `Theme`, plus the tint of each content [`Accent`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::theme::FolioColors;
//!
//! .style(|theme: &Theme| container::Style {
//!     background: Some(theme.folio().surface.into()),
//!     ..Default::default()
//! })
//! ```

use folio_model::Accent;
use iced::{Color, Theme};

// =============================================================================
// FOLIO COLOR SET
// =============================================================================

/// Colors not covered by Iced's ExtendedPalette.
#[derive(Debug, Clone, Copy)]
pub struct FolioColorSet {
    // === Surfaces ===
    /// Translucent card background
    pub surface: Color,
    /// Card background under the pointer
    pub surface_hover: Color,
    /// Header background once the page is scrolled
    pub header_elevated: Color,
    /// Image placeholder fill
    pub placeholder: Color,

    // === Borders ===
    /// Subtle card outline
    pub border_subtle: Color,
    /// Default border color
    pub border_default: Color,

    // === Text ===
    /// Secondary text color
    pub text_secondary: Color,
    /// Muted text (descriptions, hints)
    pub text_muted: Color,
    /// Text on accent color backgrounds
    pub text_on_accent: Color,

    // === Interactive ===
    /// Accent hover color
    pub accent_hover: Color,
    /// Accent pressed color
    pub accent_pressed: Color,
    /// Light tint of the primary accent (chips, active links)
    pub accent_tint: Color,

    // === Special ===
    /// Shadow color for elevation
    pub shadow: Color,
    /// Strong shadow for higher elevation
    pub shadow_strong: Color,
    /// Modal and mobile menu backdrop
    pub backdrop: Color,
    /// Caption band drawn over carousel images
    pub scrim: Color,
}

// =============================================================================
// EXTENSION TRAIT
// =============================================================================

/// Extension trait for portfolio colors.
pub trait FolioColors {
    /// Get the folio color set for this theme.
    fn folio(&self) -> FolioColorSet;

    /// Tint of a content accent for this theme.
    fn accent(&self, accent: Accent) -> Color;
}

impl FolioColors for Theme {
    fn folio(&self) -> FolioColorSet {
        let palette = self.extended_palette();
        let is_dark = palette.is_dark;
        let primary = palette.primary.base.color;

        FolioColorSet {
            surface: if is_dark {
                Color::from_rgba(1.0, 1.0, 1.0, 0.04)
            } else {
                Color::WHITE
            },
            surface_hover: if is_dark {
                Color::from_rgba(1.0, 1.0, 1.0, 0.08)
            } else {
                blend_color(Color::WHITE, primary, 0.04)
            },
            header_elevated: with_alpha(palette.background.base.color, 0.92),
            placeholder: if is_dark {
                Color::from_rgb8(0x1e, 0x29, 0x3b)
            } else {
                Color::from_rgb8(0xe2, 0xe8, 0xf0)
            },

            border_subtle: if is_dark {
                Color::from_rgba(1.0, 1.0, 1.0, 0.10)
            } else {
                Color::from_rgb8(0xe2, 0xe8, 0xf0)
            },
            border_default: palette.background.strong.color,

            text_secondary: if is_dark {
                Color::from_rgb8(0xcb, 0xd5, 0xe1)
            } else {
                Color::from_rgb8(0x33, 0x41, 0x55)
            },
            text_muted: if is_dark {
                Color::from_rgb8(0x94, 0xa3, 0xb8)
            } else {
                Color::from_rgb8(0x64, 0x74, 0x8b)
            },
            text_on_accent: Color::WHITE,

            accent_hover: if is_dark {
                blend_color(primary, Color::WHITE, 0.15)
            } else {
                blend_color(primary, Color::BLACK, 0.12)
            },
            accent_pressed: blend_color(primary, Color::BLACK, 0.20),
            accent_tint: with_alpha(primary, if is_dark { 0.15 } else { 0.10 }),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.30 } else { 0.08 }),
            shadow_strong: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.50 } else { 0.16 }),
            backdrop: Color::from_rgba(0.01, 0.03, 0.09, 0.80),
            scrim: Color::from_rgba(0.0, 0.0, 0.0, 0.60),
        }
    }

    fn accent(&self, accent: Accent) -> Color {
        let base = accent_color(accent);
        if self.extended_palette().is_dark {
            base
        } else {
            blend_color(base, Color::BLACK, 0.25)
        }
    }
}

/// Base tint of a content accent.
pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Cyan => Color::from_rgb8(0x22, 0xd3, 0xee),
        Accent::Orange => Color::from_rgb8(0xfb, 0x92, 0x3c),
        Accent::Green => Color::from_rgb8(0x4a, 0xde, 0x80),
        Accent::Purple => Color::from_rgb8(0xc0, 0x84, 0xfc),
        Accent::Blue => Color::from_rgb8(0x60, 0xa5, 0xfa),
        Accent::Teal => Color::from_rgb8(0x2d, 0xd4, 0xbf),
        Accent::Emerald => Color::from_rgb8(0x34, 0xd3, 0x99),
        Accent::Rose => Color::from_rgb8(0xfb, 0x71, 0x85),
        Accent::Indigo => Color::from_rgb8(0x81, 0x8c, 0xf8),
    }
}

/// Same color, different opacity.
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

fn blend_color(base: Color, blend: Color, factor: f32) -> Color {
    Color::from_rgb(
        base.r + (blend.r - base.r) * factor,
        base.g + (blend.g - base.g) * factor,
        base.b + (blend.b - base.b) * factor,
    )
}
