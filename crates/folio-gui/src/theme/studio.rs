//! Folio theme implementation.
//!
//! This module provides the custom theme and widget style functions that give
//! the portfolio its glass-card look.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::theme::{button_primary, glass_card};
//!
//! button(text("View Case Study")).style(button_primary)
//! container(content).style(glass_card)
//! ```

use iced::widget::{button, container, progress_bar};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use super::colors::{FolioColors, with_alpha};
use super::palette::{ThemeMode, folio_palette};
use super::spacing;

// =============================================================================
// THEME CREATION
// =============================================================================

/// Creates the Folio theme for the given mode.
///
/// * `system_is_dark` - Whether the OS is in dark mode (for System theme mode)
pub fn folio_theme(theme_mode: ThemeMode, system_is_dark: bool) -> Theme {
    let palette = folio_palette(theme_mode, system_is_dark);
    let name = if theme_mode.is_dark(system_is_dark) {
        "Folio Dark"
    } else {
        "Folio Light"
    };
    Theme::custom(name, palette)
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - calls to action.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let folio = theme.folio();

    let (background, shadow) = match status {
        button::Status::Active => (
            palette.primary.base.color,
            Shadow {
                color: with_alpha(palette.primary.base.color, 0.30),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
        ),
        button::Status::Hovered => (
            folio.accent_hover,
            Shadow {
                color: with_alpha(palette.primary.base.color, 0.45),
                offset: Vector::new(0.0, 6.0),
                blur_radius: 18.0,
            },
        ),
        button::Status::Pressed => (folio.accent_pressed, Shadow::default()),
        button::Status::Disabled => (folio.border_default, Shadow::default()),
    };

    button::Style {
        background: Some(background.into()),
        text_color: folio.text_on_accent,
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow,
        ..Default::default()
    }
}

/// Secondary button style - outlined alternative actions.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let folio = theme.folio();

    let (background, border_color) = match status {
        button::Status::Active | button::Status::Disabled => (folio.surface, folio.border_subtle),
        button::Status::Hovered => (folio.surface_hover, folio.border_default),
        button::Status::Pressed => (folio.accent_tint, folio.border_default),
    };

    button::Style {
        background: Some(background.into()),
        text_color: folio.text_secondary,
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: border_color,
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Ghost button style - icon buttons and close controls.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let folio = theme.folio();

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => Some(folio.surface_hover.into()),
        button::Status::Pressed => Some(folio.accent_tint.into()),
    };

    button::Style {
        background,
        text_color: folio.text_secondary,
        border: Border {
            radius: spacing::BORDER_RADIUS_FULL.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Clickable glass card - project cards and the research feature card.
pub fn button_card(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let folio = theme.folio();

    let (background, border_color, lift) = match status {
        button::Status::Hovered | button::Status::Pressed => (
            folio.surface_hover,
            with_alpha(palette.primary.base.color, 0.5),
            12.0,
        ),
        button::Status::Active | button::Status::Disabled => {
            (folio.surface, folio.border_subtle, 8.0)
        }
    };

    button::Style {
        background: Some(background.into()),
        text_color: palette.background.base.text,
        border: Border {
            radius: spacing::BORDER_RADIUS_LG.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: border_color,
        },
        shadow: Shadow {
            color: folio.shadow,
            offset: Vector::new(0.0, lift),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

/// Header link style; the active link carries the accent tint.
pub fn button_nav(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();
        let folio = theme.folio();

        let (background, text_color) = if active {
            (Some(folio.accent_tint.into()), palette.primary.base.color)
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => (
                    Some(folio.surface_hover.into()),
                    palette.background.base.text,
                ),
                _ => (None, folio.text_muted),
            }
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: spacing::BORDER_RADIUS_FULL.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        }
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Translucent card with a subtle outline.
pub fn glass_card(theme: &Theme) -> container::Style {
    let folio = theme.folio();
    container::Style {
        background: Some(folio.surface.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_LG.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: folio.border_subtle,
        },
        shadow: Shadow {
            color: folio.shadow,
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

/// Pill tinted with an accent color.
pub fn accent_chip(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(with_alpha(color, 0.12))),
        text_color: Some(color),
        border: Border {
            radius: spacing::BORDER_RADIUS_FULL.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: with_alpha(color, 0.30),
        },
        ..Default::default()
    }
}

// =============================================================================
// PROGRESS BAR STYLES
// =============================================================================

/// Primary progress bar style - carousel progress.
pub fn progress_bar_primary(theme: &Theme) -> progress_bar::Style {
    let palette = theme.extended_palette();
    let folio = theme.folio();

    progress_bar::Style {
        background: folio.border_subtle.into(),
        bar: palette.primary.base.color.into(),
        border: Border {
            radius: spacing::BORDER_RADIUS_FULL.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}
