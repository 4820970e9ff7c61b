//! Theme module for Folio Studio.
//!
//! - Color palettes and theme mode (`palette`)
//! - App-specific colors and content accents (`colors`)
//! - Spacing constants (`spacing`)
//! - Typography definitions (`typography`)
//! - Custom widget styles (`studio`)

pub mod colors;
pub mod palette;
pub mod spacing;
pub mod studio;
pub mod typography;

pub use colors::{FolioColorSet, FolioColors, accent_color, with_alpha};
pub use palette::ThemeMode;
pub use spacing::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_RADIUS_XL,
    BORDER_WIDTH_MEDIUM, BORDER_WIDTH_THIN, CONTENT_MAX_WIDTH, DOT_ACTIVE_WIDTH, DOT_SIZE,
    HEADER_HEIGHT, ICON_SIZE_LG, ICON_SIZE_MD, ICON_SIZE_SM, ICON_SIZE_XL, MODAL_HEIGHT,
    MODAL_WIDTH, NARROW_BREAKPOINT, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS,
    SPACING_XXL,
};
pub use studio::{
    accent_chip, button_card, button_ghost, button_nav, button_primary, button_secondary,
    folio_theme, glass_card, progress_bar_primary,
};
pub use typography::{
    FONT_BOLD, FONT_SEMIBOLD, FONT_SIZE_BODY, FONT_SIZE_CAPTION, FONT_SIZE_DISPLAY,
    FONT_SIZE_HEADING, FONT_SIZE_SMALL, FONT_SIZE_SUBTITLE, FONT_SIZE_TITLE, LINE_HEIGHT_RELAXED,
    LINE_HEIGHT_TIGHT,
};
