//! Typography definitions for consistent text styling.
//!
//! All font sizes are in pixels (f32).

use iced::Font;
use iced::font::Weight;

// =============================================================================
// FONT SIZES
// =============================================================================

/// Caption text - eyebrows, chips, footnotes
pub const FONT_SIZE_CAPTION: f32 = 11.0;

/// Small text - tags, metadata
pub const FONT_SIZE_SMALL: f32 = 12.0;

/// Body text - default text size
pub const FONT_SIZE_BODY: f32 = 14.0;

/// Subtitle text - lead paragraphs
pub const FONT_SIZE_SUBTITLE: f32 = 16.0;

/// Title text - card headers
pub const FONT_SIZE_TITLE: f32 = 20.0;

/// Heading text - section headers
pub const FONT_SIZE_HEADING: f32 = 32.0;

/// Display text - hero titles
pub const FONT_SIZE_DISPLAY: f32 = 48.0;

// =============================================================================
// LINE HEIGHTS
// =============================================================================

/// Tight line height - headings
pub const LINE_HEIGHT_TIGHT: f32 = 1.2;

/// Relaxed line height - readable paragraphs
pub const LINE_HEIGHT_RELAXED: f32 = 1.6;

// =============================================================================
// WEIGHTS
// =============================================================================

/// Semibold - card titles, labels
pub const FONT_SEMIBOLD: Font = Font {
    weight: Weight::Semibold,
    ..Font::DEFAULT
};

/// Bold - section and hero headings
pub const FONT_BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};
