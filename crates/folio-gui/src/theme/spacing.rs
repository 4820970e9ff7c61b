//! Spacing constants for consistent layout throughout the application.
//!
//! All spacing values are in pixels (f32) and follow a consistent scale.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - card padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins, large separations
pub const SPACING_XL: f32 = 32.0;

/// Double extra large spacing - hero sections, major divisions
pub const SPACING_XXL: f32 = 48.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - chips, inputs
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - buttons
pub const BORDER_RADIUS_MD: f32 = 8.0;

/// Large radius - cards, images
pub const BORDER_RADIUS_LG: f32 = 16.0;

/// Extra large radius - modal, hero portrait frame
pub const BORDER_RADIUS_XL: f32 = 24.0;

/// Full/pill radius - tags, badges, dots
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

// =============================================================================
// BORDER WIDTHS
// =============================================================================

/// Thin border - glass card outlines
pub const BORDER_WIDTH_THIN: f32 = 1.0;

/// Medium border - active indicators
pub const BORDER_WIDTH_MEDIUM: f32 = 2.0;

// =============================================================================
// COMPONENT SIZES
// =============================================================================

/// Icon size - small (inline with text)
pub const ICON_SIZE_SM: f32 = 16.0;

/// Icon size - medium (buttons, list items)
pub const ICON_SIZE_MD: f32 = 20.0;

/// Icon size - large (card headers)
pub const ICON_SIZE_LG: f32 = 24.0;

/// Icon size - extra large (section emblems)
pub const ICON_SIZE_XL: f32 = 32.0;

/// Carousel dot diameter
pub const DOT_SIZE: f32 = 8.0;

/// Active carousel dot width
pub const DOT_ACTIVE_WIDTH: f32 = 24.0;

// =============================================================================
// LAYOUT WIDTHS
// =============================================================================

/// Width of the page content column
pub const CONTENT_MAX_WIDTH: f32 = 1200.0;

/// Below this window width the header collapses into the menu button
pub const NARROW_BREAKPOINT: f32 = 768.0;

/// Header bar height
pub const HEADER_HEIGHT: f32 = 72.0;

/// Project detail overlay width
pub const MODAL_WIDTH: f32 = 880.0;

/// Project detail overlay height
pub const MODAL_HEIGHT: f32 = 640.0;
