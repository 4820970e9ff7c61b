//! Page geometry.
//!
//! Every section of a page is rendered at a fixed height chosen from the
//! window width, so section positions are known without reading back the
//! widget tree. [`LayoutProbe`] exposes those positions to the scroll-spy and
//! reveal latches in `folio_core`.

use folio_core::{ElementBounds, View, ViewportProbe};

use crate::theme::NARROW_BREAKPOINT;

/// Width at which the project grid gains its third column.
pub const WIDE_BREAKPOINT: f32 = 1100.0;

const PROJECT_HEADER_HEIGHT: f32 = 200.0;
const PROJECT_CARD_HEIGHT: f32 = 520.0;
const PROJECT_GAP: f32 = 24.0;
const PROJECT_EMPTY_HEIGHT: f32 = 160.0;
const SECTION_PADDING: f32 = 96.0;

// =============================================================================
// WIDTH CLASS
// =============================================================================

/// Responsive width class of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutWidth {
    Narrow,
    Medium,
    #[default]
    Wide,
}

impl LayoutWidth {
    pub fn from_width(width: f32) -> Self {
        if width < NARROW_BREAKPOINT {
            Self::Narrow
        } else if width < WIDE_BREAKPOINT {
            Self::Medium
        } else {
            Self::Wide
        }
    }

    /// Columns of the project grid.
    pub fn columns(&self) -> usize {
        match self {
            Self::Narrow => 1,
            Self::Medium => 2,
            Self::Wide => 3,
        }
    }

    /// Desktop navigation collapses into the menu button.
    pub fn is_narrow(&self) -> bool {
        matches!(self, Self::Narrow)
    }
}

// =============================================================================
// PAGE LAYOUT
// =============================================================================

/// One section of a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSlot {
    pub id: &'static str,
    pub top: f32,
    pub height: f32,
}

/// Section stack of the active view, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    width: LayoutWidth,
    sections: Vec<SectionSlot>,
}

impl PageLayout {
    /// Layout of `view` for a window `width` pixels wide showing
    /// `visible_projects` project cards.
    pub fn for_view(view: View, width: f32, visible_projects: usize) -> Self {
        let class = LayoutWidth::from_width(width);
        let narrow = class.is_narrow();
        let pick = |wide: f32, tall: f32| if narrow { tall } else { wide };

        let heights: Vec<(&'static str, f32)> = match view {
            View::Main => vec![
                ("home", pick(720.0, 900.0)),
                ("about", pick(760.0, 1180.0)),
                ("research", pick(720.0, 1100.0)),
                ("skills", pick(820.0, 1500.0)),
                ("projects", projects_height(visible_projects, class.columns())),
                ("contact", pick(560.0, 820.0)),
            ],
            View::Research => vec![
                ("lab-hero", pick(560.0, 760.0)),
                ("pipeline", pick(560.0, 1100.0)),
                ("gallery", pick(640.0, 520.0)),
                ("publications", 760.0),
                ("contact", pick(560.0, 820.0)),
            ],
        };

        let mut top = 0.0;
        let sections = heights
            .into_iter()
            .map(|(id, height)| {
                let slot = SectionSlot { id, top, height };
                top += height;
                slot
            })
            .collect();

        Self {
            width: class,
            sections,
        }
    }

    pub fn width(&self) -> LayoutWidth {
        self.width
    }

    pub fn sections(&self) -> &[SectionSlot] {
        &self.sections
    }

    pub fn slot(&self, id: &str) -> Option<&SectionSlot> {
        self.sections.iter().find(|slot| slot.id == id)
    }

    /// Fixed height of a section; zero for ids not on this page.
    pub fn height_of(&self, id: &str) -> f32 {
        self.slot(id).map_or(0.0, |slot| slot.height)
    }

    pub fn total_height(&self) -> f32 {
        self.sections.iter().map(|slot| slot.height).sum()
    }

    /// Probe of this layout scrolled to `offset` in a viewport of the given
    /// height.
    pub fn probe(&self, offset: f32, viewport_height: f32) -> LayoutProbe<'_> {
        LayoutProbe {
            layout: self,
            offset,
            viewport_height,
        }
    }
}

fn projects_height(visible: usize, columns: usize) -> f32 {
    let body = if visible == 0 {
        PROJECT_EMPTY_HEIGHT
    } else {
        let rows = visible.div_ceil(columns) as f32;
        rows * PROJECT_CARD_HEIGHT + (rows - 1.0) * PROJECT_GAP
    };
    PROJECT_HEADER_HEIGHT + body + SECTION_PADDING
}

// =============================================================================
// PROBE
// =============================================================================

/// [`ViewportProbe`] over a [`PageLayout`] at a scroll offset.
#[derive(Debug, Clone, Copy)]
pub struct LayoutProbe<'a> {
    layout: &'a PageLayout,
    offset: f32,
    viewport_height: f32,
}

impl ViewportProbe for LayoutProbe<'_> {
    fn bounds(&self, id: &str) -> Option<ElementBounds> {
        self.layout
            .slot(id)
            .map(|slot| ElementBounds::new(slot.top - self.offset, slot.height))
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }
}

#[cfg(test)]
mod tests {
    use folio_core::{Navigator, ScrollRequest};
    use folio_model::{NavTarget, SectionId};

    use super::*;

    #[test]
    fn width_classes() {
        assert_eq!(LayoutWidth::from_width(420.0), LayoutWidth::Narrow);
        assert_eq!(LayoutWidth::from_width(767.9), LayoutWidth::Narrow);
        assert_eq!(LayoutWidth::from_width(768.0), LayoutWidth::Medium);
        assert_eq!(LayoutWidth::from_width(1100.0), LayoutWidth::Wide);
        assert_eq!(LayoutWidth::Medium.columns(), 2);
    }

    #[test]
    fn sections_stack_in_document_order() {
        let layout = PageLayout::for_view(View::Main, 1280.0, 4);
        let ids: Vec<&str> = layout.sections().iter().map(|slot| slot.id).collect();
        assert_eq!(
            ids,
            ["home", "about", "research", "skills", "projects", "contact"]
        );
        assert_eq!(layout.slot("about").map(|slot| slot.top), Some(720.0));
        assert_eq!(layout.slot("research").map(|slot| slot.top), Some(1480.0));
    }

    #[test]
    fn project_rows_follow_columns() {
        // Four cards: two rows of three, or four rows of one.
        let wide = PageLayout::for_view(View::Main, 1280.0, 4);
        assert_eq!(wide.height_of("projects"), 200.0 + 2.0 * 520.0 + 24.0 + 96.0);

        let narrow = PageLayout::for_view(View::Main, 500.0, 4);
        assert_eq!(
            narrow.height_of("projects"),
            200.0 + 4.0 * 520.0 + 3.0 * 24.0 + 96.0
        );

        let empty = PageLayout::for_view(View::Main, 1280.0, 0);
        assert_eq!(empty.height_of("projects"), 200.0 + 160.0 + 96.0);
    }

    #[test]
    fn research_page_has_no_main_sections() {
        let layout = PageLayout::for_view(View::Research, 1280.0, 4);
        assert!(layout.slot("skills").is_none());
        assert_eq!(layout.height_of("skills"), 0.0);
        assert!(layout.slot("publications").is_some());
    }

    #[test]
    fn probe_positions_are_relative_to_the_offset() {
        let layout = PageLayout::for_view(View::Main, 1280.0, 4);
        let probe = layout.probe(1000.0, 860.0);
        assert_eq!(
            probe.bounds("about"),
            Some(ElementBounds::new(-280.0, 760.0))
        );
        assert_eq!(probe.viewport_height(), 860.0);
        assert!(probe.bounds("gallery").is_none());
    }

    #[test]
    fn spy_follows_the_layout() {
        let layout = PageLayout::for_view(View::Main, 1280.0, 4);
        let mut navigator = Navigator::new();

        // Skills top sits 100px below the viewport origin.
        let skills_top = layout.slot("skills").map_or(0.0, |slot| slot.top);
        navigator.on_scroll(skills_top - 100.0, &layout.probe(skills_top - 100.0, 860.0));
        assert_eq!(navigator.active_section(), SectionId::Skills);
        assert!(navigator.is_elevated());
    }

    #[test]
    fn scroll_request_resolves_to_the_section_top() {
        let layout = PageLayout::for_view(View::Main, 1280.0, 4);
        let mut navigator = Navigator::new();
        let request = navigator.navigate(NavTarget::Section(SectionId::Projects));
        assert!(matches!(request, ScrollRequest::ToSection { .. }));

        let offset = 300.0;
        let target = request.resolve(offset, &layout.probe(offset, 860.0));
        assert_eq!(target, layout.slot("projects").map(|slot| slot.top));
    }
}
