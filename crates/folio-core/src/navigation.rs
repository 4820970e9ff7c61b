//! View routing, scroll-spy, and navbar elevation.
//!
//! The [`Navigator`] is the single source of truth for which top-level view
//! is showing and which section the header highlights. It never scrolls
//! anything itself; transitions return a [`ScrollRequest`] that the UI layer
//! carries out against whatever scroll surface it owns.
//!
//! Geometry comes in through [`ViewportProbe`], so the spy logic runs the same
//! against a real layout or a table of numbers in a test.

use std::time::Duration;

use folio_model::{NavTarget, SectionId};
use serde::{Deserialize, Serialize};

/// Delay before scrolling to a section after switching back to the main view,
/// giving the new view one render pass to lay out.
pub const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Scroll offset past which the navbar is drawn elevated.
pub const ELEVATION_OFFSET: f32 = 50.0;

/// Top-level page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Main,
    Research,
}

/// Window of section top edges, relative to the viewport origin, that counts
/// as "currently reading". Inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpyBand {
    pub min: f32,
    pub max: f32,
}

impl SpyBand {
    pub const DEFAULT: Self = Self {
        min: -200.0,
        max: 400.0,
    };

    pub fn contains(&self, top: f32) -> bool {
        top >= self.min && top <= self.max
    }
}

impl Default for SpyBand {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Vertical extent of an element relative to the viewport's top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBounds {
    pub top: f32,
    pub height: f32,
}

impl ElementBounds {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Fraction of the element that lies inside a viewport of the given height.
    pub fn intersection_ratio(&self, viewport_height: f32) -> f32 {
        if self.height <= 0.0 {
            return 0.0;
        }
        let visible = self.bottom().min(viewport_height) - self.top.max(0.0);
        (visible / self.height).clamp(0.0, 1.0)
    }
}

/// Read-only access to the current layout.
pub trait ViewportProbe {
    /// Bounds of the element with the given id, or `None` when it is not in
    /// the document.
    fn bounds(&self, id: &str) -> Option<ElementBounds>;

    /// Visible height of the scroll surface.
    fn viewport_height(&self) -> f32;
}

/// Scroll side effect requested by a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScrollRequest {
    /// Scroll the active view back to its top.
    ToTop,
    /// Bring a section into view now.
    ToSection { section: SectionId },
    /// Bring a section into view once the view switch has rendered.
    ToSectionAfterSettle {
        section: SectionId,
        #[serde(skip)]
        delay: Duration,
    },
}

impl ScrollRequest {
    pub fn section(&self) -> Option<SectionId> {
        match self {
            Self::ToTop => None,
            Self::ToSection { section } | Self::ToSectionAfterSettle { section, .. } => {
                Some(*section)
            }
        }
    }

    /// Absolute scroll offset that satisfies the request.
    ///
    /// Returns `None` when the target section is not in the document; the
    /// request is then dropped without effect.
    pub fn resolve(&self, current_offset: f32, probe: &impl ViewportProbe) -> Option<f32> {
        match self.section() {
            None => Some(0.0),
            Some(section) => probe
                .bounds(section.as_str())
                .map(|bounds| (current_offset + bounds.top).max(0.0)),
        }
    }
}

/// Router and scroll-spy state.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    view: View,
    active_section: SectionId,
    elevated: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Start on the main view with `home` highlighted.
    pub fn new() -> Self {
        Self {
            view: View::Main,
            active_section: SectionId::Home,
            elevated: false,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn active_section(&self) -> SectionId {
        self.active_section
    }

    pub fn is_elevated(&self) -> bool {
        self.elevated
    }

    /// Header link highlight.
    pub fn is_active(&self, target: NavTarget) -> bool {
        match target {
            NavTarget::Section(section) => self.active_section == section,
            NavTarget::ResearchPage => self.view == View::Research,
        }
    }

    /// Switch view and/or request a scroll.
    pub fn navigate(&mut self, target: NavTarget) -> ScrollRequest {
        let request = match target {
            NavTarget::ResearchPage => {
                self.view = View::Research;
                self.active_section = SectionId::Research;
                ScrollRequest::ToTop
            }
            NavTarget::Section(section) => {
                self.active_section = section;
                match self.view {
                    View::Research => {
                        self.view = View::Main;
                        ScrollRequest::ToSectionAfterSettle {
                            section,
                            delay: SETTLE_DELAY,
                        }
                    }
                    View::Main => ScrollRequest::ToSection { section },
                }
            }
        };
        tracing::info!(to = target.as_str(), view = ?self.view, "navigate");
        request
    }

    /// Navigate by raw anchor id. Unknown ids are ignored.
    pub fn navigate_to_id(&mut self, id: &str) -> Option<ScrollRequest> {
        match id.parse::<NavTarget>() {
            Ok(target) => Some(self.navigate(target)),
            Err(error) => {
                tracing::debug!(%error, "ignoring navigation");
                None
            }
        }
    }

    /// Passive update from the scroll surface of the active view.
    pub fn on_scroll(&mut self, offset: f32, probe: &impl ViewportProbe) {
        self.elevated = offset > ELEVATION_OFFSET;

        if self.view != View::Main {
            return;
        }
        if let Some(section) = self.spy(probe)
            && section != self.active_section
        {
            tracing::debug!(%section, "active section changed");
            self.active_section = section;
        }
    }

    /// First section, in scan order, whose top edge lies in the band.
    pub fn spy(&self, probe: &impl ViewportProbe) -> Option<SectionId> {
        SectionId::ORDER.into_iter().find(|section| {
            probe
                .bounds(section.as_str())
                .is_some_and(|bounds| SpyBand::DEFAULT.contains(bounds.top))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct Layout {
        tops: HashMap<&'static str, f32>,
    }

    impl ViewportProbe for Layout {
        fn bounds(&self, id: &str) -> Option<ElementBounds> {
            self.tops.get(id).map(|top| ElementBounds::new(*top, 800.0))
        }

        fn viewport_height(&self) -> f32 {
            900.0
        }
    }

    fn layout(entries: &[(&'static str, f32)]) -> Layout {
        Layout {
            tops: entries.iter().copied().collect(),
        }
    }

    #[test]
    fn elevation_threshold_is_strict() {
        let mut nav = Navigator::new();
        let probe = layout(&[]);
        nav.on_scroll(50.0, &probe);
        assert!(!nav.is_elevated());
        nav.on_scroll(50.5, &probe);
        assert!(nav.is_elevated());
    }

    #[test]
    fn band_edges_are_inclusive() {
        assert!(SpyBand::DEFAULT.contains(-200.0));
        assert!(SpyBand::DEFAULT.contains(400.0));
        assert!(!SpyBand::DEFAULT.contains(400.1));
    }

    #[test]
    fn earlier_section_wins_ties() {
        let nav = Navigator::new();
        let probe = layout(&[("about", 100.0), ("skills", 300.0)]);
        assert_eq!(nav.spy(&probe), Some(SectionId::About));
    }

    #[test]
    fn skills_is_scanned_before_research() {
        let nav = Navigator::new();
        let probe = layout(&[("research", -100.0), ("skills", 300.0)]);
        assert_eq!(nav.spy(&probe), Some(SectionId::Skills));
    }

    #[test]
    fn no_match_keeps_previous_section() {
        let mut nav = Navigator::new();
        nav.navigate(NavTarget::Section(SectionId::Skills));
        nav.on_scroll(2000.0, &layout(&[("home", -2000.0), ("contact", 900.0)]));
        assert_eq!(nav.active_section(), SectionId::Skills);
    }

    #[test]
    fn spy_is_inactive_in_research_view() {
        let mut nav = Navigator::new();
        nav.navigate(NavTarget::ResearchPage);
        nav.on_scroll(100.0, &layout(&[("home", 0.0)]));
        assert_eq!(nav.active_section(), SectionId::Research);
        assert!(nav.is_elevated());
    }

    #[test]
    fn resolve_missing_section_is_none() {
        let probe = layout(&[("about", 120.0)]);
        let about = ScrollRequest::ToSection {
            section: SectionId::About,
        };
        let contact = ScrollRequest::ToSection {
            section: SectionId::Contact,
        };
        assert_eq!(about.resolve(1000.0, &probe), Some(1120.0));
        assert_eq!(contact.resolve(1000.0, &probe), None);
        assert_eq!(ScrollRequest::ToTop.resolve(1000.0, &probe), Some(0.0));
    }

    #[test]
    fn intersection_ratio_clamps() {
        let bounds = ElementBounds::new(800.0, 400.0);
        assert!((bounds.intersection_ratio(900.0) - 0.25).abs() < f32::EPSILON);
        assert_eq!(ElementBounds::new(2000.0, 400.0).intersection_ratio(900.0), 0.0);
        assert_eq!(ElementBounds::new(-10.0, 100.0).intersection_ratio(900.0), 0.9);
    }
}
