//! Application-level state.
//!
//! This module contains `AppState` which is the root of all state.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use folio_core::{CarouselSlot, ImageCache, ScrollLock, Session, SwipeTracker};
use folio_model::Project;
use folio_model::content::{PROJECTS, PUBLICATIONS, RESEARCH_GALLERY};
use iced::widget::image;

use super::layout::{LayoutProbe, LayoutWidth, PageLayout};
use super::settings::Settings;
use crate::error::GuiError;

/// Scroll surface of the active view, as last reported by Iced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Vertical scroll offset of the active view.
    pub offset: f32,
    /// Window width.
    pub width: f32,
    /// Visible height of the scrollable.
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset: 0.0,
            width: 1280.0,
            height: 860.0,
        }
    }
}

/// Pointer tracking over one carousel, feeding its swipe recognizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    /// Last horizontal pointer position inside the carousel.
    pub last_x: f32,
    pub swipe: SwipeTracker,
}

/// Top-level application state.
///
/// This is the root of all state in the application.
pub struct AppState {
    /// Navigation, menu, project browser, carousels, and reveal latches
    pub session: Session,
    /// Held while the mobile menu overlay is open
    pub scroll_lock: ScrollLock,
    /// Decoded artwork by source URL
    pub images: ImageCache<image::Handle>,
    /// Application settings (persisted)
    pub settings: Settings,
    /// Where settings are saved
    pub settings_path: PathBuf,
    /// Directory the artwork is read from
    pub assets_dir: PathBuf,
    /// OS theme, for `ThemeMode::System`
    pub system_is_dark: bool,
    pub viewport: Viewport,
    pointers: HashMap<CarouselSlot, PointerState>,
    started: Instant,
}

impl AppState {
    /// Create app state with loaded settings.
    pub fn new(
        settings: Settings,
        settings_path: PathBuf,
        assets_dir: PathBuf,
    ) -> Result<Self, GuiError> {
        let scroll_lock = ScrollLock::new();
        let session = Session::new(
            settings.session_config(),
            RESEARCH_GALLERY.len(),
            PUBLICATIONS.len(),
            scroll_lock.clone(),
        )
        .map_err(|error| GuiError::internal(error.to_string()))?;

        Ok(Self {
            session,
            scroll_lock,
            images: ImageCache::new(),
            settings,
            settings_path,
            assets_dir,
            system_is_dark: true,
            viewport: Viewport::default(),
            pointers: HashMap::new(),
            started: Instant::now(),
        })
    }

    /// Time since startup; the clock every carousel timer runs on.
    pub fn now(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn width_class(&self) -> LayoutWidth {
        LayoutWidth::from_width(self.viewport.width)
    }

    /// Projects passing the current filter, in showcase order.
    pub fn visible_projects(&self) -> Vec<&'static Project> {
        self.session.browser().visible(&PROJECTS)
    }

    /// Section geometry of the active view.
    pub fn layout(&self) -> PageLayout {
        PageLayout::for_view(
            self.session.view(),
            self.viewport.width,
            self.visible_projects().len(),
        )
    }

    /// Probe of `layout` at the current scroll position.
    pub fn probe<'a>(&self, layout: &'a PageLayout) -> LayoutProbe<'a> {
        layout.probe(self.viewport.offset, self.viewport.height)
    }

    pub fn pointer(&self, slot: CarouselSlot) -> PointerState {
        self.pointers.get(&slot).copied().unwrap_or_default()
    }

    pub fn pointer_mut(&mut self, slot: CarouselSlot) -> &mut PointerState {
        self.pointers.entry(slot).or_default()
    }

    /// Forget pointer tracking for a carousel that left the screen.
    pub fn reset_pointer(&mut self, slot: CarouselSlot) {
        self.pointers.remove(&slot);
    }
}

#[cfg(test)]
mod tests {
    use folio_core::View;

    use super::*;

    fn state() -> AppState {
        AppState::new(
            Settings::default(),
            PathBuf::from("settings.toml"),
            PathBuf::from("assets"),
        )
        .unwrap()
    }

    #[test]
    fn starts_on_the_main_view() {
        let state = state();
        assert_eq!(state.session.view(), View::Main);
        assert!(!state.scroll_lock.is_locked());
        assert_eq!(state.visible_projects().len(), PROJECTS.len());
    }

    #[test]
    fn layout_tracks_the_window_width() {
        let mut state = state();
        state.viewport.width = 600.0;
        assert!(state.width_class().is_narrow());
        assert!(state.layout().height_of("skills") > 1000.0);
    }

    #[test]
    fn pointer_state_is_per_slot() {
        let mut state = state();
        state.pointer_mut(CarouselSlot::Publications).last_x = 42.0;
        assert_eq!(state.pointer(CarouselSlot::Publications).last_x, 42.0);
        assert_eq!(state.pointer(CarouselSlot::ResearchGallery).last_x, 0.0);

        state.reset_pointer(CarouselSlot::Publications);
        assert_eq!(state.pointer(CarouselSlot::Publications).last_x, 0.0);
    }
}
