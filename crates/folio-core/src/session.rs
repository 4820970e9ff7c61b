//! The aggregate UI session.
//!
//! [`Session`] wires the navigator, mobile menu, project browser, research
//! carousels, and reveal latches together and owns the side effects that
//! cross them: navigation closes the menu, switching views mounts or
//! unmounts the research carousels, and leaving the main view closes any
//! open project.

use std::time::Duration;

use folio_model::{NavTarget, ProjectFilter, ProjectId, SectionId};
use serde::Serialize;

use crate::browser::ProjectBrowser;
use crate::carousel::{Carousel, CarouselConfig, CarouselSnapshot};
use crate::error::Result;
use crate::menu::{MobileMenu, ScrollLock};
use crate::navigation::{Navigator, ScrollRequest, View, ViewportProbe};
use crate::reveal::{RevealTarget, Reveals};

/// Carousel settings for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub research_gallery: CarouselConfig,
    pub publications: CarouselConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            research_gallery: CarouselConfig::research(),
            publications: CarouselConfig::research(),
        }
    }
}

/// Which carousel a carousel event targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CarouselSlot {
    ResearchGallery,
    Publications,
    DetailGallery,
}

/// Serializable picture of the UI state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub view: View,
    pub active_section: SectionId,
    pub elevated: bool,
    pub menu_open: bool,
    pub filter: ProjectFilter,
    pub selected_project: Option<ProjectId>,
    pub research_gallery: CarouselSnapshot,
    pub publications: CarouselSnapshot,
    pub detail_gallery: Option<CarouselSnapshot>,
    pub revealed: Vec<RevealTarget>,
}

#[derive(Debug)]
pub struct Session {
    navigator: Navigator,
    menu: MobileMenu,
    browser: ProjectBrowser,
    research_gallery: Carousel,
    publications: Carousel,
    reveals: Reveals,
}

impl Session {
    /// Build a session on the main view.
    ///
    /// `gallery_len` and `publications_len` size the research carousels; the
    /// menu takes its scroll lock from `lock`.
    pub fn new(
        config: SessionConfig,
        gallery_len: usize,
        publications_len: usize,
        lock: ScrollLock,
    ) -> Result<Self> {
        Ok(Self {
            navigator: Navigator::new(),
            menu: MobileMenu::new(lock),
            browser: ProjectBrowser::new(),
            research_gallery: Carousel::new(gallery_len, config.research_gallery)?,
            publications: Carousel::new(publications_len, config.publications)?,
            reveals: Reveals::new(),
        })
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn view(&self) -> View {
        self.navigator.view()
    }

    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut MobileMenu {
        &mut self.menu
    }

    pub fn browser(&self) -> &ProjectBrowser {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut ProjectBrowser {
        &mut self.browser
    }

    pub fn reveals(&self) -> &Reveals {
        &self.reveals
    }

    pub fn carousel(&self, slot: CarouselSlot) -> Option<&Carousel> {
        match slot {
            CarouselSlot::ResearchGallery => Some(&self.research_gallery),
            CarouselSlot::Publications => Some(&self.publications),
            CarouselSlot::DetailGallery => self.browser.gallery(),
        }
    }

    pub fn carousel_mut(&mut self, slot: CarouselSlot) -> Option<&mut Carousel> {
        match slot {
            CarouselSlot::ResearchGallery => Some(&mut self.research_gallery),
            CarouselSlot::Publications => Some(&mut self.publications),
            CarouselSlot::DetailGallery => self.browser.gallery_mut(),
        }
    }

    /// Navigate, closing the mobile menu and syncing view-scoped carousels.
    pub fn navigate(&mut self, target: NavTarget, now: Duration) -> ScrollRequest {
        self.menu.close();
        let before = self.navigator.view();
        let request = self.navigator.navigate(target);
        self.sync_view(before, now);
        request
    }

    /// Navigate by raw anchor id; unknown ids change nothing.
    pub fn navigate_to_id(&mut self, id: &str, now: Duration) -> Option<ScrollRequest> {
        let target = match id.parse::<NavTarget>() {
            Ok(target) => target,
            Err(error) => {
                tracing::debug!(%error, "ignoring navigation");
                return None;
            }
        };
        Some(self.navigate(target, now))
    }

    /// Scroll position of the active view changed.
    pub fn on_scroll(&mut self, offset: f32, probe: &impl ViewportProbe) {
        self.navigator.on_scroll(offset, probe);
        self.reveals.observe(self.navigator.view(), probe);
    }

    /// Drive every mounted carousel. Returns true when any slide changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let gallery = self.research_gallery.tick(now);
        let publications = self.publications.tick(now);
        let detail = self.browser.tick(now);
        gallery || publications || detail
    }

    /// Whether any carousel has autoplay scheduled.
    pub fn has_armed_timers(&self) -> bool {
        self.research_gallery.is_playing()
            || self.publications.is_playing()
            || self.browser.gallery().is_some_and(Carousel::is_playing)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            view: self.navigator.view(),
            active_section: self.navigator.active_section(),
            elevated: self.navigator.is_elevated(),
            menu_open: self.menu.is_open(),
            filter: self.browser.filter(),
            selected_project: self.browser.selected(),
            research_gallery: self.research_gallery.snapshot(),
            publications: self.publications.snapshot(),
            detail_gallery: self.browser.gallery().map(Carousel::snapshot),
            revealed: RevealTarget::ALL
                .into_iter()
                .filter(|target| self.reveals.is_revealed(*target))
                .collect(),
        }
    }

    fn sync_view(&mut self, before: View, now: Duration) {
        let after = self.navigator.view();
        if before == after {
            return;
        }
        match after {
            View::Research => {
                self.browser.close();
                self.research_gallery.mount(now);
                self.publications.mount(now);
            }
            View::Main => {
                self.research_gallery.unmount();
                self.publications.unmount();
            }
        }
        tracing::debug!(?before, ?after, "view changed");
    }
}
