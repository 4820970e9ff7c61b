//! Tests for end-to-end session behavior.

use std::collections::HashMap;
use std::time::Duration;

use folio_core::{
    Carousel, CarouselConfig, CarouselSlot, ElementBounds, ProjectBrowser, RevealTarget,
    ScrollLock, ScrollRequest, Session, SessionConfig, SwipeOutcome, SwipeTracker, View,
    ViewportProbe,
};
use folio_model::content::{PROJECTS, PUBLICATIONS, RESEARCH_GALLERY};
use folio_model::{NavTarget, ProjectFilter, SectionId};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn session() -> (Session, ScrollLock) {
    let lock = ScrollLock::new();
    let session = Session::new(
        SessionConfig::default(),
        RESEARCH_GALLERY.len(),
        PUBLICATIONS.len(),
        lock.clone(),
    )
    .unwrap();
    (session, lock)
}

/// Section tops relative to the viewport, 900px tall.
struct Layout(HashMap<&'static str, ElementBounds>);

impl Layout {
    fn new(entries: &[(&'static str, f32, f32)]) -> Self {
        Self(
            entries
                .iter()
                .map(|(id, top, height)| (*id, ElementBounds::new(*top, *height)))
                .collect(),
        )
    }
}

impl ViewportProbe for Layout {
    fn bounds(&self, id: &str) -> Option<ElementBounds> {
        self.0.get(id).copied()
    }

    fn viewport_height(&self) -> f32 {
        900.0
    }
}

#[test]
fn three_items_six_seconds_twelve_seconds_elapsed() {
    let mut carousel = Carousel::new(3, CarouselConfig::new(ms(6000), true)).unwrap();
    carousel.mount(ms(0));
    carousel.tick(ms(12_001));
    assert_eq!(carousel.index(), 2);
}

#[test]
fn pause_freezes_and_resume_continues() {
    let mut carousel = Carousel::new(3, CarouselConfig::research()).unwrap();
    carousel.mount(ms(0));
    carousel.pointer_entered();
    carousel.tick(ms(600_000));
    assert_eq!(carousel.index(), 0);

    carousel.pointer_left(ms(600_000));
    carousel.tick(ms(606_000));
    assert_eq!(carousel.index(), 1);
}

#[test]
fn swipe_sixty_left_is_one_next_and_forty_is_none() {
    let mut carousel = Carousel::new(3, CarouselConfig::research()).unwrap();
    carousel.mount(ms(0));
    let mut tracker = SwipeTracker::new();

    tracker.begin(400.0);
    tracker.update(340.0);
    let outcome = tracker.end();
    assert_eq!(outcome, SwipeOutcome::Next);
    carousel.swipe(outcome, ms(10));
    assert_eq!(carousel.index(), 1);

    tracker.begin(400.0);
    tracker.update(360.0);
    carousel.swipe(tracker.end(), ms(20));
    assert_eq!(carousel.index(), 1);
}

#[test]
fn research_page_from_home() {
    let (mut session, _) = session();
    let request = session.navigate(NavTarget::ResearchPage, ms(0));
    assert_eq!(request, ScrollRequest::ToTop);
    assert_eq!(session.view(), View::Research);
    assert_eq!(session.navigator().active_section(), SectionId::Research);
}

#[test]
fn section_from_research_waits_for_settle() {
    let (mut session, _) = session();
    session.navigate(NavTarget::ResearchPage, ms(0));
    let request = session.navigate(NavTarget::Section(SectionId::Projects), ms(500));
    assert_eq!(
        request,
        ScrollRequest::ToSectionAfterSettle {
            section: SectionId::Projects,
            delay: ms(100),
        }
    );
    assert_eq!(session.view(), View::Main);
    assert_eq!(session.navigator().active_section(), SectionId::Projects);
}

#[test]
fn section_from_main_scrolls_immediately() {
    let (mut session, _) = session();
    let request = session.navigate(NavTarget::Section(SectionId::Contact), ms(0));
    assert_eq!(
        request,
        ScrollRequest::ToSection {
            section: SectionId::Contact
        }
    );
}

#[test]
fn unknown_anchor_is_a_no_op() {
    let (mut session, _) = session();
    let before = session.snapshot();
    assert!(session.navigate_to_id("blog", ms(0)).is_none());
    assert_eq!(session.snapshot(), before);
}

#[test]
fn research_carousels_follow_the_view() {
    let (mut session, _) = session();
    assert!(!session.has_armed_timers());

    session.navigate_to_id("research-page", ms(0));
    assert!(session.has_armed_timers());

    session.tick(ms(6000));
    assert_eq!(session.carousel(CarouselSlot::ResearchGallery).unwrap().index(), 1);

    session.navigate(NavTarget::Section(SectionId::Home), ms(7000));
    assert!(!session.has_armed_timers());
    assert_eq!(session.carousel(CarouselSlot::ResearchGallery).unwrap().index(), 0);
}

#[test]
fn navigation_closes_the_menu_and_releases_the_lock() {
    let (mut session, lock) = session();
    session.menu_mut().open();
    assert!(lock.is_locked());
    session.navigate(NavTarget::Section(SectionId::About), ms(0));
    assert!(!session.menu().is_open());
    assert!(!lock.is_locked());
}

#[test]
fn leaving_the_main_view_closes_the_open_project() {
    let (mut session, _) = session();
    session.browser_mut().open(&PROJECTS[0], ms(0)).unwrap();
    session.navigate(NavTarget::Section(SectionId::Skills), ms(10));
    assert!(session.browser().is_open());

    session.navigate(NavTarget::ResearchPage, ms(20));
    assert_eq!(session.view(), View::Research);
    assert!(!session.browser().is_open());
    assert!(session.carousel(CarouselSlot::DetailGallery).is_none());

    session.navigate(NavTarget::Section(SectionId::Home), ms(30));
    assert!(!session.has_armed_timers());
}

#[test]
fn scroll_spy_and_reveal() {
    let (mut session, _) = session();
    let layout = Layout::new(&[
        ("home", -1200.0, 900.0),
        ("about", -300.0, 1000.0),
        ("skills", 150.0, 1200.0),
        ("research", 1350.0, 900.0),
    ]);
    session.on_scroll(1500.0, &layout);

    let nav = session.navigator();
    assert!(nav.is_elevated());
    assert_eq!(nav.active_section(), SectionId::Skills);
    assert!(session.reveals().is_revealed(RevealTarget::About));
    assert!(session.reveals().is_revealed(RevealTarget::Skills));
    assert!(!session.reveals().is_revealed(RevealTarget::Publications));
}

#[test]
fn opening_replaces_selection_and_close_clears_it() {
    let mut browser = ProjectBrowser::new();
    browser.open(&PROJECTS[0], ms(0)).unwrap();
    assert_eq!(browser.selected(), Some(PROJECTS[0].id));

    browser.open(&PROJECTS[2], ms(1000)).unwrap();
    assert_eq!(browser.selected(), Some(PROJECTS[2].id));
    assert_eq!(browser.gallery().unwrap().len(), 4);
    assert_eq!(browser.gallery().unwrap().index(), 0);

    browser.close();
    assert_eq!(browser.selected(), None);
}

#[test]
fn filter_and_selection_are_independent() {
    let mut browser = ProjectBrowser::new();
    browser.open(&PROJECTS[0], ms(0)).unwrap();
    browser.set_filter(ProjectFilter::Research);
    assert!(browser.is_open());

    let visible: Vec<&str> = browser.visible(&PROJECTS).iter().map(|p| p.title).collect();
    assert_eq!(visible, ["Plant Leaf Disease Detection"]);
}

#[test]
fn detail_gallery_dots_and_hover() {
    let (mut session, _) = session();
    session.browser_mut().open(&PROJECTS[1], ms(0)).unwrap();

    let gallery = session.carousel_mut(CarouselSlot::DetailGallery).unwrap();
    gallery.go_to(3, ms(1000));
    gallery.go_to(9, ms(1000));
    gallery.pointer_entered();
    assert_eq!(gallery.index(), 3);
    assert!(gallery.is_playing());

    session.tick(ms(5000));
    assert_eq!(session.carousel(CarouselSlot::DetailGallery).unwrap().index(), 0);
}

#[test]
fn snapshot_of_a_running_research_page() {
    let (mut session, _) = session();
    session.navigate(NavTarget::ResearchPage, ms(0));
    session.tick(ms(12_001));

    insta::assert_json_snapshot!(session.snapshot(), @r#"
    {
      "view": "research",
      "active_section": "research",
      "elevated": false,
      "menu_open": false,
      "filter": "all",
      "selected_project": null,
      "research_gallery": {
        "index": 2,
        "len": 3,
        "paused": false,
        "mounted": true
      },
      "publications": {
        "index": 0,
        "len": 2,
        "paused": false,
        "mounted": true
      },
      "detail_gallery": null,
      "revealed": []
    }
    "#);
}

#[test]
fn snapshot_serializes_selection() {
    let (mut session, _) = session();
    session.browser_mut().open(&PROJECTS[3], ms(0)).unwrap();
    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["selected_project"], 4);
    assert_eq!(json["detail_gallery"]["len"], 3);
}
