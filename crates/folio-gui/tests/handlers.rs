//! Tests for message handlers driving the application state.

use std::path::PathBuf;

use folio_core::{CarouselSlot, RevealTarget, View};
use folio_gui::handler::{CarouselHandler, MessageHandler, NavigationHandler, ProjectsHandler};
use folio_gui::message::{CarouselMessage, NavigationMessage, ProjectsMessage};
use folio_gui::state::{AppState, Settings};
use folio_model::content::PROJECTS;
use folio_model::{NavTarget, ProjectFilter, SectionId};

fn state() -> AppState {
    AppState::new(
        Settings::default(),
        PathBuf::from("settings.toml"),
        PathBuf::from("assets"),
    )
    .unwrap()
}

fn navigate(state: &mut AppState, target: NavTarget) {
    let _ = NavigationHandler.handle(state, NavigationMessage::Navigate(target));
}

fn scrolled(state: &mut AppState, offset: f32) {
    let height = state.viewport.height;
    let _ = NavigationHandler.handle(state, NavigationMessage::Scrolled { offset, height });
}

#[test]
fn research_link_switches_the_page() {
    let mut state = state();
    scrolled(&mut state, 900.0);
    navigate(&mut state, NavTarget::ResearchPage);

    assert_eq!(state.session.view(), View::Research);
    assert_eq!(state.viewport.offset, 0.0);
    assert!(state.session.has_armed_timers());
}

#[test]
fn research_id_matches_the_research_link() {
    let mut state = state();
    let _ = NavigationHandler.handle(
        &mut state,
        NavigationMessage::NavigateToId(NavTarget::RESEARCH_PAGE_ID),
    );
    assert_eq!(state.session.view(), View::Research);
}

#[test]
fn unknown_id_changes_nothing() {
    let mut state = state();
    let before = state.session.snapshot();
    let _ = NavigationHandler.handle(&mut state, NavigationMessage::NavigateToId("blog"));
    assert_eq!(state.session.snapshot(), before);
}

#[test]
fn section_link_scrolls_to_the_section() {
    let mut state = state();
    navigate(&mut state, NavTarget::Section(SectionId::Skills));

    let layout = state.layout();
    let top = layout.slot("skills").map(|slot| slot.top);
    assert_eq!(Some(state.viewport.offset), top);
    assert_eq!(state.session.navigator().active_section(), SectionId::Skills);
}

#[test]
fn contact_scroll_is_clamped_to_the_page() {
    let mut state = state();
    navigate(&mut state, NavTarget::Section(SectionId::Contact));

    let max = state.layout().total_height() - state.viewport.height;
    assert!(state.viewport.offset <= max);
}

#[test]
fn scrolling_reveals_sections() {
    let mut state = state();
    assert!(!state.session.reveals().is_revealed(RevealTarget::Skills));

    let skills_top = state.layout().slot("skills").map_or(0.0, |slot| slot.top);
    scrolled(&mut state, skills_top - 200.0);
    assert!(state.session.reveals().is_revealed(RevealTarget::Skills));

    scrolled(&mut state, 0.0);
    assert!(state.session.reveals().is_revealed(RevealTarget::Skills));
    assert!(!state.session.navigator().is_elevated());
}

#[test]
fn scroll_is_ignored_while_the_menu_is_open() {
    let mut state = state();
    let _ = NavigationHandler.handle(&mut state, NavigationMessage::MenuToggled);
    assert!(state.scroll_lock.is_locked());

    scrolled(&mut state, 2000.0);
    assert_eq!(state.viewport.offset, 0.0);
    assert!(!state.session.navigator().is_elevated());

    let _ = NavigationHandler.handle(&mut state, NavigationMessage::MenuClosed);
    assert!(!state.scroll_lock.is_locked());
}

#[test]
fn menu_link_closes_the_menu() {
    let mut state = state();
    let _ = NavigationHandler.handle(&mut state, NavigationMessage::MenuToggled);
    navigate(&mut state, NavTarget::Section(SectionId::About));
    assert!(!state.session.menu().is_open());
    assert!(!state.scroll_lock.is_locked());
}

#[test]
fn filter_changes_the_page_height() {
    let mut state = state();
    let all = state.layout().height_of("projects");

    let _ = ProjectsHandler.handle(
        &mut state,
        ProjectsMessage::FilterSelected(ProjectFilter::Research),
    );
    assert_eq!(state.visible_projects().len(), 1);
    assert!(state.layout().height_of("projects") < all);
}

#[test]
fn opening_a_project_creates_its_gallery() {
    let mut state = state();
    let project = &PROJECTS[1];
    let _ = ProjectsHandler.handle(&mut state, ProjectsMessage::Opened(project.id));

    assert_eq!(state.session.browser().selected(), Some(project.id));
    let gallery = state.session.carousel(CarouselSlot::DetailGallery);
    assert_eq!(gallery.map(|g| g.len()), Some(project.gallery().len()));
    assert!(state.session.has_armed_timers());

    let _ = ProjectsHandler.handle(&mut state, ProjectsMessage::Closed);
    assert!(state.session.carousel(CarouselSlot::DetailGallery).is_none());
}

#[test]
fn drag_past_the_threshold_swipes() {
    let mut state = state();
    navigate(&mut state, NavTarget::ResearchPage);
    let slot = CarouselSlot::ResearchGallery;

    let mut send = |msg| {
        let _ = CarouselHandler.handle(&mut state, msg);
    };
    send(CarouselMessage::PointerEntered(slot));
    send(CarouselMessage::PointerMoved(slot, 400.0));
    send(CarouselMessage::PointerPressed(slot));
    send(CarouselMessage::PointerMoved(slot, 330.0));
    send(CarouselMessage::PointerReleased(slot));

    let gallery = state.session.carousel(slot);
    assert_eq!(gallery.map(|g| g.index()), Some(1));
}

#[test]
fn short_drag_does_not_swipe() {
    let mut state = state();
    navigate(&mut state, NavTarget::ResearchPage);
    let slot = CarouselSlot::ResearchGallery;

    for msg in [
        CarouselMessage::PointerMoved(slot, 400.0),
        CarouselMessage::PointerPressed(slot),
        CarouselMessage::PointerMoved(slot, 450.0),
        CarouselMessage::PointerReleased(slot),
    ] {
        let _ = CarouselHandler.handle(&mut state, msg);
    }
    assert_eq!(state.session.carousel(slot).map(|g| g.index()), Some(0));
}

#[test]
fn hover_pauses_the_research_gallery() {
    let mut state = state();
    navigate(&mut state, NavTarget::ResearchPage);
    let slot = CarouselSlot::ResearchGallery;

    let _ = CarouselHandler.handle(&mut state, CarouselMessage::PointerEntered(slot));
    assert!(state.session.carousel(slot).is_some_and(|g| !g.is_playing()));

    let _ = CarouselHandler.handle(&mut state, CarouselMessage::PointerExited(slot));
    assert!(state.session.carousel(slot).is_some_and(|g| g.is_playing()));
}

#[test]
fn dots_jump_to_a_slide() {
    let mut state = state();
    let _ = ProjectsHandler.handle(&mut state, ProjectsMessage::Opened(PROJECTS[1].id));
    let slot = CarouselSlot::DetailGallery;

    let _ = CarouselHandler.handle(&mut state, CarouselMessage::GoTo(slot, 2));
    assert_eq!(state.session.carousel(slot).map(|g| g.index()), Some(2));

    let _ = CarouselHandler.handle(&mut state, CarouselMessage::GoTo(slot, 99));
    assert_eq!(state.session.carousel(slot).map(|g| g.index()), Some(2));
}
