//! Navigation message handler.
//!
//! Handles:
//! - Header, footer, and call-to-action links
//! - Scroll events from the active view (scroll-spy, navbar elevation, reveals)
//! - The settle delay after switching back to the main view
//! - Mobile menu open/close

use folio_core::{CarouselSlot, ScrollRequest, View};
use iced::Task;
use iced::widget::{operation, scrollable};

use super::MessageHandler;
use crate::message::{Message, NavigationMessage};
use crate::state::AppState;
use crate::view::page_scroll_id;

/// Handler for navigation messages.
pub struct NavigationHandler;

impl MessageHandler<NavigationMessage> for NavigationHandler {
    fn handle(&self, state: &mut AppState, msg: NavigationMessage) -> Task<Message> {
        match msg {
            NavigationMessage::Navigate(target) => {
                let now = state.now();
                let before = state.session.view();
                let request = state.session.navigate(target, now);
                tracing::info!(to = target.as_str(), "navigate");
                after_navigation(state, before, request)
            }

            NavigationMessage::NavigateToId(id) => {
                let now = state.now();
                let before = state.session.view();
                match state.session.navigate_to_id(id, now) {
                    Some(request) => after_navigation(state, before, request),
                    None => Task::none(),
                }
            }

            NavigationMessage::Scrolled { offset, height } => {
                if state.scroll_lock.is_locked() {
                    return Task::none();
                }
                state.viewport.offset = offset;
                state.viewport.height = height;
                observe_scroll(state);
                Task::none()
            }

            NavigationMessage::Settled(section) => {
                scroll_task(state, ScrollRequest::ToSection { section })
            }

            NavigationMessage::MenuToggled => {
                state.session.menu_mut().toggle();
                Task::none()
            }

            NavigationMessage::MenuClosed => {
                state.session.menu_mut().close();
                Task::none()
            }
        }
    }
}

fn after_navigation(state: &mut AppState, before: View, request: ScrollRequest) -> Task<Message> {
    let after = state.session.view();
    if before != after {
        // The new view mounts a fresh scrollable at the top.
        state.viewport.offset = 0.0;
        match before {
            View::Research => {
                state.reset_pointer(CarouselSlot::ResearchGallery);
                state.reset_pointer(CarouselSlot::Publications);
            }
            View::Main => state.reset_pointer(CarouselSlot::DetailGallery),
        }
    }
    scroll_task(state, request)
}

/// Carry out a scroll request against the active view's scrollable.
///
/// Section targets missing from the active page are dropped.
pub fn scroll_task(state: &mut AppState, request: ScrollRequest) -> Task<Message> {
    if let ScrollRequest::ToSectionAfterSettle { section, delay } = request {
        return Task::perform(tokio::time::sleep(delay), move |_| {
            Message::Navigation(NavigationMessage::Settled(section))
        });
    }

    let layout = state.layout();
    let Some(y) = request.resolve(state.viewport.offset, &state.probe(&layout)) else {
        tracing::debug!(?request, "scroll target not on this page");
        return Task::none();
    };
    let y = y.min((layout.total_height() - state.viewport.height).max(0.0));

    state.viewport.offset = y;
    observe_scroll(state);

    operation::scroll_to(
        page_scroll_id(state.session.view()),
        scrollable::AbsoluteOffset { x: 0.0, y },
    )
}

/// Feed the current offset to the scroll-spy and reveal latches.
pub fn observe_scroll(state: &mut AppState) {
    let layout = state.layout();
    let probe = state.probe(&layout);
    state.session.on_scroll(state.viewport.offset, &probe);
}
