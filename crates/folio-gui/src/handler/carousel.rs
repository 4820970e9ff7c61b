//! Carousel message handler.
//!
//! Controls (arrows, dots) and pointer gestures. Hovering pauses autoplay
//! when the carousel is configured to; a horizontal drag past the swipe
//! threshold steps one slide.

use folio_core::{Carousel, CarouselSlot};
use iced::Task;

use super::MessageHandler;
use crate::message::{CarouselMessage, Message};
use crate::state::AppState;

/// Handler for carousel messages.
pub struct CarouselHandler;

impl MessageHandler<CarouselMessage> for CarouselHandler {
    fn handle(&self, state: &mut AppState, msg: CarouselMessage) -> Task<Message> {
        let now = state.now();

        match msg {
            CarouselMessage::Next(slot) => with_carousel(state, slot, |c| c.next(now)),
            CarouselMessage::Previous(slot) => with_carousel(state, slot, |c| c.previous(now)),
            CarouselMessage::GoTo(slot, index) => {
                with_carousel(state, slot, |c| c.go_to(index, now));
            }

            CarouselMessage::PointerEntered(slot) => {
                with_carousel(state, slot, Carousel::pointer_entered);
            }
            CarouselMessage::PointerExited(slot) => {
                state.pointer_mut(slot).swipe.cancel();
                with_carousel(state, slot, |c| c.pointer_left(now));
            }
            CarouselMessage::PointerMoved(slot, x) => {
                let pointer = state.pointer_mut(slot);
                pointer.last_x = x;
                pointer.swipe.update(x);
            }
            CarouselMessage::PointerPressed(slot) => {
                let pointer = state.pointer_mut(slot);
                let x = pointer.last_x;
                pointer.swipe.begin(x);
            }
            CarouselMessage::PointerReleased(slot) => {
                let outcome = state.pointer_mut(slot).swipe.end();
                with_carousel(state, slot, |c| c.swipe(outcome, now));
            }
        }

        Task::none()
    }
}

/// Apply `f` to the carousel in `slot`; a slot with no carousel is ignored.
fn with_carousel(state: &mut AppState, slot: CarouselSlot, f: impl FnOnce(&mut Carousel)) {
    if let Some(carousel) = state.session.carousel_mut(slot) {
        f(carousel);
        tracing::trace!(?slot, index = carousel.index(), "carousel updated");
    }
}
