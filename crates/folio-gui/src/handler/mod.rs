//! Message handler architecture.
//!
//! Each handler implements [`MessageHandler`] for one message type, and
//! `App::update()` dispatches to it:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Navigation(msg) => NavigationHandler.handle(&mut self.state, msg),
//!         Message::Carousel(msg) => CarouselHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```

mod carousel;
mod navigation;
mod projects;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use carousel::CarouselHandler;
pub use navigation::{NavigationHandler, observe_scroll, scroll_task};
pub use projects::ProjectsHandler;

/// Trait for handling messages in the Iced architecture.
///
/// Each handler is responsible for a specific message type and can access the
/// full application state.
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
