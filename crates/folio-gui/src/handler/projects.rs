//! Project showcase message handler.

use folio_core::CarouselSlot;
use folio_model::content::PROJECTS;
use iced::Task;

use super::MessageHandler;
use crate::message::{Message, ProjectsMessage};
use crate::state::AppState;

/// Handler for the project grid and detail overlay.
pub struct ProjectsHandler;

impl MessageHandler<ProjectsMessage> for ProjectsHandler {
    fn handle(&self, state: &mut AppState, msg: ProjectsMessage) -> Task<Message> {
        match msg {
            ProjectsMessage::FilterSelected(filter) => {
                state.session.browser_mut().set_filter(filter);
            }

            ProjectsMessage::Opened(id) => {
                let now = state.now();
                state.reset_pointer(CarouselSlot::DetailGallery);
                if let Err(error) = state.session.browser_mut().open_id(id, &PROJECTS, now) {
                    tracing::warn!(%error, "project not opened");
                }
            }

            ProjectsMessage::Closed => {
                state.reset_pointer(CarouselSlot::DetailGallery);
                state.session.browser_mut().close();
            }
        }
        Task::none()
    }
}
