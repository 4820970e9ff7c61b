//! Keyboard shortcut handlers.
//!
//! Handles:
//! - Escape (close the project detail, otherwise the mobile menu)
//! - Arrow Left/Right (step the detail gallery while a project is open)

use folio_core::CarouselSlot;
use iced::Task;
use iced::keyboard;
use iced::keyboard::key::Named;

use crate::app::App;
use crate::handler::{CarouselHandler, MessageHandler, NavigationHandler, ProjectsHandler};
use crate::message::{CarouselMessage, Message, NavigationMessage, ProjectsMessage};

impl App {
    /// Handle keyboard shortcuts.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_key_press(
        &mut self,
        key: keyboard::Key,
        _modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        let detail_open = self.state.session.browser().is_open();

        match key.as_ref() {
            // Escape: innermost overlay first
            keyboard::Key::Named(Named::Escape) => {
                if detail_open {
                    ProjectsHandler.handle(&mut self.state, ProjectsMessage::Closed)
                } else if self.state.session.menu().is_open() {
                    NavigationHandler.handle(&mut self.state, NavigationMessage::MenuClosed)
                } else {
                    Task::none()
                }
            }

            keyboard::Key::Named(Named::ArrowRight) if detail_open => CarouselHandler.handle(
                &mut self.state,
                CarouselMessage::Next(CarouselSlot::DetailGallery),
            ),

            keyboard::Key::Named(Named::ArrowLeft) if detail_open => CarouselHandler.handle(
                &mut self.state,
                CarouselMessage::Previous(CarouselSlot::DetailGallery),
            ),

            _ => Task::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_model::content::PROJECTS;
    use iced::keyboard::{Key, Modifiers};
    use tempfile::TempDir;

    use super::*;
    use crate::state::Settings;

    fn app(dir: &TempDir) -> App {
        let (app, _task) = App::new(
            Settings::default(),
            dir.path().join("settings.toml"),
            dir.path().join("assets"),
        )
        .unwrap();
        app
    }

    fn press(app: &mut App, named: Named) {
        let _ = app.update(Message::KeyPressed(Key::Named(named), Modifiers::empty()));
    }

    #[test]
    fn escape_closes_the_detail_before_the_menu() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        let _ = app.update(Message::Navigation(NavigationMessage::MenuToggled));
        let _ = app.update(Message::Projects(ProjectsMessage::Opened(PROJECTS[1].id)));

        press(&mut app, Named::Escape);
        assert!(!app.state.session.browser().is_open());
        assert!(app.state.session.menu().is_open());

        press(&mut app, Named::Escape);
        assert!(!app.state.session.menu().is_open());
    }

    #[test]
    fn arrows_step_the_detail_gallery() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        let _ = app.update(Message::Projects(ProjectsMessage::Opened(PROJECTS[1].id)));
        let index = |app: &App| {
            app.state
                .session
                .carousel(CarouselSlot::DetailGallery)
                .map(|gallery| gallery.index())
        };

        press(&mut app, Named::ArrowRight);
        assert_eq!(index(&app), Some(1));
        press(&mut app, Named::ArrowLeft);
        press(&mut app, Named::ArrowLeft);
        let len = PROJECTS[1].gallery().len();
        assert_eq!(index(&app), Some(len - 1));
    }

    #[test]
    fn arrows_without_a_detail_do_nothing() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        press(&mut app, Named::ArrowRight);
        assert!(app.state.session.carousel(CarouselSlot::DetailGallery).is_none());
    }
}
