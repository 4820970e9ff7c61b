//! Main application module for Folio Studio.
//!
//! This module implements the Iced 0.14.0 application using the builder pattern.
//! The architecture follows the Elm pattern: State → Message → Update → View.
//!
//! # Key Design Principles
//!
//! - **All state changes happen in `update()`** - Views are pure functions
//! - **No channels/polling** - Use `Task::perform` for async operations
//! - **Timers are state** - The tick subscription only runs while a carousel is armed
//!
//! # Module Structure
//!
//! - `keyboard` - Global key bindings
//! - `subscription` - Keyboard, theme, resize, and carousel tick sources

mod keyboard;
pub mod subscription;

use std::path::PathBuf;

use folio_core::View;
use folio_model::content::PROJECTS;
use iced::theme::Mode;
use iced::{Element, Subscription, Task, Theme};

use crate::constants::window_title;
use crate::error::GuiError;
use crate::handler::{
    CarouselHandler, MessageHandler, NavigationHandler, ProjectsHandler, observe_scroll,
};
use crate::message::Message;
use crate::service::{content_image_urls, load_image, open_link};
use crate::state::{AppState, Settings};
use crate::theme::{HEADER_HEIGHT, folio_theme};
use crate::view::view_app;

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
///
/// This is the root of the Iced application. It holds the application state
/// and implements the Elm architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. Returns the initial state and one load task
    /// per piece of artwork.
    pub fn new(
        settings: Settings,
        settings_path: PathBuf,
        assets_dir: PathBuf,
    ) -> Result<(Self, Task<Message>), GuiError> {
        let mut state = AppState::new(settings, settings_path, assets_dir)?;

        let loads: Vec<Task<Message>> = content_image_urls()
            .into_iter()
            .filter(|url| state.images.request(url))
            .map(|url| {
                let dir = state.assets_dir.clone();
                Task::perform(load_image(dir, url), move |result| Message::ImageLoaded {
                    url,
                    result,
                })
            })
            .collect();
        tracing::info!(
            images = loads.len(),
            assets = %state.assets_dir.display(),
            "loading artwork"
        );

        Ok((Self { state }, Task::batch(loads)))
    }

    /// Update application state in response to a message.
    ///
    /// This is the core of the Elm architecture - all state changes happen here.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // View-specific messages
            // =================================================================
            Message::Navigation(msg) => NavigationHandler.handle(&mut self.state, msg),
            Message::Carousel(msg) => CarouselHandler.handle(&mut self.state, msg),
            Message::Projects(msg) => ProjectsHandler.handle(&mut self.state, msg),

            // =================================================================
            // Outbound
            // =================================================================
            Message::OpenLink(url) => {
                open_link(url);
                Task::none()
            }

            // =================================================================
            // Background task results
            // =================================================================
            Message::ImageLoaded { url, result } => {
                self.state.images.resolve(url, result);
                Task::none()
            }

            // =================================================================
            // Global events
            // =================================================================
            Message::Tick => {
                let now = self.state.now();
                self.state.session.tick(now);
                Task::none()
            }

            Message::KeyPressed(key, modifiers) => self.handle_key_press(key, modifiers),

            Message::SystemThemeChanged(mode) => {
                self.state.system_is_dark = matches!(mode, Mode::Dark);
                Task::none()
            }

            Message::WindowResized(size) => {
                self.state.viewport.width = size.width;
                self.state.viewport.height = (size.height - HEADER_HEIGHT).max(0.0);
                if !self.state.width_class().is_narrow() {
                    self.state.session.menu_mut().close();
                }
                observe_scroll(&mut self.state);
                Task::none()
            }

            Message::ToggleTheme => {
                let display = &mut self.state.settings.display;
                display.theme_mode = display.theme_mode.next();
                let theme = display.theme_mode.label();
                tracing::info!(theme, "theme changed");
                let saved = Settings::save_theme_to(&self.state.settings_path, display.theme_mode);
                if let Err(error) = saved {
                    tracing::warn!(%error, "settings not saved");
                }
                Task::none()
            }

            Message::Noop => Task::none(),
        }
    }

    /// Render the current state.
    pub fn view(&self) -> Element<'_, Message> {
        view_app(&self.state)
    }

    /// Window title: the active page, plus the open project if any.
    pub fn title(&self) -> String {
        let page = match self.state.session.view() {
            View::Main => "Portfolio",
            View::Research => "Research Lab",
        };
        let project = self
            .state
            .session
            .browser()
            .selected_project(&PROJECTS)
            .map(|project| project.title);
        window_title(page, project)
    }

    pub fn theme(&self) -> Theme {
        folio_theme(
            self.state.settings.display.theme_mode,
            self.state.system_is_dark,
        )
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use folio_core::{CarouselSlot, RevealTarget};
    use folio_model::{NavTarget, SectionId};
    use iced::Size;
    use tempfile::TempDir;

    use super::*;
    use crate::message::{NavigationMessage, ProjectsMessage};
    use crate::theme::ThemeMode;

    fn app(dir: &TempDir) -> App {
        let (app, _task) = App::new(
            Settings::default(),
            dir.path().join("settings.toml"),
            dir.path().join("assets"),
        )
        .unwrap();
        app
    }

    #[test]
    fn startup_requests_all_artwork() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir);
        assert_eq!(app.state.images.len(), content_image_urls().len());
    }

    #[test]
    fn failed_artwork_is_recorded() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        let url = content_image_urls()[0];
        let _ = app.update(Message::ImageLoaded {
            url,
            result: Err(GuiError::internal("missing")),
        });
        assert_eq!(
            app.state.images.status(url),
            folio_core::ImageStatus::Failed
        );
    }

    #[test]
    fn corrupt_artwork_falls_back_to_the_placeholder() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        let url = content_image_urls()[0];
        let assets = dir.path().join("assets");
        std::fs::create_dir_all(&assets).unwrap();
        let name = folio_core::asset_file_name(url).unwrap();
        std::fs::write(assets.join(name), b"definitely not a jpeg").unwrap();

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let result = runtime.block_on(crate::service::load_image(assets, url));
        assert!(result.is_err());

        let _ = app.update(Message::ImageLoaded { url, result });
        assert_eq!(
            app.state.images.status(url),
            folio_core::ImageStatus::Failed
        );
    }

    #[test]
    fn toggling_the_theme_persists_it() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        let before = app.state.settings.display.theme_mode;
        let _ = app.update(Message::ToggleTheme);
        assert_eq!(app.state.settings.display.theme_mode, before.next());

        let saved = Settings::load_from(&dir.path().join("settings.toml"));
        assert_eq!(saved.display.theme_mode, before.next());
    }

    #[test]
    fn theme_toggle_does_not_persist_startup_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        let mut settings = Settings::default();
        settings.assets.directory = Some(dir.path().join("one-off"));
        let (mut app, _task) =
            App::new(settings, path.clone(), dir.path().join("one-off")).unwrap();

        let _ = app.update(Message::ToggleTheme);
        let saved = Settings::load_from(&path);
        assert_eq!(saved.display.theme_mode, app.state.settings.display.theme_mode);
        assert_eq!(saved.assets.directory, None);
        assert!(app.state.settings.assets.directory.is_some());
    }

    #[test]
    fn system_theme_follows_the_os() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        app.state.settings.display.theme_mode = ThemeMode::System;
        let _ = app.update(Message::SystemThemeChanged(Mode::Light));
        assert!(!app.state.system_is_dark);
        let _ = app.update(Message::SystemThemeChanged(Mode::Dark));
        assert!(app.state.system_is_dark);
    }

    #[test]
    fn widening_the_window_closes_the_menu() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        let _ = app.update(Message::WindowResized(Size::new(500.0, 900.0)));
        let _ = app.update(Message::Navigation(NavigationMessage::MenuToggled));
        assert!(app.state.session.menu().is_open());

        let _ = app.update(Message::WindowResized(Size::new(500.0, 700.0)));
        assert!(app.state.session.menu().is_open());

        let _ = app.update(Message::WindowResized(Size::new(1400.0, 900.0)));
        assert!(!app.state.session.menu().is_open());
        assert!(!app.state.scroll_lock.is_locked());
    }

    #[test]
    fn resize_reveals_sections_now_in_view() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        let _ = app.update(Message::WindowResized(Size::new(1280.0, 3000.0)));
        assert!(app.state.session.reveals().is_revealed(RevealTarget::About));
    }

    #[test]
    fn title_names_the_open_project() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        assert!(app.title().starts_with("Portfolio"));

        let _ = app.update(Message::Projects(ProjectsMessage::Opened(PROJECTS[0].id)));
        assert!(app.title().starts_with(PROJECTS[0].title));

        let _ = app.update(Message::Navigation(NavigationMessage::Navigate(
            NavTarget::ResearchPage,
        )));
        assert!(app.title().starts_with("Research Lab"));
        assert!(!app.title().contains(PROJECTS[0].title));
    }

    #[tokio::test]
    async fn ticks_advance_the_research_gallery() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        let _ = app.update(Message::Navigation(NavigationMessage::Navigate(
            NavTarget::ResearchPage,
        )));
        assert!(app.state.session.has_armed_timers());
        let _ = app.update(Message::Tick);
        let gallery = app.state.session.carousel(CarouselSlot::ResearchGallery);
        assert_eq!(gallery.map(|c| c.index()), Some(0));

        let _ = app.update(Message::Navigation(NavigationMessage::Navigate(
            NavTarget::Section(SectionId::Home),
        )));
        assert!(!app.state.session.has_armed_timers());
    }
}
