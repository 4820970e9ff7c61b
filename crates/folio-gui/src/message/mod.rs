//! Message module for Folio Studio.
//!
//! This module defines the message hierarchy for the Elm-style architecture.
//! All user interactions and events flow through these message types.

pub mod carousel;
pub mod navigation;
pub mod projects;

use iced::keyboard;
use iced::widget::image;

use crate::error::GuiError;

pub use carousel::CarouselMessage;
pub use navigation::NavigationMessage;
pub use projects::ProjectsMessage;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // View-specific messages
    // =========================================================================
    /// Routing, scrolling, and the mobile menu
    Navigation(NavigationMessage),

    /// Carousel controls and pointer gestures
    Carousel(CarouselMessage),

    /// Project filter and detail overlay
    Projects(ProjectsMessage),

    // =========================================================================
    // Outbound
    // =========================================================================
    /// Open a link with the platform opener
    OpenLink(&'static str),

    // =========================================================================
    // Background task results
    // =========================================================================
    /// An artwork file finished loading
    ImageLoaded {
        url: &'static str,
        result: Result<image::Handle, GuiError>,
    },

    // =========================================================================
    // Global events
    // =========================================================================
    /// Carousel timer tick
    Tick,

    /// Keyboard event
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// System theme changed (for ThemeMode::System)
    SystemThemeChanged(iced::theme::Mode),

    /// Main window was resized
    WindowResized(iced::Size),

    /// Header theme button
    ToggleTheme,

    /// No operation
    Noop,
}
