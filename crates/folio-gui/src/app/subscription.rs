//! Application subscriptions.
//!
//! This module centralizes all Iced subscriptions for the application.
//! Subscriptions are reactive event sources that run alongside the app.
//!
//! # Subscription Overview
//!
//! | Subscription | Interval | Condition | Purpose |
//! |--------------|----------|-----------|---------|
//! | Keyboard | Continuous | Always | Escape and gallery arrows |
//! | System Theme | Continuous | Always | Track OS theme changes |
//! | Window Resize | Continuous | Always | Breakpoints and scroll-spy geometry |
//! | Carousel Tick | 100ms | A carousel is armed | Autoplay |
//!
//! # Architecture
//!
//! Subscriptions are batched together in `create_subscription()` and run
//! concurrently. The carousel tick returns `Subscription::none()` when no
//! carousel has autoplay scheduled, so an idle main page does not poll.

use std::time::Duration;

use iced::Subscription;
use iced::keyboard;
use iced::window;
use iced::{system, time};

use crate::message::Message;
use crate::state::AppState;

/// Autoplay deadlines are checked this often.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Create all application subscriptions.
pub fn create_subscription(state: &AppState) -> Subscription<Message> {
    Subscription::batch([
        keyboard_subscription(),
        system_theme_subscription(),
        resize_subscription(),
        tick_subscription(state),
    ])
}

/// Keyboard event subscription.
fn keyboard_subscription() -> Subscription<Message> {
    keyboard::listen().map(|event| match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => Message::KeyPressed(key, modifiers),
        _ => Message::Noop,
    })
}

/// System theme change subscription.
///
/// Monitors OS theme changes (light/dark) for ThemeMode::System.
fn system_theme_subscription() -> Subscription<Message> {
    system::theme_changes().map(Message::SystemThemeChanged)
}

/// Window resize subscription.
fn resize_subscription() -> Subscription<Message> {
    window::resize_events().map(|(_id, size)| Message::WindowResized(size))
}

/// Carousel autoplay tick.
///
/// # Conditional Behavior
/// - Active: When any mounted carousel is playing
/// - Inactive: Otherwise (main page without an open project, or all paused)
fn tick_subscription(state: &AppState) -> Subscription<Message> {
    if state.session.has_armed_timers() {
        time::every(TICK_INTERVAL).map(|_| Message::Tick)
    } else {
        Subscription::none()
    }
}
