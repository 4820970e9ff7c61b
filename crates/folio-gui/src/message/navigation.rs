//! Navigation messages.

use folio_model::{NavTarget, SectionId};

/// Messages for routing, scroll tracking, and the mobile menu.
#[derive(Debug, Clone)]
pub enum NavigationMessage {
    /// A header link, footer link, or call-to-action was pressed
    Navigate(NavTarget),

    /// A link that names its target by anchor id
    NavigateToId(&'static str),

    /// The active view's scrollable moved
    Scrolled { offset: f32, height: f32 },

    /// The settle delay after a view switch elapsed
    Settled(SectionId),

    /// Hamburger button
    MenuToggled,

    /// Close button inside the mobile overlay
    MenuClosed,
}
