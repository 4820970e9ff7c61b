//! Behavioral core of the Folio portfolio.
//!
//! Everything that changes at runtime lives here as plain state machines
//! with explicit transitions: the view router and scroll-spy, the mobile
//! menu and its scroll lock, carousels and their timers, the project
//! browser, reveal latches, and image load status. No type in this crate
//! depends on a UI toolkit or reads the system clock; callers pass time in
//! as a [`std::time::Duration`] since an origin of their choosing.

pub mod browser;
pub mod carousel;
pub mod error;
pub mod images;
pub mod menu;
pub mod navigation;
pub mod reveal;
pub mod session;
pub mod swipe;
pub mod timer;

pub use browser::ProjectBrowser;
pub use carousel::{
    Carousel, CarouselConfig, CarouselSnapshot, DETAIL_GALLERY_INTERVAL, RESEARCH_INTERVAL,
};
pub use error::{CoreError, Result};
pub use images::{ImageCache, ImageStatus, asset_file_name};
pub use menu::{MobileMenu, ScrollLock, ScrollLockGuard};
pub use navigation::{
    ELEVATION_OFFSET, ElementBounds, Navigator, SETTLE_DELAY, ScrollRequest, SpyBand, View,
    ViewportProbe,
};
pub use reveal::{RevealLatch, RevealTarget, Reveals};
pub use session::{CarouselSlot, Session, SessionConfig, SessionSnapshot};
pub use swipe::{SWIPE_THRESHOLD, SwipeOutcome, SwipeTracker};
pub use timer::RepeatingTimer;
