//! Application state management.
//!
//! - **AppState**: Root state wrapping the behavioral `Session`
//! - **PageLayout**: Fixed section geometry feeding the scroll-spy
//! - **Settings**: Persisted user preferences

mod app_state;
pub mod layout;
pub mod settings;

pub use app_state::{AppState, PointerState, Viewport};
pub use layout::{LayoutProbe, LayoutWidth, PageLayout, SectionSlot, WIDE_BREAKPOINT};
pub use settings::{AssetSettings, CarouselSettings, DisplaySettings, Settings};
