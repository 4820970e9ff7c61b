//! Reusable UI components for Folio Studio.
//!
//! - **Overlays**: `modal`
//! - **Media**: `Slideshow`, `remote_image`
//! - **Navigation**: `tab_bar`, `Tab`
//! - **Display**: `tag`, `accent_tag`, `eyebrow`, `section_header`
//! - **Feedback**: `EmptyState`
//! - **Icons**: `skill_icon`, `social_icon`; otherwise use `iced_fonts::lucide::*`
//!   directly (see <https://lucide.dev/icons/>)
//!
//! Components use the builder pattern or plain functions and return
//! `Element<M>`.

mod carousel;
mod chip;
mod empty_state;
mod icon;
mod modal;
mod remote_image;
mod section_header;
mod tab_bar;

pub use carousel::Slideshow;
pub use chip::{accent_tag, eyebrow, tag};
pub use empty_state::EmptyState;
pub use icon::{LUCIDE_FONT_BYTES, skill_icon, social_icon};
pub use modal::modal;
pub use remote_image::remote_image;
pub use section_header::section_header;
pub use tab_bar::{Tab, tab_bar};
