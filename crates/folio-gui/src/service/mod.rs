//! Services for background tasks and platform side effects.
//!
//! Async functions here are built for Iced's `Task::perform` pattern.

pub mod images;
pub mod links;

pub use images::{content_image_urls, decode_image, load_image};
pub use links::open_link;
