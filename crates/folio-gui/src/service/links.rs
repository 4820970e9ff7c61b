//! Outbound links.

use crate::error::GuiError;

/// Open `url` with the platform opener.
///
/// Failures are logged and otherwise ignored.
pub fn open_link(url: &str) {
    tracing::info!(url, "opening link");
    if let Err(error) = open::that(url) {
        let error = GuiError::link_open(url, error);
        tracing::warn!(%error, category = error.category().label(), "link not opened");
    }
}
