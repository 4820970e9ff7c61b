//! Artwork with a placeholder.
//!
//! Shows the decoded image once it is ready; until then, or when the file
//! could not be loaded, a tinted block with an icon takes its place at the
//! same size.

use folio_core::{ImageCache, ImageStatus};
use iced::widget::{center, container, image};
use iced::{ContentFit, Element, Length, Theme};
use iced_fonts::lucide;

use crate::theme::{FolioColors, ICON_SIZE_XL};

/// Artwork for `url`, `height` pixels tall and filling the available width.
pub fn remote_image<'a, M: 'a>(
    images: &ImageCache<image::Handle>,
    url: &str,
    height: f32,
) -> Element<'a, M> {
    if let Some(handle) = images.get(url) {
        return image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into();
    }

    let icon = match images.status(url) {
        ImageStatus::Failed => lucide::image().size(ICON_SIZE_XL),
        ImageStatus::Pending | ImageStatus::Ready => lucide::loader().size(ICON_SIZE_XL),
    };

    container(center(icon))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .style(|theme: &Theme| {
            let folio = theme.folio();
            container::Style {
                background: Some(folio.placeholder.into()),
                text_color: Some(folio.text_muted),
                ..Default::default()
            }
        })
        .into()
}
