//! Small pills: technology tags, accent badges, and eyebrow labels.

use folio_model::Accent;
use iced::widget::{container, text};
use iced::{Border, Element, Theme};

use crate::theme::{
    BORDER_RADIUS_FULL, BORDER_WIDTH_THIN, FONT_SEMIBOLD, FONT_SIZE_CAPTION, FONT_SIZE_SMALL,
    FolioColors, SPACING_SM, SPACING_XS, accent_chip, accent_color,
};

/// Neutral technology tag.
pub fn tag<'a, M: 'a>(label: &'a str) -> Element<'a, M> {
    container(text(label).size(FONT_SIZE_SMALL))
        .padding([SPACING_XS, SPACING_SM + SPACING_XS])
        .style(|theme: &Theme| {
            let folio = theme.folio();
            container::Style {
                background: Some(folio.surface.into()),
                text_color: Some(folio.text_secondary),
                border: Border {
                    radius: BORDER_RADIUS_FULL.into(),
                    width: BORDER_WIDTH_THIN,
                    color: folio.border_default,
                },
                ..Default::default()
            }
        })
        .into()
}

/// Pill tinted with a content accent.
pub fn accent_tag<'a, M: 'a>(label: &'a str, accent: Accent) -> Element<'a, M> {
    container(text(label).size(FONT_SIZE_CAPTION).font(FONT_SEMIBOLD))
        .padding([SPACING_XS, SPACING_SM + SPACING_XS])
        .style(accent_chip(accent_color(accent)))
        .into()
}

/// Uppercase eyebrow above a heading, in the primary color.
pub fn eyebrow<'a, M: 'a>(label: &'a str) -> Element<'a, M> {
    container(text(label.to_uppercase()).size(FONT_SIZE_CAPTION).font(FONT_SEMIBOLD))
        .padding([SPACING_XS, SPACING_SM + SPACING_XS])
        .style(|theme: &Theme| accent_chip(theme.palette().primary)(theme))
        .into()
}
