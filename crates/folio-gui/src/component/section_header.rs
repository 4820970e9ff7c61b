//! Section heading block.

use iced::alignment::Horizontal;
use iced::widget::{Space, column, text};
use iced::{Alignment, Element, Theme};

use super::chip::eyebrow;
use crate::theme::{
    FONT_BOLD, FONT_SIZE_HEADING, FONT_SIZE_SUBTITLE, FolioColors, LINE_HEIGHT_RELAXED, SPACING_MD,
    SPACING_SM,
};

/// Eyebrow pill, heading, and optional subtitle, centered.
pub fn section_header<'a, M: 'a>(
    label: Option<&'a str>,
    title: &'a str,
    subtitle: Option<&'a str>,
) -> Element<'a, M> {
    let mut block = column![].spacing(SPACING_SM).align_x(Alignment::Center);

    if let Some(label) = label {
        block = block.push(eyebrow(label)).push(Space::new().height(SPACING_SM));
    }

    block = block.push(
        text(title)
            .size(FONT_SIZE_HEADING)
            .font(FONT_BOLD)
            .align_x(Horizontal::Center),
    );

    if let Some(subtitle) = subtitle {
        block = block.push(
            text(subtitle)
                .size(FONT_SIZE_SUBTITLE)
                .line_height(LINE_HEIGHT_RELAXED)
                .align_x(Horizontal::Center)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.folio().text_muted),
                }),
        );
    }

    block.push(Space::new().height(SPACING_MD)).into()
}
