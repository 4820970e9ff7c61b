//! Contact section and copyright line, shared by both pages.

use folio_model::content::{CONTACT_LINKS, PROFILE};
use folio_model::SocialLink;
use iced::alignment::Horizontal;
use iced::widget::{Column, Row, Space, button, column, container, row, text};
use iced::{Alignment, Element, Length, Theme};

use super::{muted, muted_style};
use crate::component::{eyebrow, social_icon};
use crate::constants::copyright;
use crate::message::Message;
use crate::theme::{
    CONTENT_MAX_WIDTH, FONT_BOLD, FONT_SIZE_BODY, FONT_SIZE_CAPTION, FONT_SIZE_DISPLAY,
    FONT_SIZE_SMALL, FONT_SIZE_SUBTITLE, ICON_SIZE_LG, SPACING_LG, SPACING_MD, SPACING_SM,
    SPACING_XL, SPACING_XXL, button_card, with_alpha,
};

/// The contact block, `height` pixels tall.
pub fn view_footer(height: f32, narrow: bool) -> Element<'static, Message> {
    let pitch = column![
        eyebrow("Contact"),
        text("Ready to Innovate?")
            .size(FONT_SIZE_DISPLAY)
            .font(FONT_BOLD)
            .align_x(Horizontal::Center),
        container(muted(PROFILE.contact_pitch, FONT_SIZE_SUBTITLE)).max_width(640.0),
    ]
    .spacing(SPACING_MD)
    .align_x(Alignment::Center);

    let links = CONTACT_LINKS.iter().map(contact_link);
    let links: Element<'static, Message> = if narrow {
        Column::with_children(links).spacing(SPACING_MD).into()
    } else {
        Row::with_children(links).spacing(SPACING_MD).into()
    };

    let content = column![
        pitch,
        links,
        Space::new().height(Length::Fill),
        text(copyright()).size(FONT_SIZE_CAPTION).style(muted_style),
    ]
    .spacing(SPACING_XL)
    .align_x(Alignment::Center)
    .max_width(CONTENT_MAX_WIDTH);

    container(content)
        .center_x(Length::Fill)
        .height(Length::Fixed(height))
        .padding([SPACING_XXL, SPACING_LG])
        .style(|theme: &Theme| container::Style {
            background: Some(with_alpha(theme.extended_palette().background.weak.color, 0.4).into()),
            ..Default::default()
        })
        .into()
}

fn contact_link(link: &'static SocialLink) -> Element<'static, Message> {
    button(
        row![
            container(social_icon(link.kind).size(ICON_SIZE_LG)).padding(SPACING_SM),
            column![
                text(link.label).size(FONT_SIZE_BODY).font(FONT_BOLD),
                text(link.subtitle).size(FONT_SIZE_SMALL).style(muted_style),
            ]
            .spacing(2.0),
        ]
        .spacing(SPACING_MD)
        .align_y(Alignment::Center),
    )
    .on_press(Message::OpenLink(link.url))
    .padding(SPACING_LG)
    .width(Length::FillPortion(1))
    .style(button_card)
    .into()
}
