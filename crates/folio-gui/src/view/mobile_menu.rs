//! Full-window navigation overlay for narrow windows.
//!
//! While open, the overlay covers the page and holds the scroll lock, so
//! the page underneath neither scrolls nor updates the scroll-spy.

use folio_model::NAV_LINKS;
use folio_model::content::SOCIAL_LINKS;
use iced::widget::{Space, button, column, container, opaque, row, space, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use super::header::navigate;
use crate::component::social_icon;
use crate::message::{Message, NavigationMessage};
use crate::state::AppState;
use crate::theme::{
    FONT_BOLD, FONT_SIZE_HEADING, ICON_SIZE_LG, SPACING_LG, SPACING_MD, SPACING_XL, button_ghost,
    button_nav, with_alpha,
};

pub fn view_mobile_menu(state: &AppState) -> Element<'_, Message> {
    let navigator = state.session.navigator();

    let close = row![
        space::horizontal(),
        button(lucide::x().size(ICON_SIZE_LG))
            .on_press(Message::Navigation(NavigationMessage::MenuClosed))
            .padding(SPACING_MD)
            .style(button_ghost),
    ];

    let links = NAV_LINKS.iter().fold(
        column![].spacing(SPACING_MD).align_x(Alignment::Center),
        |links, link| {
            links.push(
                button(text(link.mobile_label).size(FONT_SIZE_HEADING).font(FONT_BOLD))
                    .on_press(navigate(link.target))
                    .padding([SPACING_MD, SPACING_XL])
                    .style(button_nav(navigator.is_active(link.target))),
            )
        },
    );

    let socials = SOCIAL_LINKS.iter().fold(row![].spacing(SPACING_LG), |socials, link| {
        socials.push(
            button(social_icon(link.kind).size(ICON_SIZE_LG))
                .on_press(Message::OpenLink(link.url))
                .padding(SPACING_MD)
                .style(button_ghost),
        )
    });

    let content = column![
        close,
        Space::new().height(Length::Fill),
        links,
        Space::new().height(SPACING_XL),
        socials,
        Space::new().height(Length::Fill),
    ]
    .align_x(Alignment::Center)
    .padding(SPACING_LG);

    opaque(
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|theme: &Theme| container::Style {
                background: Some(
                    with_alpha(theme.extended_palette().background.base.color, 0.97).into(),
                ),
                ..Default::default()
            }),
    )
}
