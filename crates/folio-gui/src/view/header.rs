//! Header bar with navigation.
//!
//! Wide windows show every navigation link inline; below the narrow
//! breakpoint the links collapse into a menu button that opens the mobile
//! overlay. The bar gains a background and shadow once the page is scrolled
//! past the elevation offset.

use folio_model::{NAV_LINKS, NavLink, NavTarget, SectionId};
use iced::widget::{Space, button, container, row, space, text};
use iced::{Alignment, Border, Element, Length, Shadow, Theme, Vector};
use iced_fonts::lucide;

use crate::message::{Message, NavigationMessage};
use crate::state::AppState;
use crate::theme::{
    BORDER_WIDTH_THIN, FONT_BOLD, FONT_SIZE_BODY, FONT_SIZE_TITLE, FolioColors, HEADER_HEIGHT,
    ICON_SIZE_MD, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, button_ghost, button_nav,
    button_primary,
};

pub fn view_header(state: &AppState) -> Element<'_, Message> {
    let navigator = state.session.navigator();
    let elevated = navigator.is_elevated();

    let brand = button(
        row![
            text("AS").size(FONT_SIZE_TITLE).font(FONT_BOLD).style(|theme: &Theme| {
                text::Style {
                    color: Some(theme.palette().primary),
                }
            }),
            text("Anupa.Dev").size(FONT_SIZE_TITLE).font(FONT_BOLD),
        ]
        .spacing(SPACING_SM),
    )
    .on_press(navigate(NavTarget::Section(SectionId::Home)))
    .padding([SPACING_XS, SPACING_SM])
    .style(button_ghost);

    let theme_button = button(theme_icon(state))
        .on_press(Message::ToggleTheme)
        .padding(SPACING_SM)
        .style(button_ghost);

    let mut bar = row![brand, space::horizontal()]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center);

    if state.width_class().is_narrow() {
        bar = bar.push(theme_button).push(
            button(lucide::menu().size(ICON_SIZE_MD))
                .on_press(Message::Navigation(NavigationMessage::MenuToggled))
                .padding(SPACING_SM)
                .style(button_ghost),
        );
    } else {
        for link in NAV_LINKS {
            bar = bar.push(nav_button(link, navigator.is_active(link.target)));
        }
        bar = bar.push(Space::new().width(SPACING_SM)).push(theme_button);
    }

    container(bar)
        .padding([0.0, SPACING_LG])
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .center_y(Length::Fixed(HEADER_HEIGHT))
        .style(move |theme: &Theme| {
            let folio = theme.folio();
            if elevated {
                container::Style {
                    background: Some(folio.header_elevated.into()),
                    border: Border {
                        width: BORDER_WIDTH_THIN,
                        color: folio.border_subtle,
                        ..Default::default()
                    },
                    shadow: Shadow {
                        color: folio.shadow,
                        offset: Vector::new(0.0, 4.0),
                        blur_radius: 16.0,
                    },
                    ..Default::default()
                }
            } else {
                container::Style {
                    background: Some(theme.extended_palette().background.base.color.into()),
                    ..Default::default()
                }
            }
        })
        .into()
}

fn nav_button(link: &'static NavLink, active: bool) -> Element<'static, Message> {
    let label = text(link.label).size(FONT_SIZE_BODY);
    if link.action {
        button(label)
            .on_press(navigate(link.target))
            .padding([SPACING_SM, SPACING_MD])
            .style(button_primary)
            .into()
    } else {
        button(label)
            .on_press(navigate(link.target))
            .padding([SPACING_SM, SPACING_MD])
            .style(button_nav(active))
            .into()
    }
}

fn theme_icon(state: &AppState) -> Element<'static, Message> {
    let mode = state.settings.display.theme_mode;
    if mode.is_dark(state.system_is_dark) {
        lucide::sun().size(ICON_SIZE_MD).into()
    } else {
        lucide::moon().size(ICON_SIZE_MD).into()
    }
}

pub(crate) fn navigate(target: NavTarget) -> Message {
    Message::Navigation(NavigationMessage::Navigate(target))
}
