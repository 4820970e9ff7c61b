//! Modal dialog overlay component.
//!
//! Provides a modal with backdrop, title, scrollable content, and action
//! buttons. Clicking the backdrop closes the modal.

use iced::widget::{
    button, center, column, container, mouse_area, opaque, row, scrollable, space, stack, text,
};
use iced::{Border, Element, Length, Shadow, Theme, Vector};
use iced_fonts::lucide;

use crate::theme::{
    BORDER_RADIUS_XL, FONT_BOLD, FONT_SIZE_TITLE, FolioColors, ICON_SIZE_MD, MODAL_HEIGHT,
    MODAL_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, button_ghost,
};

// =============================================================================
// MODAL DIALOG
// =============================================================================

/// Creates a modal dialog overlay.
///
/// The modal appears centered on top of the base content with a
/// semi-transparent backdrop. `on_close` is sent by the close button and by
/// a click on the backdrop.
///
/// # Arguments
///
/// * `base` - The background content (entire app view)
/// * `title` - Modal title text
/// * `content` - Modal body content, scrolled when taller than the dialog
/// * `on_close` - Message to send when the modal should close
/// * `actions` - Buttons for the footer, right-aligned
pub fn modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    content: Element<'a, M>,
    on_close: M,
    actions: Vec<Element<'a, M>>,
) -> Element<'a, M> {
    let backdrop = mouse_area(
        container(column![])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|theme: &Theme| container::Style {
                background: Some(theme.folio().backdrop.into()),
                ..Default::default()
            }),
    )
    .on_press(on_close.clone());

    let header = row![
        text(title)
            .size(FONT_SIZE_TITLE)
            .font(FONT_BOLD)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.base.text),
            }),
        space::horizontal(),
        button(
            container(lucide::x().size(ICON_SIZE_MD)).style(|theme: &Theme| container::Style {
                text_color: Some(theme.folio().text_muted),
                ..Default::default()
            })
        )
        .on_press(on_close)
        .padding([4.0, 8.0])
        .style(button_ghost),
    ]
    .align_y(iced::Alignment::Center);

    let action_row = actions
        .into_iter()
        .fold(row![space::horizontal()].spacing(SPACING_SM), |r, action| {
            r.push(action)
        });

    let dialog = container(
        column![
            header,
            scrollable(container(content).padding([SPACING_MD, 0.0])).height(Length::Fill),
            action_row,
        ]
        .spacing(SPACING_MD),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .max_width(MODAL_WIDTH)
    .max_height(MODAL_HEIGHT)
    .padding(SPACING_LG)
    .style(|theme: &Theme| {
        let palette = theme.extended_palette();
        let folio = theme.folio();
        container::Style {
            background: Some(palette.background.base.color.into()),
            border: Border {
                radius: BORDER_RADIUS_XL.into(),
                width: 1.0,
                color: folio.border_default,
            },
            shadow: Shadow {
                color: folio.shadow_strong,
                offset: Vector::new(0.0, 4.0),
                blur_radius: 24.0,
            },
            ..Default::default()
        }
    });

    // Stack layers: base -> backdrop -> dialog
    stack![base, opaque(backdrop), center(opaque(dialog)).padding(SPACING_LG)].into()
}
