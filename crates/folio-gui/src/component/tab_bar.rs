//! Tab bar navigation component.
//!
//! A row of pill tabs with the active tab filled. Used for the project
//! category filter.

use iced::widget::{button, container, row, text};
use iced::{Border, Element, Length, Theme};

use crate::theme::{
    BORDER_RADIUS_FULL, BORDER_WIDTH_THIN, FONT_SEMIBOLD, FONT_SIZE_BODY, FolioColors,
    SPACING_LG, SPACING_SM, SPACING_XS,
};

// =============================================================================
// TAB DEFINITION
// =============================================================================

/// A tab item for the tab bar.
pub struct Tab<M> {
    /// Tab label text
    pub label: String,
    /// Message to send when tab is clicked
    pub message: M,
}

impl<M> Tab<M> {
    /// Create a new tab.
    pub fn new(label: impl Into<String>, message: M) -> Self {
        Self {
            label: label.into(),
            message,
        }
    }
}

// =============================================================================
// TAB BAR COMPONENT
// =============================================================================

/// Creates a row of pill tabs with `active_index` highlighted.
///
/// ```rust,ignore
/// let tabs = ProjectFilter::ALL
///     .iter()
///     .map(|filter| Tab::new(filter.label(), Message::FilterSelected(*filter)))
///     .collect();
///
/// let bar = tab_bar(tabs, state.filter.index());
/// ```
pub fn tab_bar<'a, M: Clone + 'a>(tabs: Vec<Tab<M>>, active_index: usize) -> Element<'a, M> {
    let mut tab_row = row![].spacing(SPACING_SM);

    for (index, tab) in tabs.into_iter().enumerate() {
        let is_active = index == active_index;

        let tab_button = button(
            container(text(tab.label).size(FONT_SIZE_BODY).font(FONT_SEMIBOLD))
                .padding([SPACING_XS, SPACING_SM])
                .center_x(Length::Shrink),
        )
        .on_press(tab.message)
        .padding([SPACING_SM, SPACING_LG])
        .style(move |theme: &Theme, status| {
            let palette = theme.extended_palette();
            let folio = theme.folio();

            if is_active {
                button::Style {
                    background: Some(palette.primary.base.color.into()),
                    text_color: folio.text_on_accent,
                    border: Border {
                        radius: BORDER_RADIUS_FULL.into(),
                        width: 0.0,
                        color: palette.primary.base.color,
                    },
                    ..Default::default()
                }
            } else {
                let background = match status {
                    button::Status::Hovered => folio.surface_hover,
                    _ => folio.surface,
                };
                button::Style {
                    background: Some(background.into()),
                    text_color: folio.text_secondary,
                    border: Border {
                        radius: BORDER_RADIUS_FULL.into(),
                        width: BORDER_WIDTH_THIN,
                        color: folio.border_default,
                    },
                    ..Default::default()
                }
            }
        });

        tab_row = tab_row.push(tab_button);
    }

    tab_row.wrap().into()
}
