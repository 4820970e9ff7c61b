//! Empty state component.
//!
//! Shown when a list has nothing to display, such as a project filter with
//! no matches.
//!
//! ```rust,ignore
//! EmptyState::new(lucide::search_x().size(40), "No projects found in this category.")
//!     .height(160.0)
//!     .view()
//! ```

use iced::widget::{Space, column, container, text};
use iced::{Alignment, Element, Length, Theme};

use crate::theme::{FONT_SIZE_BODY, FONT_SIZE_SUBTITLE, FolioColors, SPACING_MD, SPACING_SM};

/// Empty state with icon, title, and optional description.
pub struct EmptyState<'a, M> {
    icon: Element<'a, M>,
    title: String,
    description: Option<String>,
    height: Option<f32>,
}

impl<'a, M: 'a> EmptyState<'a, M> {
    /// Create a new empty state with icon and title.
    pub fn new(icon: impl Into<Element<'a, M>>, title: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: None,
            height: None,
        }
    }

    /// Add a description below the title.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Set a fixed height; the content is centered inside it.
    pub fn height(mut self, h: f32) -> Self {
        self.height = Some(h);
        self
    }

    /// Build the element.
    pub fn view(self) -> Element<'a, M> {
        let icon = container(self.icon).style(|theme: &Theme| container::Style {
            text_color: Some(theme.folio().text_muted),
            ..Default::default()
        });

        let title_text = text(self.title)
            .size(FONT_SIZE_SUBTITLE)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.folio().text_muted),
            });

        let mut content = column![icon, Space::new().height(SPACING_MD), title_text];

        if let Some(desc) = self.description {
            content = content.push(Space::new().height(SPACING_SM)).push(
                text(desc)
                    .size(FONT_SIZE_BODY)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.folio().text_muted),
                    }),
            );
        }

        let content = content.align_x(Alignment::Center);

        match self.height {
            Some(h) => container(content)
                .width(Length::Fill)
                .height(Length::Fixed(h))
                .center_x(Length::Fill)
                .center_y(Length::Fixed(h))
                .into(),
            None => container(content)
                .width(Length::Fill)
                .center_x(Length::Fill)
                .into(),
        }
    }
}
