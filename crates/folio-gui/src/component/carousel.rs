//! Slideshow component.
//!
//! Renders one [`Carousel`] from `folio_core`: the active slide with its
//! caption, previous/next controls, a progress bar, and optional dot
//! indicators. Pointer events over the slide are forwarded for hover pause
//! and swipe recognition.
//!
//! ```rust,ignore
//! Slideshow::new(CarouselSlot::Publications, items, session.carousel(slot))
//!     .mode(CarouselMode::Publication)
//!     .height(420.0)
//!     .view(&state.images)
//! ```

use folio_core::{Carousel, CarouselSlot, ImageCache};
use folio_model::{CarouselItem, CarouselMode};
use iced::alignment::Vertical;
use iced::widget::{
    Space, Text, button, column, container, image, mouse_area, progress_bar, row, space, stack,
    text,
};
use iced::{Alignment, Border, Element, Length, Theme};
use iced_fonts::lucide;

use super::chip::{eyebrow, tag};
use super::remote_image::remote_image;
use crate::message::{CarouselMessage, Message};
use crate::theme::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_XL, DOT_ACTIVE_WIDTH, DOT_SIZE, FONT_BOLD, FONT_SIZE_BODY,
    FONT_SIZE_SMALL, FONT_SIZE_TITLE, FolioColors, ICON_SIZE_MD, SPACING_LG, SPACING_MD,
    SPACING_SM, SPACING_XS, progress_bar_primary,
};

/// Builder for a carousel element.
pub struct Slideshow<'a> {
    slot: CarouselSlot,
    items: Vec<CarouselItem>,
    state: Option<&'a Carousel>,
    mode: CarouselMode,
    height: f32,
    dots: bool,
}

impl<'a> Slideshow<'a> {
    pub fn new(slot: CarouselSlot, items: Vec<CarouselItem>, state: Option<&'a Carousel>) -> Self {
        Self {
            slot,
            items,
            state,
            mode: CarouselMode::default(),
            height: 420.0,
            dots: false,
        }
    }

    pub fn mode(mut self, mode: CarouselMode) -> Self {
        self.mode = mode;
        self
    }

    /// Height of the slide area.
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Show a dot per slide below the progress bar.
    pub fn dots(mut self) -> Self {
        self.dots = true;
        self
    }

    /// Build the element. An empty carousel renders nothing.
    pub fn view(self, images: &ImageCache<image::Handle>) -> Element<'a, Message> {
        let len = self.items.len();
        if len == 0 {
            return Space::new().into();
        }
        let slot = self.slot;
        let index = self.state.map_or(0, Carousel::index).min(len - 1);
        let item = self.items[index];

        let caption = container(caption(item, self.mode))
            .padding(SPACING_LG)
            .width(Length::Fill)
            .style(|theme: &Theme| container::Style {
                background: Some(theme.folio().scrim.into()),
                ..Default::default()
            });

        let mut layers = stack![
            remote_image(images, item.image_url, self.height),
            container(caption)
                .width(Length::Fill)
                .height(Length::Fixed(self.height))
                .align_y(Vertical::Bottom),
        ];

        if len > 1 {
            layers = layers.push(
                container(
                    row![
                        arrow(lucide::chevron_left(), CarouselMessage::Previous(slot)),
                        space::horizontal(),
                        arrow(lucide::chevron_right(), CarouselMessage::Next(slot)),
                    ]
                    .align_y(Alignment::Center),
                )
                .padding(SPACING_MD)
                .width(Length::Fill)
                .height(Length::Fixed(self.height))
                .center_y(Length::Fixed(self.height)),
            );
        }

        let slide = mouse_area(
            container(layers)
                .width(Length::Fill)
                .clip(true)
                .style(|theme: &Theme| container::Style {
                    border: Border {
                        radius: BORDER_RADIUS_XL.into(),
                        width: 1.0,
                        color: theme.folio().border_subtle,
                    },
                    ..Default::default()
                }),
        )
        .on_enter(Message::Carousel(CarouselMessage::PointerEntered(slot)))
        .on_exit(Message::Carousel(CarouselMessage::PointerExited(slot)))
        .on_move(move |point| Message::Carousel(CarouselMessage::PointerMoved(slot, point.x)))
        .on_press(Message::Carousel(CarouselMessage::PointerPressed(slot)))
        .on_release(Message::Carousel(CarouselMessage::PointerReleased(slot)));

        let progress = self.state.and_then(Carousel::progress).unwrap_or(0.0);
        let footer = row![
            container(
                progress_bar(0.0..=1.0, progress)
                    .girth(4.0)
                    .style(progress_bar_primary)
            )
            .width(Length::Fill),
            text(format!("{:02} / {:02}", index + 1, len))
                .size(FONT_SIZE_SMALL)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.folio().text_muted),
                }),
        ]
        .spacing(SPACING_MD)
        .align_y(Alignment::Center);

        let mut content = column![slide, footer].spacing(SPACING_MD);
        if self.dots {
            content = content.push(dots(slot, len, index));
        }
        content.into()
    }
}

fn caption<'a>(item: CarouselItem, mode: CarouselMode) -> Element<'a, Message> {
    let mut body = column![
        eyebrow(mode.label()),
        text(item.title)
            .size(FONT_SIZE_TITLE)
            .font(FONT_BOLD)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.folio().text_on_accent),
            }),
    ]
    .spacing(SPACING_SM);

    if let Some(description) = item.description {
        body = body.push(text(description).size(FONT_SIZE_BODY).style(|theme: &Theme| {
            text::Style {
                color: Some(theme.folio().text_on_accent),
            }
        }));
    }

    if mode.shows_venue() {
        let chips = [item.venue, item.year]
            .into_iter()
            .flatten()
            .fold(row![].spacing(SPACING_XS), |chips, label| chips.push(tag(label)));
        body = body.push(chips);
    }

    body.into()
}

fn arrow<'a>(icon: Text<'a>, message: CarouselMessage) -> Element<'a, Message> {
    button(icon.size(ICON_SIZE_MD))
        .on_press(Message::Carousel(message))
        .padding(SPACING_SM)
        .style(|theme: &Theme, status| {
            let folio = theme.folio();
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => folio.surface_hover,
                _ => folio.scrim,
            };
            button::Style {
                background: Some(background.into()),
                text_color: folio.text_on_accent,
                border: Border {
                    radius: BORDER_RADIUS_FULL.into(),
                    width: 1.0,
                    color: folio.border_subtle,
                },
                ..Default::default()
            }
        })
        .into()
}

fn dots<'a>(slot: CarouselSlot, len: usize, active: usize) -> Element<'a, Message> {
    let indicators = (0..len).fold(row![].spacing(SPACING_SM), |indicators, i| {
        let is_active = i == active;
        let width = if is_active { DOT_ACTIVE_WIDTH } else { DOT_SIZE };
        indicators.push(
            button(Space::new().width(width).height(DOT_SIZE))
                .on_press(Message::Carousel(CarouselMessage::GoTo(slot, i)))
                .padding(0)
                .style(move |theme: &Theme, _status| {
                    let color = if is_active {
                        theme.palette().primary
                    } else {
                        theme.folio().border_default
                    };
                    button::Style {
                        background: Some(color.into()),
                        border: Border {
                            radius: BORDER_RADIUS_FULL.into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    }
                }),
        )
    });
    container(indicators).center_x(Length::Fill).into()
}
