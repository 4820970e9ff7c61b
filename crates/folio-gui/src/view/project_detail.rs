//! Project detail overlay.

use folio_core::CarouselSlot;
use folio_model::content::social_link;
use folio_model::{CarouselItem, Project, ProjectDetail, SocialKind};
use iced::widget::{Column, button, column, container, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use super::{category_tag, muted, split};
use crate::component::{EmptyState, Slideshow, modal, tag};
use crate::message::{Message, ProjectsMessage};
use crate::state::AppState;
use crate::theme::{
    FONT_BOLD, FONT_SEMIBOLD, FONT_SIZE_BODY, FONT_SIZE_HEADING, FONT_SIZE_SMALL,
    FONT_SIZE_TITLE, ICON_SIZE_SM, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS,
    button_primary, button_secondary, glass_card,
};

/// `base` with the detail dialog of `project` on top.
pub fn view_project_detail<'a>(
    state: &'a AppState,
    project: &'static Project,
    base: Element<'a, Message>,
) -> Element<'a, Message> {
    let close = Message::Projects(ProjectsMessage::Closed);

    let tags = project
        .tags
        .iter()
        .fold(row![].spacing(SPACING_XS), |tags, label| tags.push(tag(*label)))
        .wrap();

    let heading = column![
        category_tag(project),
        text(project.title).size(FONT_SIZE_HEADING).font(FONT_BOLD),
        tags,
    ]
    .spacing(SPACING_SM);

    let body: Element<'a, Message> = match &project.detail {
        Some(detail) => {
            let slot = CarouselSlot::DetailGallery;
            let items: Vec<CarouselItem> =
                project.gallery().iter().map(CarouselItem::from).collect();
            let gallery = Slideshow::new(slot, items, state.session.carousel(slot))
                .height(360.0)
                .dots()
                .view(&state.images);

            column![
                gallery,
                detail_body(detail, state.width_class().is_narrow())
            ]
            .spacing(SPACING_LG)
            .into()
        }
        None => EmptyState::new(
            lucide::layers().size(40),
            "Detailed content not available for this project yet.",
        )
        .height(200.0)
        .view(),
    };

    let actions = vec![
        button(
            row![
                lucide::github().size(ICON_SIZE_SM),
                text("View Repository").font(FONT_SEMIBOLD),
            ]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
        )
        .on_press_maybe(social_link(SocialKind::GitHub).map(|link| Message::OpenLink(link.url)))
        .padding([SPACING_SM, SPACING_LG])
        .style(button_primary)
        .into(),
        button(text("Close"))
            .on_press(close.clone())
            .padding([SPACING_SM, SPACING_LG])
            .style(button_secondary)
            .into(),
    ];

    modal(
        base,
        "Project Details",
        column![heading, body].spacing(SPACING_LG).into(),
        close,
        actions,
    )
}

fn detail_body(detail: &'static ProjectDetail, narrow: bool) -> Element<'static, Message> {
    let features = Column::with_children(detail.features.iter().map(|feature| {
        row![
            lucide::chevron_right().size(ICON_SIZE_SM),
            text(*feature).size(FONT_SIZE_BODY),
        ]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center)
        .into()
    }))
    .spacing(SPACING_XS);

    let narrative = column![
        block("Project Overview", muted(detail.overview, FONT_SIZE_BODY)),
        split(
            narrow,
            block("The Problem", muted(detail.problem, FONT_SIZE_BODY)),
            block("The Solution", muted(detail.solution, FONT_SIZE_BODY)),
        ),
        block("Key Features", features.into()),
        block("Project Outcome", muted(detail.outcome, FONT_SIZE_BODY)),
    ]
    .spacing(SPACING_LG);

    let stack = &detail.tech_stack;
    let tech = container(
        column![
            stack_row("Frontend", stack.frontend),
            stack_row("Backend", stack.backend),
            stack_row("Database", stack.database),
        ]
        .spacing(SPACING_SM),
    )
    .padding(SPACING_MD)
    .width(Length::Fill)
    .style(glass_card);

    let role = container(muted(detail.role, FONT_SIZE_BODY))
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(glass_card);

    column![
        narrative,
        block("Tech Stack", tech.into()),
        block("My Contributions", role.into()),
    ]
    .spacing(SPACING_LG)
    .into()
}

fn block<'a>(title: &'a str, content: Element<'a, Message>) -> Element<'a, Message> {
    column![text(title).size(FONT_SIZE_TITLE).font(FONT_BOLD), content]
        .spacing(SPACING_SM)
        .into()
}

fn stack_row(label: &'static str, value: &'static str) -> Element<'static, Message> {
    row![
        container(text(label).size(FONT_SIZE_SMALL).font(FONT_SEMIBOLD)).width(Length::Fixed(96.0)),
        text(value).size(FONT_SIZE_BODY),
    ]
    .spacing(SPACING_MD)
    .align_y(Alignment::Center)
    .into()
}
