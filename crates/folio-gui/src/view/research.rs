//! Research lab page: hero, pipeline, experiment gallery, and publications.

use folio_core::{Carousel, CarouselSlot, RevealTarget};
use folio_model::content::{
    LAB_FACTS, PIPELINE, PUBLICATIONS, RESEARCH_GALLERY, SCHOLAR_PROFILE_URL,
};
use folio_model::{Accent, CarouselItem, CarouselMode, LabFact, NavTarget, PipelineStep, SectionId};
use iced::widget::{Column, Row, button, column, container, row, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use super::header::navigate;
use super::{muted, muted_style, section};
use crate::component::{Slideshow, accent_tag, section_header};
use crate::message::Message;
use crate::state::{AppState, PageLayout};
use crate::theme::{
    FONT_BOLD, FONT_SEMIBOLD, FONT_SIZE_BODY, FONT_SIZE_CAPTION, FONT_SIZE_DISPLAY,
    FONT_SIZE_SMALL, FONT_SIZE_SUBTITLE, FONT_SIZE_TITLE, FolioColors, ICON_SIZE_LG,
    ICON_SIZE_SM, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS, accent_chip,
    accent_color, button_ghost, button_secondary, glass_card,
};

pub fn view_research<'a>(state: &'a AppState, layout: &PageLayout) -> Element<'a, Message> {
    let narrow = state.width_class().is_narrow();
    column![
        section(layout, "lab-hero", lab_hero(narrow)),
        section(layout, "pipeline", pipeline(narrow)),
        section(layout, "gallery", gallery(state, narrow)),
        section(layout, "publications", publications(state, narrow)),
    ]
    .into()
}

fn lab_hero(narrow: bool) -> Element<'static, Message> {
    let back = button(
        row![
            lucide::chevron_left().size(ICON_SIZE_SM),
            text("Back to Portfolio").size(FONT_SIZE_SMALL),
        ]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center),
    )
    .on_press(navigate(NavTarget::Section(SectionId::Home)))
    .padding([SPACING_XS, SPACING_SM])
    .style(button_ghost);

    let title = column![
        text("RESEARCH").size(FONT_SIZE_DISPLAY).font(FONT_BOLD),
        text("LAB_01")
            .size(FONT_SIZE_DISPLAY)
            .font(FONT_BOLD)
            .style(muted_style),
    ];

    let facts = LAB_FACTS.iter().map(lab_fact);
    let facts: Element<'static, Message> = if narrow {
        Column::with_children(facts).spacing(SPACING_LG).into()
    } else {
        Row::with_children(facts).spacing(SPACING_XL).into()
    };

    column![
        back,
        accent_tag("Live Environment", Accent::Rose),
        title,
        facts,
    ]
    .spacing(SPACING_LG)
    .into()
}

fn lab_fact(fact: &'static LabFact) -> Element<'static, Message> {
    let mut block = column![
        text(fact.label.to_uppercase())
            .size(FONT_SIZE_CAPTION)
            .style(muted_style),
        text(fact.value).size(FONT_SIZE_TITLE).font(FONT_SEMIBOLD),
    ]
    .spacing(SPACING_XS);
    if let Some(note) = fact.note {
        block = block.push(text(note).size(FONT_SIZE_CAPTION).style(muted_style));
    }
    container(block).width(Length::FillPortion(1)).into()
}

fn pipeline(narrow: bool) -> Element<'static, Message> {
    let header = section_header(
        None,
        "Research Pipeline",
        Some("A systematic, four-stage process from data acquisition to model validation."),
    );

    let steps = PIPELINE
        .iter()
        .enumerate()
        .map(|(index, step)| pipeline_step(index, step));
    let steps: Element<'static, Message> = if narrow {
        Column::with_children(steps).spacing(SPACING_MD).into()
    } else {
        Row::with_children(steps).spacing(SPACING_MD).into()
    };

    column![header, steps].spacing(SPACING_LG).into()
}

fn pipeline_step(index: usize, step: &'static PipelineStep) -> Element<'static, Message> {
    let icon = match index {
        0 => lucide::database(),
        1 => lucide::code(),
        2 => lucide::cpu(),
        _ => lucide::activity(),
    };

    container(
        column![
            container(icon.size(ICON_SIZE_LG))
                .padding(SPACING_MD)
                .style(accent_chip(accent_color(Accent::Cyan))),
            text(format!("STEP {:02}", index + 1))
                .size(FONT_SIZE_SMALL)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.accent(Accent::Cyan)),
                }),
            text(step.title).size(FONT_SIZE_TITLE).font(FONT_BOLD),
            muted(step.description, FONT_SIZE_BODY),
        ]
        .spacing(SPACING_SM)
        .align_x(Alignment::Center),
    )
    .padding(SPACING_LG)
    .width(Length::FillPortion(1))
    .style(glass_card)
    .into()
}

fn gallery(state: &AppState, narrow: bool) -> Element<'_, Message> {
    let slot = CarouselSlot::ResearchGallery;
    Slideshow::new(slot, RESEARCH_GALLERY.to_vec(), state.session.carousel(slot))
        .mode(CarouselMode::Gallery)
        .height(if narrow { 320.0 } else { 440.0 })
        .view(&state.images)
}

fn publications(state: &AppState, narrow: bool) -> Element<'_, Message> {
    let header = column![
        text("Publications & Citations")
            .size(FONT_SIZE_TITLE * 1.5)
            .font(FONT_BOLD),
        muted(
            "A selection of peer-reviewed papers and articles. For a complete list, please view \
             my Google Scholar profile.",
            FONT_SIZE_SUBTITLE,
        ),
    ]
    .spacing(SPACING_SM);

    if !state.session.reveals().is_revealed(RevealTarget::Publications) {
        return header.into();
    }

    let slot = CarouselSlot::Publications;
    let carousel = state.session.carousel(slot);
    let items: Vec<CarouselItem> = PUBLICATIONS.iter().map(CarouselItem::from).collect();
    let slides = Slideshow::new(slot, items, carousel)
        .mode(CarouselMode::Publication)
        .height(if narrow { 280.0 } else { 360.0 })
        .view(&state.images);

    let current = carousel.map_or(0, Carousel::index);
    let mut links = row![].spacing(SPACING_MD).align_y(Alignment::Center);
    if let Some(publication) = PUBLICATIONS.get(current) {
        links = links.push(
            button(
                row![
                    text("Read on Google Scholar").font(FONT_SEMIBOLD),
                    lucide::external_link().size(ICON_SIZE_SM),
                ]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center),
            )
            .on_press(Message::OpenLink(publication.scholar_url))
            .padding([SPACING_SM, SPACING_MD])
            .style(button_ghost),
        );
    }
    links = links.push(
        button(text("View Full Scholar Profile").font(FONT_BOLD))
            .on_press(Message::OpenLink(SCHOLAR_PROFILE_URL))
            .padding([SPACING_SM, SPACING_LG])
            .style(button_secondary),
    );

    column![header, slides, container(links).center_x(Length::Fill)]
        .spacing(SPACING_LG)
        .into()
}
