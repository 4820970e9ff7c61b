//! Main view: hero, about, research teaser, skills, and the project grid.

use folio_core::RevealTarget;
use folio_model::content::{
    PROFILE, RESEARCH_TEASER, SKILL_GROUPS, SKILL_NODES, SOCIAL_LINKS,
};
use folio_model::{Accent, NavTarget, Project, ProjectFilter, SectionId, SkillGroup};
use iced::alignment::Vertical;
use iced::widget::{Column, Row, Space, Text, button, column, container, row, space, stack, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use super::header::navigate;
use super::{category_tag, muted, muted_style, on_image, rounded, scrim, section, split};
use crate::component::{
    EmptyState, Tab, accent_tag, remote_image, section_header, skill_icon, social_icon, tab_bar,
    tag,
};
use crate::message::{Message, NavigationMessage, ProjectsMessage};
use crate::state::{AppState, PageLayout};
use crate::theme::{
    BORDER_RADIUS_LG, BORDER_RADIUS_XL, FONT_BOLD, FONT_SEMIBOLD, FONT_SIZE_BODY,
    FONT_SIZE_DISPLAY, FONT_SIZE_HEADING, FONT_SIZE_SMALL, FONT_SIZE_SUBTITLE, FONT_SIZE_TITLE,
    ICON_SIZE_LG, ICON_SIZE_MD, ICON_SIZE_SM, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL,
    SPACING_XS, accent_chip, accent_color, button_card, button_ghost, button_primary,
    button_secondary, glass_card,
};

const PROJECT_IMAGE_HEIGHT: f32 = 220.0;
const PROJECT_CARD_HEIGHT: f32 = 520.0;
const PROJECT_GAP: f32 = 24.0;

pub fn view_main<'a>(state: &'a AppState, layout: &PageLayout) -> Element<'a, Message> {
    column![
        section(layout, "home", hero(state)),
        section(layout, "about", about(state)),
        section(layout, "research", research_teaser(state)),
        section(layout, "skills", skills(state)),
        section(layout, "projects", projects(state)),
    ]
    .into()
}

// =============================================================================
// HERO
// =============================================================================

fn hero(state: &AppState) -> Element<'_, Message> {
    let narrow = state.width_class().is_narrow();

    let socials = SOCIAL_LINKS.iter().fold(row![].spacing(SPACING_SM), |socials, link| {
        socials.push(
            button(social_icon(link.kind).size(ICON_SIZE_MD))
                .on_press(Message::OpenLink(link.url))
                .padding(SPACING_SM)
                .style(button_ghost),
        )
    });

    let intro = column![
        accent_tag(PROFILE.badge, Accent::Indigo),
        text(PROFILE.name).size(FONT_SIZE_DISPLAY).font(FONT_BOLD),
        muted(PROFILE.headline, FONT_SIZE_SUBTITLE),
        row![
            button(text("View Projects").font(FONT_SEMIBOLD))
                .on_press(navigate(NavTarget::Section(SectionId::Projects)))
                .padding([12.0, 24.0])
                .style(button_primary),
            button(text("Contact Me").font(FONT_SEMIBOLD))
                .on_press(navigate(NavTarget::Section(SectionId::Contact)))
                .padding([12.0, 24.0])
                .style(button_secondary),
        ]
        .spacing(SPACING_MD),
        socials,
    ]
    .spacing(SPACING_LG);

    let portrait_size = if narrow { 240.0 } else { 320.0 };
    let nodes = SKILL_NODES
        .iter()
        .fold(row![].spacing(SPACING_SM), |nodes, node| {
            nodes.push(
                container(
                    row![
                        skill_icon(node.icon).size(ICON_SIZE_SM),
                        text(node.name).size(FONT_SIZE_SMALL),
                    ]
                    .spacing(SPACING_XS)
                    .align_y(Alignment::Center),
                )
                .padding([SPACING_XS, SPACING_SM])
                .style(accent_chip(accent_color(node.accent))),
            )
        })
        .wrap();

    let portrait = column![
        container(remote_image(
            &state.images,
            PROFILE.portrait_url,
            portrait_size
        ))
        .width(Length::Fixed(portrait_size))
        .clip(true)
        .style(rounded(BORDER_RADIUS_XL)),
        nodes,
    ]
    .spacing(SPACING_LG)
    .align_x(Alignment::Center);

    let scroll_hint = container(
        button(lucide::chevron_down().size(ICON_SIZE_LG))
            .on_press(Message::Navigation(NavigationMessage::NavigateToId(
                SectionId::About.as_str(),
            )))
            .padding(SPACING_SM)
            .style(button_ghost),
    )
    .center_x(Length::Fill);

    column![
        split(narrow, intro, portrait),
        Space::new().height(Length::Fill),
        scroll_hint,
    ]
    .into()
}

// =============================================================================
// ABOUT
// =============================================================================

fn about(state: &AppState) -> Element<'_, Message> {
    let header = section_header(
        Some("About Me"),
        PROFILE.about_title,
        Some(PROFILE.about_lead),
    );
    if !state.session.reveals().is_revealed(RevealTarget::About) {
        return header;
    }

    let narrative = Column::with_children(
        PROFILE
            .narratives
            .iter()
            .map(|paragraph| muted(*paragraph, FONT_SIZE_SUBTITLE)),
    )
    .spacing(SPACING_MD);

    let identity = column![
        identity_card(lucide::code(), "The Builder", PROFILE.builder, Accent::Indigo),
        identity_card(
            lucide::microscope(),
            "The Researcher",
            PROFILE.researcher,
            Accent::Emerald
        ),
    ]
    .spacing(SPACING_LG);

    column![header, split(state.width_class().is_narrow(), narrative, identity)]
        .spacing(SPACING_LG)
        .into()
}

fn identity_card<'a>(
    icon: Text<'a>,
    title: &'a str,
    body: &'a str,
    accent: Accent,
) -> Element<'a, Message> {
    container(
        row![
            container(icon.size(ICON_SIZE_LG))
                .padding(SPACING_MD)
                .style(accent_chip(accent_color(accent))),
            column![
                text(title).size(FONT_SIZE_TITLE).font(FONT_BOLD),
                muted(body, FONT_SIZE_BODY),
            ]
            .spacing(SPACING_SM),
        ]
        .spacing(SPACING_MD),
    )
    .padding(SPACING_LG)
    .style(glass_card)
    .into()
}

// =============================================================================
// RESEARCH TEASER
// =============================================================================

fn research_teaser(state: &AppState) -> Element<'_, Message> {
    let narrow = state.width_class().is_narrow();

    let intro = column![
        text("The Research Lab").size(FONT_SIZE_HEADING).font(FONT_BOLD),
        muted(
            "My core research focuses on plant leaf disease detection using deep learning (CNN). \
             Currently validating models on Rice and Chilli crops, with future extensions to \
             other species.",
            FONT_SIZE_SUBTITLE,
        ),
    ]
    .spacing(SPACING_SM);
    let status = accent_tag("LAB STATUS: ACTIVE", Accent::Emerald);
    let top: Element<'_, Message> = if narrow {
        column![intro, status].spacing(SPACING_MD).into()
    } else {
        row![container(intro).width(Length::Fill), status]
            .spacing(SPACING_XL)
            .align_y(Alignment::Center)
            .into()
    };

    let feature_height = if narrow { 320.0 } else { 400.0 };
    let feature_overlay = column![
        row![
            container(lucide::microscope().size(ICON_SIZE_LG))
                .padding(SPACING_MD)
                .style(accent_chip(accent_color(Accent::Emerald))),
            space::horizontal(),
            lucide::arrow_right().size(ICON_SIZE_LG),
        ]
        .align_y(Alignment::Center),
        Space::new().height(Length::Fill),
        text("Explore the Findings")
            .size(FONT_SIZE_HEADING)
            .font(FONT_BOLD)
            .style(on_image),
        text(
            "Access datasets, CNN model details, and experimental results for crop disease \
             classification."
        )
        .size(FONT_SIZE_BODY)
        .style(on_image),
    ]
    .spacing(SPACING_SM);

    let feature = button(
        container(stack![
            remote_image(&state.images, RESEARCH_TEASER.feature_image, feature_height),
            container(feature_overlay)
                .padding(SPACING_LG)
                .width(Length::Fill)
                .height(Length::Fixed(feature_height))
                .style(scrim),
        ])
        .clip(true)
        .style(rounded(BORDER_RADIUS_XL)),
    )
    .on_press(Message::Navigation(NavigationMessage::NavigateToId(
        NavTarget::RESEARCH_PAGE_ID,
    )))
    .padding(0)
    .style(button_card);

    let stats = column![
        stat_card(state, RESEARCH_TEASER.crops_image, "02", "Crops Studied (Rice & Chilli)"),
        stat_card(state, RESEARCH_TEASER.data_image, "100%", "Real-World Data"),
        container(
            row![
                column![
                    text("Model Status").size(FONT_SIZE_SMALL).style(muted_style),
                    text("Training Active").size(FONT_SIZE_SUBTITLE).font(FONT_BOLD),
                ]
                .spacing(SPACING_XS),
                space::horizontal(),
                container(lucide::activity().size(ICON_SIZE_MD))
                    .style(accent_chip(accent_color(Accent::Emerald)))
                    .padding(SPACING_SM),
            ]
            .align_y(Alignment::Center),
        )
        .padding(SPACING_MD)
        .style(glass_card),
    ]
    .spacing(SPACING_MD);

    let cards: Element<'_, Message> = if narrow {
        column![feature, stats].spacing(SPACING_MD).into()
    } else {
        row![
            container(feature).width(Length::FillPortion(2)),
            container(stats).width(Length::FillPortion(1)),
        ]
        .spacing(SPACING_MD)
        .into()
    };

    column![top, cards].spacing(SPACING_XL).into()
}

fn stat_card<'a>(
    state: &'a AppState,
    url: &'static str,
    value: &'a str,
    label: &'a str,
) -> Element<'a, Message> {
    const HEIGHT: f32 = 120.0;
    container(stack![
        remote_image(&state.images, url, HEIGHT),
        container(
            column![
                text(value)
                    .size(FONT_SIZE_HEADING)
                    .font(FONT_BOLD)
                    .style(on_image),
                text(label).size(FONT_SIZE_SMALL).style(on_image),
            ]
            .spacing(SPACING_XS),
        )
        .padding(SPACING_MD)
        .width(Length::Fill)
        .height(Length::Fixed(HEIGHT))
        .align_y(Vertical::Bottom)
        .style(scrim),
    ])
    .clip(true)
    .style(rounded(BORDER_RADIUS_LG))
    .into()
}

// =============================================================================
// SKILLS
// =============================================================================

fn skills(state: &AppState) -> Element<'_, Message> {
    let header = section_header(
        Some("Expertise"),
        "Technical System",
        Some(
            "A modular skill set designed for building and scaling complex systems, from \
             backend architecture to frontend interactions and data management.",
        ),
    );
    if !state.session.reveals().is_revealed(RevealTarget::Skills) {
        return header;
    }

    let groups = SKILL_GROUPS.iter().map(skill_group);
    let body: Element<'_, Message> = if state.width_class().is_narrow() {
        Column::with_children(groups).spacing(SPACING_LG).into()
    } else {
        Row::with_children(groups).spacing(SPACING_LG).into()
    };

    column![header, body].spacing(SPACING_LG).into()
}

fn skill_group(group: &'static SkillGroup) -> Element<'static, Message> {
    let color = accent_color(group.accent);

    let skills = group
        .skills
        .iter()
        .fold(column![].spacing(SPACING_SM), |skills, (name, icon)| {
            skills.push(
                row![
                    container(skill_icon(*icon).size(ICON_SIZE_SM)).style(accent_chip(color)),
                    text(*name).size(FONT_SIZE_BODY),
                ]
                .spacing(SPACING_SM)
                .align_y(Alignment::Center),
            )
        });

    container(
        column![
            row![
                container(skill_icon(group.icon).size(ICON_SIZE_LG))
                    .padding(SPACING_MD)
                    .style(accent_chip(color)),
                text(group.title).size(FONT_SIZE_TITLE).font(FONT_BOLD),
            ]
            .spacing(SPACING_MD)
            .align_y(Alignment::Center),
            muted(group.summary, FONT_SIZE_BODY),
            skills,
        ]
        .spacing(SPACING_LG),
    )
    .padding(SPACING_LG)
    .width(Length::FillPortion(1))
    .style(glass_card)
    .into()
}

// =============================================================================
// PROJECTS
// =============================================================================

fn projects(state: &AppState) -> Element<'_, Message> {
    let browser = state.session.browser();
    let header = section_header(
        None,
        "Engineering Projects",
        Some("Translating requirements into reliable software."),
    );

    let tabs = ProjectFilter::ALL
        .iter()
        .map(|filter| {
            Tab::new(
                filter.label(),
                Message::Projects(ProjectsMessage::FilterSelected(*filter)),
            )
        })
        .collect();
    let filter_bar = container(tab_bar(tabs, browser.filter().index())).center_x(Length::Fill);

    let visible = state.visible_projects();
    let grid: Element<'_, Message> = if visible.is_empty() {
        EmptyState::new(
            lucide::search_x().size(40),
            "No projects found in this category.",
        )
        .height(160.0)
        .view()
    } else {
        let columns = state.width_class().columns();
        let rows = visible.chunks(columns).map(|chunk| {
            let cards = chunk
                .iter()
                .map(|project| project_card(state, project))
                .chain(
                    (chunk.len()..columns)
                        .map(|_| Element::from(Space::new().width(Length::FillPortion(1)))),
                );
            Element::from(Row::with_children(cards).spacing(PROJECT_GAP))
        });
        Column::with_children(rows).spacing(PROJECT_GAP).into()
    };

    column![header, filter_bar, grid].spacing(SPACING_LG).into()
}

fn project_card<'a>(state: &'a AppState, project: &'static Project) -> Element<'a, Message> {
    let color = accent_color(project.accent);

    let mut image_layers = stack![remote_image(
        &state.images,
        project.image_url,
        PROJECT_IMAGE_HEIGHT
    )];
    if project.featured {
        image_layers = image_layers.push(
            container(accent_tag("Featured", project.accent))
                .padding(SPACING_MD)
                .align_right(Length::Fill),
        );
    }

    let tags = project
        .tags
        .iter()
        .fold(row![].spacing(SPACING_XS), |tags, label| tags.push(tag(*label)))
        .wrap();

    let body = column![
        category_tag(project),
        text(project.title).size(FONT_SIZE_TITLE).font(FONT_BOLD),
        muted(project.description, FONT_SIZE_BODY),
        tags,
        Space::new().height(Length::Fill),
        row![
            text("View Source Code").size(FONT_SIZE_BODY).font(FONT_BOLD),
            lucide::external_link().size(ICON_SIZE_SM),
        ]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center),
    ]
    .spacing(SPACING_MD)
    .padding(SPACING_LG)
    .height(Length::Fill);

    button(
        container(column![image_layers, body])
            .height(Length::Fixed(PROJECT_CARD_HEIGHT))
            .clip(true),
    )
    .on_press(Message::Projects(ProjectsMessage::Opened(project.id)))
    .padding(0)
    .width(Length::FillPortion(1))
    .style(move |theme: &Theme, status| {
        let mut style = button_card(theme, status);
        if matches!(status, iced::widget::button::Status::Hovered) {
            style.border.color = color;
        }
        style
    })
    .into()
}
