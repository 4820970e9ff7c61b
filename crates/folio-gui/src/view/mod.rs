//! View layer.
//!
//! Views are pure functions of [`AppState`]: they read state and return an
//! element tree, never mutate. Each page is a column of fixed-height sections
//! whose heights come from [`PageLayout`], so the scroll-spy and the rendered
//! page agree on where every section sits.

pub mod footer;
pub mod header;
pub mod home;
pub mod mobile_menu;
pub mod project_detail;
pub mod research;

use folio_core::View;
use folio_model::content::PROJECTS;
use folio_model::{Accent, Category, Project};
use iced::widget::{Id, column, container, row, scrollable, stack, text};
use iced::{Border, Element, Length, Theme};

use crate::component::accent_tag;
use crate::message::{Message, NavigationMessage};
use crate::state::{AppState, PageLayout};
use crate::theme::{
    CONTENT_MAX_WIDTH, FolioColors, LINE_HEIGHT_RELAXED, SPACING_LG, SPACING_XL, SPACING_XXL,
};

/// Scrollable id of each page.
pub fn page_scroll_id(view: View) -> Id {
    match view {
        View::Main => Id::new("page-main"),
        View::Research => Id::new("page-research"),
    }
}

/// The whole window: header, active page, and any overlay.
pub fn view_app(state: &AppState) -> Element<'_, Message> {
    let view = state.session.view();
    let layout = state.layout();

    let sections = match view {
        View::Main => home::view_main(state, &layout),
        View::Research => research::view_research(state, &layout),
    };
    let page = column![
        sections,
        footer::view_footer(layout.height_of("contact"), layout.width().is_narrow()),
    ];

    let page = scrollable(page)
        .id(page_scroll_id(view))
        .on_scroll(|viewport| {
            Message::Navigation(NavigationMessage::Scrolled {
                offset: viewport.absolute_offset().y,
                height: viewport.bounds().height,
            })
        })
        .width(Length::Fill)
        .height(Length::Fill);

    let mut base: Element<'_, Message> = column![header::view_header(state), page].into();

    if state.session.menu().is_open() {
        base = stack![base, mobile_menu::view_mobile_menu(state)].into();
    }

    match state.session.browser().selected_project(&PROJECTS) {
        Some(project) => project_detail::view_project_detail(state, project, base),
        None => base,
    }
}

/// A page section: content centered at the reading width inside a block of
/// the height the layout assigns to `id`.
pub(crate) fn section<'a>(
    layout: &PageLayout,
    id: &str,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let height = layout.height_of(id);
    container(container(content).max_width(CONTENT_MAX_WIDTH))
        .center_x(Length::Fill)
        .height(Length::Fixed(height))
        .padding([SPACING_XXL, SPACING_LG])
        .clip(true)
        .into()
}

/// Two blocks side by side on wide windows, stacked on narrow ones.
pub(crate) fn split<'a>(
    narrow: bool,
    first: impl Into<Element<'a, Message>>,
    second: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    if narrow {
        column![first.into(), second.into()]
            .spacing(SPACING_XL)
            .into()
    } else {
        row![
            container(first).width(Length::FillPortion(1)),
            container(second).width(Length::FillPortion(1)),
        ]
        .spacing(SPACING_XL)
        .into()
    }
}

pub(crate) fn muted(content: &str, size: f32) -> Element<'_, Message> {
    text(content)
        .size(size)
        .line_height(LINE_HEIGHT_RELAXED)
        .style(muted_style)
        .into()
}

pub(crate) fn muted_style(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.folio().text_muted),
    }
}

pub(crate) fn on_image(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.folio().text_on_accent),
    }
}

pub(crate) fn scrim(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.folio().scrim.into()),
        ..Default::default()
    }
}

pub(crate) fn rounded(radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        border: Border {
            radius: radius.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Category chip of a project card.
pub(crate) fn category_tag(project: &'static Project) -> Element<'static, Message> {
    match project.category {
        Category::Dev => accent_tag("Development", project.accent),
        Category::Research => accent_tag("Research", Accent::Teal),
    }
}
