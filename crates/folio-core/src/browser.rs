//! Project grid filter and detail selection.

use std::time::Duration;

use folio_model::{Project, ProjectFilter, ProjectId, filter_projects};

use crate::carousel::{Carousel, CarouselConfig};
use crate::error::{CoreError, Result};

/// Filter plus the currently open project, if any.
///
/// The filter and the selection are independent: changing the filter never
/// closes an open project, and a project stays open even when the filter
/// would hide its card.
#[derive(Debug, Clone, Default)]
pub struct ProjectBrowser {
    filter: ProjectFilter,
    selected: Option<ProjectId>,
    gallery: Option<Carousel>,
}

impl ProjectBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> ProjectFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: ProjectFilter) {
        if filter != self.filter {
            tracing::debug!(filter = filter.label(), "project filter changed");
            self.filter = filter;
        }
    }

    /// Cards visible under the current filter, in source order.
    pub fn visible<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        filter_projects(self.filter, projects)
    }

    pub fn selected(&self) -> Option<ProjectId> {
        self.selected
    }

    pub fn selected_project<'a>(&self, projects: &'a [Project]) -> Option<&'a Project> {
        let id = self.selected?;
        projects.iter().find(|project| project.id == id)
    }

    /// Gallery carousel of the open project; `None` when nothing is open or
    /// the project has no gallery images.
    pub fn gallery(&self) -> Option<&Carousel> {
        self.gallery.as_ref()
    }

    pub fn gallery_mut(&mut self) -> Option<&mut Carousel> {
        self.gallery.as_mut()
    }

    /// Open `project`, replacing any current selection in one step.
    pub fn open(&mut self, project: &Project, now: Duration) -> Result<()> {
        let images = project.gallery().len();
        let gallery = if images > 0 {
            let mut carousel = Carousel::new(images, CarouselConfig::detail_gallery())?;
            carousel.mount(now);
            Some(carousel)
        } else {
            None
        };

        tracing::info!(project = %project.id, title = project.title, "project opened");
        self.selected = Some(project.id);
        self.gallery = gallery;
        Ok(())
    }

    /// Open the project with the given id from `projects`.
    pub fn open_id(&mut self, id: ProjectId, projects: &[Project], now: Duration) -> Result<()> {
        let project = projects
            .iter()
            .find(|project| project.id == id)
            .ok_or(CoreError::UnknownProject(id))?;
        self.open(project, now)
    }

    /// Close the detail overlay and tear down its gallery.
    pub fn close(&mut self) {
        if let Some(id) = self.selected.take() {
            tracing::debug!(project = %id, "project closed");
        }
        if let Some(mut gallery) = self.gallery.take() {
            gallery.unmount();
        }
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Drive the detail gallery. Returns true when its slide changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        self.gallery
            .as_mut()
            .is_some_and(|gallery| gallery.tick(now))
    }
}

#[cfg(test)]
mod tests {
    use folio_model::content::PROJECTS;

    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn open_creates_a_running_gallery() {
        let mut browser = ProjectBrowser::new();
        browser.open(&PROJECTS[0], ms(0)).unwrap();
        let gallery = browser.gallery().unwrap();
        assert_eq!(gallery.len(), 3);
        assert!(gallery.is_playing());
        assert!(browser.tick(ms(4000)));
    }

    #[test]
    fn close_drops_the_gallery() {
        let mut browser = ProjectBrowser::new();
        browser.open(&PROJECTS[1], ms(0)).unwrap();
        browser.close();
        assert!(browser.gallery().is_none());
        assert!(!browser.tick(ms(60_000)));
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut browser = ProjectBrowser::new();
        assert_eq!(
            browser.open_id(ProjectId(42), &PROJECTS, ms(0)),
            Err(CoreError::UnknownProject(ProjectId(42)))
        );
        assert!(!browser.is_open());
    }

    #[test]
    fn project_without_detail_opens_without_gallery() {
        let mut bare = PROJECTS[0];
        bare.detail = None;
        let mut browser = ProjectBrowser::new();
        browser.open(&bare, ms(0)).unwrap();
        assert_eq!(browser.selected(), Some(bare.id));
        assert!(browser.gallery().is_none());
    }
}
