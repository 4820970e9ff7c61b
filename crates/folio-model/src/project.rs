//! Project showcase types and filtering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::profile::Accent;

/// Stable identifier of a project in the showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Showcase category of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Software development work.
    Dev,
    /// Research tooling and experiments.
    Research,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Research => "research",
        }
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "research" => Ok(Self::Research),
            other => Err(ModelError::UnknownCategory(other.to_string())),
        }
    }
}

/// One slide of a project's detail gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GalleryImage {
    pub url: &'static str,
    pub caption: &'static str,
}

/// Technologies used per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechStack {
    pub frontend: &'static str,
    pub backend: &'static str,
    pub database: &'static str,
}

/// Expanded case-study content shown in the detail overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectDetail {
    pub overview: &'static str,
    pub problem: &'static str,
    pub solution: &'static str,
    pub features: &'static [&'static str],
    pub tech_stack: TechStack,
    pub role: &'static str,
    pub outcome: &'static str,
    /// May be empty; the overlay then shows no gallery.
    pub gallery: &'static [GalleryImage],
}

impl ProjectDetail {
    pub fn has_gallery(&self) -> bool {
        !self.gallery.is_empty()
    }
}

/// A project card in the showcase grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: ProjectId,
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub tags: &'static [&'static str],
    pub featured: bool,
    pub accent: Accent,
    /// `None` renders the "details not available" fallback.
    pub detail: Option<ProjectDetail>,
}

impl Project {
    /// Gallery images of the detail view, empty when there is no detail.
    pub fn gallery(&self) -> &'static [GalleryImage] {
        self.detail.map(|d| d.gallery).unwrap_or(&[])
    }
}

/// Category filter applied to the project grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectFilter {
    #[default]
    All,
    Dev,
    Research,
}

impl ProjectFilter {
    /// All filters in tab order.
    pub const ALL: [Self; 3] = [Self::All, Self::Dev, Self::Research];

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Systems",
            Self::Dev => "Development",
            Self::Research => "Research Tools",
        }
    }

    /// Exact category match; `All` matches everything.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Dev => category == Category::Dev,
            Self::Research => category == Category::Research,
        }
    }

    /// Position of this filter in [`ProjectFilter::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Self::All => 0,
            Self::Dev => 1,
            Self::Research => 2,
        }
    }
}

impl FromStr for ProjectFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "dev" => Ok(Self::Dev),
            "research" => Ok(Self::Research),
            other => Err(ModelError::UnknownFilter(other.to_string())),
        }
    }
}

/// Select the projects matching `filter`, preserving their relative order.
pub fn filter_projects(filter: ProjectFilter, projects: &[Project]) -> Vec<&Project> {
    projects
        .iter()
        .filter(|project| filter.matches(project.category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn project(id: u32, category: Category) -> Project {
        Project {
            id: ProjectId(id),
            category,
            title: "t",
            description: "d",
            image_url: "",
            tags: &[],
            featured: false,
            accent: Accent::Cyan,
            detail: None,
        }
    }

    #[test]
    fn all_keeps_every_project_in_order() {
        let projects = [
            project(1, Category::Dev),
            project(2, Category::Research),
            project(3, Category::Dev),
        ];
        let ids: Vec<u32> = filter_projects(ProjectFilter::All, &projects)
            .iter()
            .map(|p| p.id.0)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn dev_filter_is_exact() {
        let projects = [project(1, Category::Research), project(2, Category::Dev)];
        let filtered = filter_projects(ProjectFilter::Dev, &projects);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, ProjectId(2));
    }

    #[test]
    fn filter_on_empty_list_is_empty() {
        assert!(filter_projects(ProjectFilter::Research, &[]).is_empty());
    }

    #[test]
    fn parse_filter_and_category() {
        assert_eq!("dev".parse::<ProjectFilter>(), Ok(ProjectFilter::Dev));
        assert_eq!("research".parse::<Category>(), Ok(Category::Research));
        assert_eq!(
            "design".parse::<ProjectFilter>(),
            Err(ModelError::UnknownFilter("design".to_string()))
        );
    }

    #[test]
    fn missing_detail_has_no_gallery() {
        assert!(project(1, Category::Dev).gallery().is_empty());
    }
}
