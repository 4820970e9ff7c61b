//! Property-based tests for project filtering.

use folio_model::{Accent, Category, Project, ProjectFilter, ProjectId, filter_projects};
use proptest::prelude::*;

fn project(id: u32, research: bool) -> Project {
    Project {
        id: ProjectId(id),
        category: if research {
            Category::Research
        } else {
            Category::Dev
        },
        title: "project",
        description: "",
        image_url: "",
        tags: &[],
        featured: false,
        accent: Accent::Cyan,
        detail: None,
    }
}

fn projects(flags: &[bool]) -> Vec<Project> {
    flags
        .iter()
        .enumerate()
        .map(|(i, research)| project(i as u32, *research))
        .collect()
}

proptest! {
    #[test]
    fn all_returns_full_list_in_order(flags in prop::collection::vec(any::<bool>(), 0..20)) {
        let list = projects(&flags);
        let ids: Vec<ProjectId> = filter_projects(ProjectFilter::All, &list).iter().map(|p| p.id).collect();
        let expected: Vec<ProjectId> = list.iter().map(|p| p.id).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn research_returns_only_research_in_order(flags in prop::collection::vec(any::<bool>(), 0..20)) {
        let list = projects(&flags);
        let filtered = filter_projects(ProjectFilter::Research, &list);
        prop_assert!(filtered.iter().all(|p| p.category == Category::Research));
        prop_assert!(filtered.windows(2).all(|w| w[0].id < w[1].id));
        prop_assert_eq!(filtered.len(), flags.iter().filter(|f| **f).count());
    }

    #[test]
    fn dev_and_research_partition_the_list(flags in prop::collection::vec(any::<bool>(), 0..20)) {
        let list = projects(&flags);
        let dev = filter_projects(ProjectFilter::Dev, &list).len();
        let research = filter_projects(ProjectFilter::Research, &list).len();
        prop_assert_eq!(dev + research, list.len());
    }
}
