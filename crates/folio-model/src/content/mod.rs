//! Static portfolio content.
//!
//! Everything here is compile-time data; the UI filters and renders it but
//! never mutates it.

mod profile;
mod projects;
mod research;

pub use profile::{CONTACT_LINKS, PROFILE, SKILL_GROUPS, SKILL_NODES, SOCIAL_LINKS};
pub use projects::PROJECTS;
pub use research::{
    LAB_FACTS, PIPELINE, PUBLICATIONS, RESEARCH_GALLERY, RESEARCH_TEASER, SCHOLAR_PROFILE_URL,
};

use crate::profile::{SocialKind, SocialLink};
use crate::project::{Project, ProjectId};

/// Look up a showcase project by id.
pub fn project_by_id(id: ProjectId) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

/// The social profile of the given kind, if the author has one.
pub fn social_link(kind: SocialKind) -> Option<&'static SocialLink> {
    SOCIAL_LINKS.iter().find(|link| link.kind == kind)
}
