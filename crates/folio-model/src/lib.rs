//! Data model for the Folio portfolio.
//!
//! Everything in this crate is static and known at compile time. The
//! [`content`] module holds the actual portfolio data; the remaining modules
//! define the types that data is expressed in.

pub mod carousel;
pub mod content;
pub mod error;
pub mod profile;
pub mod project;
pub mod research;
pub mod section;

pub use carousel::{CarouselItem, CarouselMode};
pub use error::{ModelError, Result};
pub use profile::{Accent, Profile, SkillGroup, SkillIcon, SkillNode, SocialKind, SocialLink};
pub use project::{
    Category, GalleryImage, Project, ProjectDetail, ProjectFilter, ProjectId, TechStack,
    filter_projects,
};
pub use research::{LabFact, PipelineStep, Publication, ResearchTeaser};
pub use section::{NAV_LINKS, NavLink, NavTarget, SectionId};
