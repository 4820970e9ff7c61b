//! Page sections and navigation targets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// In-page anchor of the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Skills,
    Research,
    Projects,
    Contact,
}

impl SectionId {
    /// Scroll-spy scan order; earlier ids win ties. This is not the order the
    /// main page draws its sections in: `research` is drawn above `skills`.
    pub const ORDER: [Self; 6] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Research,
        Self::Projects,
        Self::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Research => "research",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ORDER
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| ModelError::UnknownTarget(s.to_string()))
    }
}

/// Where a navigation request points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavTarget {
    /// An anchor in the main view.
    Section(SectionId),
    /// The research lab page.
    ResearchPage,
}

impl NavTarget {
    pub const RESEARCH_PAGE_ID: &'static str = "research-page";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Section(section) => section.as_str(),
            Self::ResearchPage => Self::RESEARCH_PAGE_ID,
        }
    }
}

impl From<SectionId> for NavTarget {
    fn from(section: SectionId) -> Self {
        Self::Section(section)
    }
}

impl FromStr for NavTarget {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::RESEARCH_PAGE_ID {
            return Ok(Self::ResearchPage);
        }
        s.parse().map(Self::Section)
    }
}

/// One entry of the header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub target: NavTarget,
    pub label: &'static str,
    pub mobile_label: &'static str,
    /// Rendered as a call-to-action button instead of a plain link.
    pub action: bool,
}

impl NavLink {
    const fn plain(section: SectionId, label: &'static str, mobile_label: &'static str) -> Self {
        Self {
            target: NavTarget::Section(section),
            label,
            mobile_label,
            action: false,
        }
    }
}

/// Header links in display order.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink::plain(SectionId::Home, "Home", "Home"),
    NavLink::plain(SectionId::About, "About", "About"),
    NavLink::plain(SectionId::Skills, "Tech Stack", "Skills"),
    NavLink::plain(SectionId::Projects, "Projects", "Projects"),
    NavLink {
        target: NavTarget::ResearchPage,
        label: "Research Lab",
        mobile_label: "Research Lab",
        action: true,
    },
    NavLink::plain(SectionId::Contact, "Contact", "Contact"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_section() {
        for section in SectionId::ORDER {
            assert_eq!(section.as_str().parse::<SectionId>(), Ok(section));
        }
    }

    #[test]
    fn research_page_is_distinct_from_research_section() {
        assert_eq!("research-page".parse::<NavTarget>(), Ok(NavTarget::ResearchPage));
        assert_eq!(
            "research".parse::<NavTarget>(),
            Ok(NavTarget::Section(SectionId::Research))
        );
    }

    #[test]
    fn unknown_anchor_is_an_error() {
        assert_eq!(
            "blog".parse::<NavTarget>(),
            Err(ModelError::UnknownTarget("blog".to_string()))
        );
    }

    #[test]
    fn exactly_one_action_link() {
        assert_eq!(NAV_LINKS.iter().filter(|link| link.action).count(), 1);
    }
}
