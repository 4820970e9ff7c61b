//! Biographical content types: identity, skills, and outbound links.

use serde::{Deserialize, Serialize};

/// Accent color family used to tint cards and skill nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Cyan,
    Orange,
    Green,
    Purple,
    Blue,
    Teal,
    Emerald,
    Rose,
    Indigo,
}

/// Glyph drawn next to a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillIcon {
    Code,
    Server,
    Database,
    Cpu,
    Layout,
    Zap,
    GitBranch,
    Globe,
    Terminal,
}

/// A node orbiting the hero portrait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillNode {
    pub name: &'static str,
    pub icon: SkillIcon,
    pub accent: Accent,
}

/// A titled group of skills in the tech stack section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub title: &'static str,
    pub summary: &'static str,
    pub icon: SkillIcon,
    pub accent: Accent,
    pub skills: &'static [(&'static str, SkillIcon)],
}

/// Kind of outbound contact link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Email,
}

/// An outbound link. The URL is opaque pass-through content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: &'static str,
    pub subtitle: &'static str,
    pub url: &'static str,
}

/// Identity and narrative copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub badge: &'static str,
    pub headline: &'static str,
    pub portrait_url: &'static str,
    pub about_title: &'static str,
    pub about_lead: &'static str,
    pub builder: &'static str,
    pub researcher: &'static str,
    pub narratives: [&'static str; 2],
    pub contact_pitch: &'static str,
}
