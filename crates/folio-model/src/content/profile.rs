use crate::profile::{Accent, Profile, SkillGroup, SkillIcon, SkillNode, SocialKind, SocialLink};

pub static PROFILE: Profile = Profile {
    name: "Anupa Supul",
    badge: "FULL-STACK & RESEARCH",
    headline: "A Computer Science Undergraduate at the University of Ruhuna. I am a full-stack-leaning developer focused on building real-world systems, not just academic demos.",
    portrait_url: "/profile.jpeg",
    about_title: "Beyond the Syntax",
    about_lead: "I operate at the intersection of engineering and inquiry, building robust systems informed by a research-driven mindset.",
    builder: "I build and deploy complete systems with a focus on clean architecture and user-centric design. My toolkit includes Java Spring Boot and Node.js for the backend, and React with Tailwind for creating responsive, intuitive frontends.",
    researcher: "My current research involves using Convolutional Neural Networks (CNNs) to detect and classify leaf diseases in rice and chilli plants, a tangible application of machine learning to solve real-world problems in agriculture.",
    narratives: [
        "I'm a Computer Science undergraduate from Sri Lanka, creating systems that are not only well-engineered but also informed by analytical rigor. My work bridges the gap between full-stack development and academic research.",
        "I believe the most durable solutions come from a deep understanding of the problem. That's why I apply a research-oriented mindset to software, and a systems-building approach to research.",
    ],
    contact_pitch: "I'm available for research collaborations, full-stack opportunities, or just a chat about systems architecture.",
};

/// Nodes orbiting the hero portrait.
pub static SKILL_NODES: [SkillNode; 8] = [
    SkillNode { name: "React", icon: SkillIcon::Code, accent: Accent::Cyan },
    SkillNode { name: "Java", icon: SkillIcon::Server, accent: Accent::Orange },
    SkillNode { name: "Spring Boot", icon: SkillIcon::Database, accent: Accent::Green },
    SkillNode { name: "CNN", icon: SkillIcon::Cpu, accent: Accent::Purple },
    SkillNode { name: "MySQL", icon: SkillIcon::Database, accent: Accent::Blue },
    SkillNode { name: "Tailwind CSS", icon: SkillIcon::Layout, accent: Accent::Teal },
    SkillNode { name: "Node.js", icon: SkillIcon::Zap, accent: Accent::Emerald },
    SkillNode { name: "Git", icon: SkillIcon::GitBranch, accent: Accent::Rose },
];

pub static SKILL_GROUPS: [SkillGroup; 3] = [
    SkillGroup {
        title: "Backend",
        summary: "Clean architecture and robust APIs built for performance and scalability.",
        icon: SkillIcon::Server,
        accent: Accent::Indigo,
        skills: &[
            ("Java", SkillIcon::Code),
            ("Spring Boot", SkillIcon::Server),
            ("Node.js", SkillIcon::Zap),
            ("REST APIs", SkillIcon::Globe),
        ],
    },
    SkillGroup {
        title: "Frontend",
        summary: "Intuitive interfaces that translate complex data into user-friendly experiences.",
        icon: SkillIcon::Layout,
        accent: Accent::Teal,
        skills: &[
            ("React", SkillIcon::Code),
            ("Tailwind CSS", SkillIcon::Layout),
            ("JavaScript", SkillIcon::Code),
            ("Responsive UI", SkillIcon::Layout),
        ],
    },
    SkillGroup {
        title: "Data & Tools",
        summary: "Ensuring data integrity, version control, and efficient development workflows.",
        icon: SkillIcon::Database,
        accent: Accent::Rose,
        skills: &[
            ("MySQL", SkillIcon::Database),
            ("MongoDB", SkillIcon::Database),
            ("Git", SkillIcon::GitBranch),
            ("IntelliJ", SkillIcon::Terminal),
            ("VS Code", SkillIcon::Terminal),
        ],
    },
];

/// Icon links in the header area.
pub static SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        kind: SocialKind::GitHub,
        label: "GitHub",
        subtitle: "Code Repositories",
        url: "https://github.com/AnupaSupul",
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        label: "LinkedIn",
        subtitle: "Professional Profile",
        url: "https://www.linkedin.com/in/anupa-supul-a511822ab/",
    },
];

/// Links in the contact footer; the email link is the primary call to action.
pub static CONTACT_LINKS: [SocialLink; 3] = [
    SocialLink {
        kind: SocialKind::Email,
        label: "Start a Conversation",
        subtitle: "supulanupa@gmail.com",
        url: "mailto:supulanupa@gmail.com",
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        label: "LinkedIn",
        subtitle: "Professional Profile",
        url: "https://www.linkedin.com/in/anupa-supul-a511822ab/",
    },
    SocialLink {
        kind: SocialKind::GitHub,
        label: "GitHub",
        subtitle: "Code Repositories",
        url: "https://github.com/AnupaSupul",
    },
];
