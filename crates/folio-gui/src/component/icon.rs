//! Glyphs for content enums.
//!
//! Icons come from `iced_fonts::lucide` (see <https://lucide.dev/icons/>).

use folio_model::{SkillIcon, SocialKind};
use iced::widget::Text;
use iced_fonts::lucide;

/// Icon font, registered with the application at startup.
pub use iced_fonts::LUCIDE_FONT_BYTES;

pub fn skill_icon<'a>(icon: SkillIcon) -> Text<'a> {
    match icon {
        SkillIcon::Code => lucide::code(),
        SkillIcon::Server => lucide::server(),
        SkillIcon::Database => lucide::database(),
        SkillIcon::Cpu => lucide::cpu(),
        SkillIcon::Layout => lucide::monitor(),
        SkillIcon::Zap => lucide::zap(),
        SkillIcon::GitBranch => lucide::git_branch(),
        SkillIcon::Globe => lucide::globe(),
        SkillIcon::Terminal => lucide::terminal(),
    }
}

pub fn social_icon<'a>(kind: SocialKind) -> Text<'a> {
    match kind {
        SocialKind::GitHub => lucide::github(),
        SocialKind::LinkedIn => lucide::linkedin(),
        SocialKind::Email => lucide::mail(),
    }
}
