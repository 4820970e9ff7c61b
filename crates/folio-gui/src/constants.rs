//! Application identity constants.
//!
//! Centralized constants for application metadata used across the codebase.

/// Application display name.
pub const APP_NAME: &str = "Folio Studio";

/// Qualifier, organization, and application parts of the platform directories.
pub const APP_DIRS: (&str, &str, &str) = ("com", "AnupaSupul", "FolioStudio");

/// Portfolio owner.
pub const APP_AUTHOR: &str = "Anupa Supul";

/// Application version from Cargo.toml.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application description.
pub const APP_DESCRIPTION: &str = "Full-stack systems and agricultural deep learning research";

/// Copyright notice for the footer.
pub fn copyright() -> String {
    let year = chrono::Utc::now().format("%Y");
    format!("© {} {}. All rights reserved.", year, APP_AUTHOR)
}

/// Window title for a view, optionally naming an open project.
pub fn window_title(view_label: &str, project: Option<&str>) -> String {
    match project {
        Some(title) => format!("{title} · {view_label} · {APP_NAME}"),
        None => format!("{view_label} · {APP_NAME}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_the_author() {
        let notice = copyright();
        assert!(notice.starts_with("© "));
        assert!(notice.contains(APP_AUTHOR));
    }

    #[test]
    fn title_puts_the_project_first() {
        assert_eq!(window_title("Portfolio", None), "Portfolio · Folio Studio");
        assert_eq!(
            window_title("Portfolio", Some("SwiftCart")),
            "SwiftCart · Portfolio · Folio Studio"
        );
    }
}
