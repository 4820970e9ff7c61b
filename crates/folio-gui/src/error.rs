//! GUI-specific error types.
//!
//! None of these errors interrupt the user: settings problems fall back to
//! defaults, missing artwork renders a placeholder, and a link that cannot
//! be opened is logged. The categories and suggestions feed those log
//! records.

use std::path::Path;

use thiserror::Error;

/// GUI-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    // =========================================================================
    // SETTINGS
    // =========================================================================
    /// Failed to load settings.
    #[error("Failed to load settings: {reason}")]
    SettingsLoad {
        /// Description of what went wrong.
        reason: String,
    },

    /// Failed to save settings.
    #[error("Failed to save settings: {reason}")]
    SettingsSave {
        /// Description of what went wrong.
        reason: String,
    },

    // =========================================================================
    // ASSETS
    // =========================================================================
    /// Image URL has no usable file name.
    #[error("No local asset for {url}")]
    AssetUnmapped {
        /// Source URL of the image.
        url: String,
    },

    /// Image file could not be read.
    #[error("Failed to load asset {path}: {reason}")]
    AssetLoad {
        /// Resolved file path.
        path: String,
        /// Description of what went wrong.
        reason: String,
    },

    // =========================================================================
    // LINKS
    // =========================================================================
    /// The platform opener rejected a link.
    #[error("Failed to open {url}: {reason}")]
    LinkOpen {
        /// Link target.
        url: String,
        /// Description of what went wrong.
        reason: String,
    },

    /// Internal error (should not normally occur).
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl GuiError {
    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::SettingsLoad { .. } => {
                Some("Settings will be reset to defaults if the file is corrupted.")
            }
            Self::SettingsSave { .. } => {
                Some("Check file permissions for the application config directory.")
            }
            Self::AssetUnmapped { .. } => Some("Reference images by a URL ending in a file name."),
            Self::AssetLoad { .. } => {
                Some("Place the image in the assets directory or pass --assets-dir.")
            }
            Self::LinkOpen { .. } => Some("Check that a default browser or mail client is set."),
            Self::Internal { .. } => None,
        }
    }

    /// Get the error category for display purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SettingsLoad { .. } | Self::SettingsSave { .. } => ErrorCategory::Settings,
            Self::AssetUnmapped { .. } | Self::AssetLoad { .. } => ErrorCategory::Assets,
            Self::LinkOpen { .. } => ErrorCategory::Links,
            Self::Internal { .. } => ErrorCategory::General,
        }
    }

    // =========================================================================
    // FACTORY METHODS
    // =========================================================================

    /// Create a settings load error from any error source.
    pub fn settings_load(err: impl std::fmt::Display) -> Self {
        Self::SettingsLoad {
            reason: err.to_string(),
        }
    }

    /// Create a settings save error from any error source.
    pub fn settings_save(err: impl std::fmt::Display) -> Self {
        Self::SettingsSave {
            reason: err.to_string(),
        }
    }

    /// Create an asset load error.
    pub fn asset_load(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::AssetLoad {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Create a link open error.
    pub fn link_open(url: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::LinkOpen {
            url: url.into(),
            reason: err.to_string(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Error category for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Settings file errors.
    Settings,
    /// Image asset errors.
    Assets,
    /// Outbound link errors.
    Links,
    /// General/uncategorized errors.
    General,
}

impl ErrorCategory {
    /// Get a human-readable label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Settings => "Settings",
            Self::Assets => "Assets",
            Self::Links => "Links",
            Self::General => "Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_user_facing_error_has_a_suggestion() {
        let errors = [
            GuiError::settings_load("bad toml"),
            GuiError::settings_save("read-only"),
            GuiError::AssetUnmapped {
                url: "https://example.com/".to_string(),
            },
            GuiError::asset_load(Path::new("assets/a.jpg"), "missing"),
            GuiError::link_open("mailto:a@b.c", "no handler"),
        ];
        for error in errors {
            assert!(error.suggestion().is_some(), "{error}");
        }
        assert!(GuiError::internal("x").suggestion().is_none());
    }

    #[test]
    fn categories() {
        assert_eq!(
            GuiError::settings_save("x").category().label(),
            "Settings"
        );
        assert_eq!(
            GuiError::link_open("u", "x").category(),
            ErrorCategory::Links
        );
    }

    #[test]
    fn display_includes_path() {
        let error = GuiError::asset_load(Path::new("assets/a.jpg"), "not found");
        assert_eq!(
            error.to_string(),
            "Failed to load asset assets/a.jpg: not found"
        );
    }
}
