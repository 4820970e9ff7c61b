//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup and saved when the theme is
//! changed from the header.

use std::path::{Path, PathBuf};
use std::time::Duration;

use folio_core::{CarouselConfig, RESEARCH_INTERVAL, SessionConfig};
use serde::{Deserialize, Serialize};

use crate::constants::APP_DIRS;
use crate::error::GuiError;
use crate::theme::ThemeMode;

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display settings.
    pub display: DisplaySettings,

    /// Research carousel timing.
    pub carousel: CarouselSettings,

    /// Where artwork is read from.
    pub assets: AssetSettings,
}

impl Settings {
    /// Load settings from a specific path.
    ///
    /// A missing file yields defaults silently; an unreadable or corrupt one
    /// yields defaults with a warning.
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(settings) => settings,
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    %error,
                    suggestion = error.suggestion().unwrap_or_default(),
                    "using default settings"
                );
                Self::default()
            }
        }
    }

    /// Load settings, reporting why a present file could not be used.
    pub fn try_load_from(path: &Path) -> Result<Self, GuiError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(error) => return Err(GuiError::settings_load(error)),
        };
        let mut settings: Self = toml::from_str(&content).map_err(GuiError::settings_load)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Replace values that cannot drive a carousel with their defaults.
    fn sanitize(&mut self) {
        let defaults = CarouselSettings::default();
        if self.carousel.research_gallery_interval_ms == 0 {
            tracing::warn!("research gallery interval of zero replaced by default");
            self.carousel.research_gallery_interval_ms = defaults.research_gallery_interval_ms;
        }
        if self.carousel.publications_interval_ms == 0 {
            tracing::warn!("publications interval of zero replaced by default");
            self.carousel.publications_interval_ms = defaults.publications_interval_ms;
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), GuiError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(GuiError::settings_save)?;
        }

        let content = toml::to_string_pretty(self).map_err(GuiError::settings_save)?;

        std::fs::write(path, content).map_err(GuiError::settings_save)
    }

    /// Persist a theme choice, leaving every other stored value as it is on
    /// disk. Startup overrides from the command line never reach the file.
    pub fn save_theme_to(path: &Path, theme_mode: ThemeMode) -> Result<(), GuiError> {
        let mut stored = Self::load_from(path);
        stored.display.theme_mode = theme_mode;
        stored.save_to(path)
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        let (qualifier, organization, application) = APP_DIRS;
        directories::ProjectDirs::from(qualifier, organization, application)
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    /// Carousel configuration for a new session.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            research_gallery: CarouselConfig::new(
                Duration::from_millis(self.carousel.research_gallery_interval_ms),
                self.carousel.pause_on_hover,
            ),
            publications: CarouselConfig::new(
                Duration::from_millis(self.carousel.publications_interval_ms),
                self.carousel.pause_on_hover,
            ),
        }
    }
}

// =============================================================================
// DISPLAY SETTINGS
// =============================================================================

/// Display settings for the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Theme mode (light/dark/system).
    pub theme_mode: ThemeMode,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Dark,
        }
    }
}

// =============================================================================
// CAROUSEL SETTINGS
// =============================================================================

/// Timing of the research lab carousels.
///
/// The project detail gallery is not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Auto-advance interval of the experiment gallery in milliseconds.
    pub research_gallery_interval_ms: u64,

    /// Auto-advance interval of the publications spotlight in milliseconds.
    pub publications_interval_ms: u64,

    /// Whether hovering a research carousel pauses it.
    pub pause_on_hover: bool,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        let interval = u64::try_from(RESEARCH_INTERVAL.as_millis()).unwrap_or(6000);
        Self {
            research_gallery_interval_ms: interval,
            publications_interval_ms: interval,
            pause_on_hover: true,
        }
    }
}

// =============================================================================
// ASSET SETTINGS
// =============================================================================

/// Artwork location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Directory holding the images; `None` uses the platform data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl AssetSettings {
    /// Effective assets directory.
    pub fn resolve_dir(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| {
            let (qualifier, organization, application) = APP_DIRS;
            directories::ProjectDirs::from(qualifier, organization, application)
                .map(|dirs| dirs.data_dir().join("assets"))
                .unwrap_or_else(|| PathBuf::from("assets"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_research_interval() {
        let settings = Settings::default();
        assert_eq!(settings.carousel.research_gallery_interval_ms, 6000);
        assert_eq!(settings.carousel.publications_interval_ms, 6000);
        assert!(settings.carousel.pause_on_hover);
        assert_eq!(settings.session_config(), SessionConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings: Settings = toml::from_str("[display]\ntheme_mode = \"light\"\n").unwrap();
        assert_eq!(settings.display.theme_mode, ThemeMode::Light);
        assert_eq!(settings.carousel, CarouselSettings::default());
    }

    #[test]
    fn explicit_directory_wins() {
        let assets = AssetSettings {
            directory: Some(PathBuf::from("/srv/folio")),
        };
        assert_eq!(assets.resolve_dir(), PathBuf::from("/srv/folio"));
    }
}
