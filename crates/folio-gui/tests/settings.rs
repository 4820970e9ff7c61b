//! Tests for settings persistence.

use std::path::PathBuf;

use folio_gui::state::Settings;
use folio_gui::theme::ThemeMode;
use tempfile::TempDir;

#[test]
fn save_then_load_keeps_every_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("settings.toml");

    let mut settings = Settings::default();
    settings.display.theme_mode = ThemeMode::System;
    settings.carousel.publications_interval_ms = 9000;
    settings.carousel.pause_on_hover = false;
    settings.assets.directory = Some(PathBuf::from("/srv/folio/art"));
    settings.save_to(&path).unwrap();

    assert_eq!(Settings::try_load_from(&path).unwrap(), settings);
}

#[test]
fn missing_file_is_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    assert_eq!(Settings::try_load_from(&path).unwrap(), Settings::default());
}

#[test]
fn corrupt_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[display\ntheme_mode = ").unwrap();

    assert!(Settings::try_load_from(&path).is_err());
    assert_eq!(Settings::load_from(&path), Settings::default());
}

#[test]
fn zero_interval_is_replaced() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[carousel]\nresearch_gallery_interval_ms = 0\npublications_interval_ms = 4000\n",
    )
    .unwrap();

    let settings = Settings::load_from(&path);
    let defaults = Settings::default();
    assert_eq!(
        settings.carousel.research_gallery_interval_ms,
        defaults.carousel.research_gallery_interval_ms
    );
    assert_eq!(settings.carousel.publications_interval_ms, 4000);
}

#[test]
fn unknown_theme_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[display]\ntheme_mode = \"sepia\"\n").unwrap();

    let error = Settings::try_load_from(&path).unwrap_err();
    assert!(error.suggestion().is_some());
}

#[test]
fn stored_settings_layout() {
    let mut settings = Settings::default();
    settings.display.theme_mode = ThemeMode::System;
    settings.carousel.publications_interval_ms = 9000;
    settings.carousel.pause_on_hover = false;
    settings.assets.directory = Some(PathBuf::from("/srv/folio/art"));

    insta::assert_json_snapshot!(settings, @r#"
    {
      "display": {
        "theme_mode": "system"
      },
      "carousel": {
        "research_gallery_interval_ms": 6000,
        "publications_interval_ms": 9000,
        "pause_on_hover": false
      },
      "assets": {
        "directory": "/srv/folio/art"
      }
    }
    "#);
}

#[test]
fn theme_save_keeps_the_rest_of_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    let mut stored = Settings::default();
    stored.carousel.research_gallery_interval_ms = 7500;
    stored.save_to(&path).unwrap();

    Settings::save_theme_to(&path, ThemeMode::Light).unwrap();

    let loaded = Settings::try_load_from(&path).unwrap();
    assert_eq!(loaded.display.theme_mode, ThemeMode::Light);
    assert_eq!(loaded.carousel.research_gallery_interval_ms, 7500);
    assert_eq!(loaded.assets.directory, None);
}
