// SPDX-License-Identifier: MPL-2.0
use iced_folio::catalog::Catalog;
use iced_folio::config::{self, MAX_FADE_MILLIS};
use iced_folio::i18n::fluent::I18n;
use iced_folio::ui::theming::ThemeMode;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    fs::write(&temp_config_file_path, "[general]\nlanguage = \"en-US\"\n")
        .expect("Failed to write initial config file");
    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    fs::write(&temp_config_file_path, "[general]\nlanguage = \"fr\"\n")
        .expect("Failed to write french config file");
    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("gallery-close"), "Fermer");
}

#[test]
fn test_cli_language_beats_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[general]\nlanguage = \"fr\"\n").expect("Failed to write config file");

    let config = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_full_config_file_round_trip_through_getters() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        r#"
[general]
theme_mode = "dark"

[gallery]
columns = 2
thumbnail_height = 200.0
fade_millis = 99999

[catalog]
path = "/srv/portfolio/portfolio.toml"
"#,
    )
    .expect("Failed to write config file");

    let config = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    assert_eq!(config.gallery.columns(), 2);
    assert_eq!(config.gallery.thumbnail_height(), 200.0);
    assert_eq!(
        config.gallery.fade_duration(),
        Duration::from_millis(MAX_FADE_MILLIS)
    );
    assert!(config.catalog.path.is_some());
}

#[test]
fn test_user_catalog_drives_gallery_projects() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("portfolio.toml");
    fs::write(
        &path,
        r#"
[profile]
name = "Grace Hopper"

[[projects]]
id = 7
title = "Compiler"
subtitle = "Tooling"
images = ["a.png", "b.png", "c.png"]
"#,
    )
    .expect("Failed to write catalog");

    let catalog = Catalog::load_or_builtin(Some(&path), dir.path());
    assert_eq!(catalog.profile.name, "Grace Hopper");
    assert_eq!(catalog.projects().len(), 1);
    assert_eq!(catalog.projects()[0].image_count(), 3);
    assert_eq!(catalog.projects()[0].thumbnail(), dir.path().join("a.png"));
}
