// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page and the gallery.
//!
//! The `App` struct wires together the catalog, localization and the gallery
//! component, and forwards messages to the component that owns them.

mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::{Catalog, Profile};
use crate::config::{self, Config};
use crate::gallery::{self, PageScroll};
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use chrono::Datelike;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Directory holding the images of the built-in catalog, relative to the
/// working directory, when neither the CLI nor the config names one.
const DEFAULT_ASSETS_DIR: &str = "assets";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    profile: Profile,
    gallery: gallery::State,
    theme_mode: ThemeMode,
    columns: u16,
    thumbnail_height: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("profile", &self.profile.name)
            .field("viewer", self.gallery.viewer())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot function to be Fn; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::from_parts(I18n::default(), &Config::default(), Catalog::default())
    }
}

impl App {
    /// Loads configuration, localization and the catalog named by `flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            log::warn!("using default settings: {warning}");
        }

        let i18n = I18n::new(flags.lang.clone(), &config);

        let catalog_path = flags.catalog_path.or_else(|| config.catalog.path.clone());
        let assets_dir = flags
            .assets_dir
            .or_else(|| config.catalog.assets_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR));
        let catalog = Catalog::load_or_builtin(catalog_path.as_deref(), &assets_dir);

        (Self::from_parts(i18n, &config, catalog), Task::none())
    }

    fn from_parts(i18n: I18n, config: &Config, catalog: Catalog) -> Self {
        let (profile, projects) = catalog.into_parts();
        let gallery = gallery::State::new(
            projects,
            PageScroll::new(),
            config.gallery.fade_duration(),
        );

        Self {
            i18n,
            profile,
            gallery,
            theme_mode: config.general.theme_mode,
            columns: config.gallery.columns(),
            thumbnail_height: config.gallery.thumbnail_height(),
        }
    }

    fn title(&self) -> String {
        self.i18n
            .tr_with_args("window-title", &[("name", self.profile.name.as_str())])
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.gallery.subscription().map(Message::Gallery)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            gallery: &mut self.gallery,
            theme_mode: &mut self.theme_mode,
        };

        match message {
            Message::Gallery(msg) => update::handle_gallery_message(&mut ctx, msg),
            Message::Navbar(msg) => update::handle_navbar_message(&mut ctx, msg),
            Message::Page(msg) => update::handle_page_message(&mut ctx, msg),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            profile: &self.profile,
            gallery: &self.gallery,
            theme_mode: self.theme_mode,
            columns: self.columns,
            thumbnail_height: self.thumbnail_height,
            year: chrono::Local::now().year(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::navbar;
    use std::path::Path;

    fn app_with_builtin_catalog() -> App {
        let catalog = Catalog::builtin(Path::new(".")).expect("builtin catalog");
        App::from_parts(I18n::default(), &Config::default(), catalog)
    }

    #[test]
    fn default_app_has_no_projects() {
        let app = App::default();
        assert!(app.gallery.projects().is_empty());
        assert!(!app.gallery.is_open());
    }

    #[test]
    fn gallery_messages_open_and_close_viewer() {
        let mut app = app_with_builtin_catalog();
        let first = app.gallery.projects()[0].id();

        let _ = app.update(Message::Gallery(gallery::Message::OpenProject(first)));
        assert!(app.gallery.is_open());
        assert!(!app.gallery.page_scroll().is_enabled());

        let _ = app.update(Message::Gallery(gallery::Message::KeyPressed(
            gallery::GalleryKey::Escape,
        )));
        assert!(!app.gallery.is_open());
        assert!(app.gallery.page_scroll().is_enabled());
    }

    #[test]
    fn navbar_toggle_switches_theme() {
        let mut app = app_with_builtin_catalog();
        app.theme_mode = ThemeMode::Dark;
        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn title_includes_profile_name() {
        let app = app_with_builtin_catalog();
        assert!(app.title().contains(&app.profile.name));
    }

    #[test]
    fn config_bounds_apply_to_grid() {
        let mut config = Config::default();
        config.gallery.columns = Some(40);
        let app = App::from_parts(I18n::default(), &config, Catalog::default());
        assert_eq!(app.columns, config::MAX_GRID_COLUMNS);
    }
}
