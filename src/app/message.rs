// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery;
use crate::ui::navbar;
use crate::ui::page;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Navbar(navbar::Message),
    Page(page::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Catalog file replacing the built-in one.
    /// Takes precedence over `[catalog] path` in settings.toml.
    pub catalog_path: Option<PathBuf>,
    /// Root for relative image references of the built-in catalog.
    pub assets_dir: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
