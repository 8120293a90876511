// SPDX-License-Identifier: MPL-2.0
//! Static portfolio content: the site profile and the project list.
//!
//! A catalog is a TOML document with a `[profile]` table and a
//! `[[projects]]` array. One is embedded in the binary; a user file can
//! replace it. Documents are validated when loaded so the gallery never has
//! to guard against malformed records:
//!
//! - every project lists at least one image
//! - project identifiers are unique
//!
//! Relative image references are resolved against the catalog's asset root.

mod profile;
mod project;

pub use profile::{ContactLink, LinkKind, Profile};
pub use project::{Project, ProjectId};

use crate::error::{CatalogError, Result};
use project::ProjectRecord;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

const BUILTIN_CATALOG: &str = "portfolio.toml";

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct CatalogAsset;

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    profile: Profile,
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

/// Validated portfolio content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    pub profile: Profile,
    projects: Vec<Arc<Project>>,
}

impl Catalog {
    /// Parses and validates a catalog document.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the document cannot be parsed, a project
    /// has no images, or two projects share an id.
    pub fn from_toml_str(content: &str, assets_root: &Path) -> Result<Self> {
        let document: CatalogDocument =
            toml::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let mut seen = HashSet::with_capacity(document.projects.len());
        let mut projects = Vec::with_capacity(document.projects.len());
        for record in document.projects {
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id).into());
            }
            projects.push(Arc::new(record.into_project(assets_root)?));
        }

        Ok(Self {
            profile: document.profile,
            projects,
        })
    }

    /// Reads a catalog file. Images resolve against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails validation.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let root = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_toml_str(&content, root)
    }

    /// Parses the catalog embedded in the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded document is missing or invalid.
    pub fn builtin(assets_root: &Path) -> Result<Self> {
        let file = CatalogAsset::get(BUILTIN_CATALOG)
            .ok_or_else(|| CatalogError::Parse(format!("{BUILTIN_CATALOG} is not embedded")))?;
        let content = String::from_utf8_lossy(file.data.as_ref());
        Self::from_toml_str(&content, assets_root)
    }

    /// Loads the user catalog at `user_path` if one is given, falling back
    /// to the built-in catalog when there is none or it fails to load.
    ///
    /// Load failures are logged, never returned. If even the built-in
    /// catalog is unusable the result is an empty catalog.
    #[must_use]
    pub fn load_or_builtin(user_path: Option<&Path>, assets_root: &Path) -> Self {
        if let Some(path) = user_path {
            match Self::load_from_path(path) {
                Ok(catalog) => {
                    log::info!(
                        "loaded {} projects from {}",
                        catalog.projects.len(),
                        path.display()
                    );
                    return catalog;
                }
                Err(err) => {
                    log::error!("{}: {err}; using the built-in catalog", path.display());
                }
            }
        }

        Self::builtin(assets_root).unwrap_or_else(|err| {
            log::error!("built-in catalog: {err}");
            Self::default()
        })
    }

    #[must_use]
    pub fn projects(&self) -> &[Arc<Project>] {
        &self.projects
    }

    /// Splits the catalog into its profile and project list.
    #[must_use]
    pub fn into_parts(self) -> (Profile, Vec<Arc<Project>>) {
        (self.profile, self.projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
[profile]
name = "Ada Lovelace"
tagline = "Analytical engines"
skills = ["Mathematics"]

[[profile.links]]
kind = "email"
label = "Email"
url = "mailto:ada@example.com"

[[projects]]
id = 1
title = "Engine"
subtitle = "Hardware"
description = "First line\nSecond line"
images = ["images/engine.png", "images/gears.png"]

[[projects]]
id = 3
title = "Notes"
subtitle = "Writing"
images = ["images/notes.png"]
"#;

    #[test]
    fn parses_profile_and_projects_in_order() {
        let catalog = Catalog::from_toml_str(SAMPLE, Path::new("/root")).expect("valid catalog");
        assert_eq!(catalog.profile.name, "Ada Lovelace");
        assert_eq!(catalog.profile.links.len(), 1);
        let ids: Vec<_> = catalog.projects().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(
            catalog.projects()[0].thumbnail(),
            Path::new("/root/images/engine.png")
        );
    }

    #[test]
    fn rejects_project_without_images() {
        let doc = "[[projects]]\nid = 9\ntitle = \"Empty\"\nimages = []\n";
        let err = Catalog::from_toml_str(doc, Path::new(".")).unwrap_err();
        assert_eq!(err, Error::Catalog(CatalogError::EmptyImages { id: 9 }));
    }

    #[test]
    fn rejects_project_with_missing_images_key() {
        let doc = "[[projects]]\nid = 5\ntitle = \"No key\"\n";
        let err = Catalog::from_toml_str(doc, Path::new(".")).unwrap_err();
        assert_eq!(err, Error::Catalog(CatalogError::EmptyImages { id: 5 }));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let doc = r#"
[[projects]]
id = 2
title = "A"
images = ["a.png"]

[[projects]]
id = 2
title = "B"
images = ["b.png"]
"#;
        let err = Catalog::from_toml_str(doc, Path::new(".")).unwrap_err();
        assert_eq!(err, Error::Catalog(CatalogError::DuplicateId(2)));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = Catalog::from_toml_str("not = valid = toml", Path::new(".")).unwrap_err();
        assert!(matches!(err, Error::Catalog(CatalogError::Parse(_))));
    }

    #[test]
    fn load_from_path_resolves_against_file_directory() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("portfolio.toml");
        fs::write(&path, SAMPLE).expect("failed to write catalog");

        let catalog = Catalog::load_from_path(&path).expect("valid catalog");
        assert_eq!(
            catalog.projects()[1].thumbnail(),
            dir.path().join("images/notes.png")
        );
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = Catalog::load_from_path(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn invalid_user_catalog_falls_back_to_builtin() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[[projects]]\nid = 1\ntitle = \"x\"\nimages = []\n")
            .expect("failed to write catalog");

        let catalog = Catalog::load_or_builtin(Some(&path), Path::new("."));
        assert_eq!(catalog, Catalog::builtin(Path::new(".")).expect("builtin"));
    }

    #[test]
    fn valid_user_catalog_replaces_builtin() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("portfolio.toml");
        fs::write(&path, SAMPLE).expect("failed to write catalog");

        let catalog = Catalog::load_or_builtin(Some(&path), Path::new("."));
        assert_eq!(catalog.profile.name, "Ada Lovelace");
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin(Path::new(".")).expect("embedded catalog must validate");
        assert!(!catalog.profile.name.is_empty());
        assert_eq!(catalog.projects().len(), 3);
        assert!(catalog.projects().iter().all(|p| p.image_count() >= 1));
    }
}
