// SPDX-License-Identifier: MPL-2.0
//! Portfolio project records.

use crate::error::CatalogError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Identifier of a project, unique within a catalog.
pub type ProjectId = u32;

/// A static portfolio item and its ordered image set.
///
/// A `Project` always holds at least one image: the constructor rejects an
/// empty list, so [`Project::thumbnail`] and indexing with a position taken
/// from [`Project::image_count`] never go out of bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    id: ProjectId,
    title: String,
    subtitle: String,
    description: String,
    images: Vec<PathBuf>,
}

impl Project {
    /// Builds a project, rejecting an empty image list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyImages`] when `images` is empty.
    pub fn new(
        id: ProjectId,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        description: impl Into<String>,
        images: Vec<PathBuf>,
    ) -> Result<Self, CatalogError> {
        if images.is_empty() {
            return Err(CatalogError::EmptyImages { id });
        }
        Ok(Self {
            id,
            title: title.into(),
            subtitle: subtitle.into(),
            description: description.into(),
            images,
        })
    }

    #[must_use]
    pub fn id(&self) -> ProjectId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    /// Number of images, always at least one.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Image used for the gallery grid tile.
    #[must_use]
    pub fn thumbnail(&self) -> &Path {
        &self.images[0]
    }

    #[must_use]
    pub fn image(&self, index: usize) -> Option<&Path> {
        self.images.get(index).map(PathBuf::as_path)
    }
}

/// On-disk shape of a project entry before validation and path resolution.
#[derive(Debug, Deserialize)]
pub(crate) struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl ProjectRecord {
    /// Validates the record and resolves relative image references against
    /// `assets_root`.
    pub(crate) fn into_project(self, assets_root: &Path) -> Result<Project, CatalogError> {
        let images = self
            .images
            .iter()
            .map(|reference| resolve_image(assets_root, reference))
            .collect();
        Project::new(self.id, self.title, self.subtitle, self.description, images)
    }
}

fn resolve_image(assets_root: &Path, reference: &str) -> PathBuf {
    let path = Path::new(reference);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        assets_root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn new_rejects_empty_image_list() {
        let err = Project::new(4, "Empty", "None", "", Vec::new()).unwrap_err();
        assert_eq!(err, CatalogError::EmptyImages { id: 4 });
    }

    #[test]
    fn thumbnail_is_first_image() {
        let project = Project::new(1, "PDM", "Electronics", "", images(&["a.png", "b.png"]))
            .expect("valid project");
        assert_eq!(project.thumbnail(), Path::new("a.png"));
        assert_eq!(project.image_count(), 2);
        assert_eq!(project.image(1), Some(Path::new("b.png")));
        assert_eq!(project.image(2), None);
    }

    #[test]
    fn record_resolves_relative_images_against_root() {
        let record = ProjectRecord {
            id: 2,
            title: "HUD".into(),
            subtitle: "Instrumentation".into(),
            description: "line one\nline two".into(),
            images: vec!["images/hud.png".into()],
        };
        let project = record
            .into_project(Path::new("/srv/folio"))
            .expect("valid record");
        assert_eq!(project.thumbnail(), Path::new("/srv/folio/images/hud.png"));
        assert!(project.description().contains('\n'));
    }

    #[cfg(unix)]
    #[test]
    fn record_keeps_absolute_images() {
        let record = ProjectRecord {
            id: 2,
            title: "HUD".into(),
            subtitle: String::new(),
            description: String::new(),
            images: vec!["/tmp/hud.png".into()],
        };
        let project = record.into_project(Path::new("/srv/folio")).expect("valid");
        assert_eq!(project.thumbnail(), Path::new("/tmp/hud.png"));
    }
}
