// SPDX-License-Identifier: MPL-2.0
//! Read-only snapshots of what the gallery renders.
//!
//! The view functions draw from these structs only, so the rendering
//! contract (which controls exist, which indicator is active) can be checked
//! without a renderer.

use crate::catalog::{Project, ProjectId};
use std::path::Path;

/// One clickable tile of the project grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTile<'a> {
    pub id: ProjectId,
    pub title: &'a str,
    pub thumbnail: &'a Path,
}

/// A position indicator below the viewer image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

/// Everything the lightbox overlay shows for the open project.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSnapshot<'a> {
    pub project: &'a Project,
    pub image: &'a Path,
    /// Zero-based index of the displayed image.
    pub index: usize,
    pub total: usize,
    /// Prev/next controls are shown.
    pub show_navigation: bool,
    /// Empty when navigation is hidden.
    pub indicators: Vec<Indicator>,
    /// Opacity of the displayed image while it fades in.
    pub image_opacity: f32,
}

impl<'a> ViewerSnapshot<'a> {
    /// Builds the snapshot for `project` showing image `index`.
    ///
    /// Returns `None` if `index` is outside the project's images.
    #[must_use]
    pub fn new(project: &'a Project, index: usize, image_opacity: f32) -> Option<Self> {
        let image = project.image(index)?;
        let total = project.image_count();
        let show_navigation = total > 1;
        let indicators = if show_navigation {
            (0..total)
                .map(|i| Indicator {
                    index: i,
                    active: i == index,
                })
                .collect()
        } else {
            Vec::new()
        };

        Some(Self {
            project,
            image,
            index,
            total,
            show_navigation,
            indicators,
            image_opacity,
        })
    }

    /// One-based position for display, e.g. `(2, 5)`.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.total)
    }
}
