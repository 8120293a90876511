// SPDX-License-Identifier: MPL-2.0
//! Lightbox viewer state.

use super::carousel;
use crate::catalog::Project;
use std::sync::Arc;

/// Whether the lightbox is shown, and if so which project and image.
///
/// An image index only exists alongside an open project, and the index is
/// kept inside `0..project.image_count()` by every transition.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewerState {
    #[default]
    Closed,
    Open { project: Arc<Project>, index: usize },
}

impl ViewerState {
    /// Opens `project` on its first image, replacing any current selection.
    #[must_use]
    pub fn open(project: Arc<Project>) -> Self {
        ViewerState::Open { project, index: 0 }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, ViewerState::Open { .. })
    }

    #[must_use]
    pub fn project(&self) -> Option<&Arc<Project>> {
        match self {
            ViewerState::Open { project, .. } => Some(project),
            ViewerState::Closed => None,
        }
    }

    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            ViewerState::Open { index, .. } => Some(*index),
            ViewerState::Closed => None,
        }
    }

    /// Advances to the next image, wrapping to the first. Returns whether
    /// the state changed.
    pub fn next_image(&mut self) -> bool {
        self.step(carousel::next_index)
    }

    /// Steps back to the previous image, wrapping to the last. Returns
    /// whether the state changed.
    pub fn previous_image(&mut self) -> bool {
        self.step(carousel::previous_index)
    }

    /// Shows the image at `target`. Indices outside the open project are
    /// ignored. Returns whether the state changed.
    pub fn jump_to(&mut self, target: usize) -> bool {
        match self {
            ViewerState::Open { project, index } if target < project.image_count() => {
                let changed = *index != target;
                *index = target;
                changed
            }
            _ => false,
        }
    }

    fn step(&mut self, advance: fn(usize, usize) -> usize) -> bool {
        match self {
            ViewerState::Open { project, index } => {
                let next = advance(*index, project.image_count());
                let changed = next != *index;
                *index = next;
                changed
            }
            ViewerState::Closed => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn project(id: u32, image_count: usize) -> Arc<Project> {
        let images = (0..image_count)
            .map(|i| PathBuf::from(format!("{id}-{i}.png")))
            .collect();
        Arc::new(Project::new(id, "Title", "Subtitle", "", images).expect("valid project"))
    }

    #[test]
    fn default_is_closed() {
        let state = ViewerState::default();
        assert!(!state.is_open());
        assert!(state.project().is_none());
        assert!(state.index().is_none());
    }

    #[test]
    fn open_starts_at_first_image() {
        let state = ViewerState::open(project(1, 4));
        assert_eq!(state.index(), Some(0));
        assert_eq!(state.project().map(|p| p.id()), Some(1));
    }

    #[test]
    fn navigation_is_a_no_op_when_closed() {
        let mut state = ViewerState::Closed;
        assert!(!state.next_image());
        assert!(!state.previous_image());
        assert!(!state.jump_to(0));
        assert_eq!(state, ViewerState::Closed);
    }

    #[test]
    fn jump_to_out_of_range_is_ignored() {
        let mut state = ViewerState::open(project(1, 2));
        assert!(!state.jump_to(2));
        assert_eq!(state.index(), Some(0));
    }

    #[test]
    fn single_image_navigation_does_not_change_state() {
        let mut state = ViewerState::open(project(1, 1));
        assert!(!state.next_image());
        assert!(!state.previous_image());
        assert_eq!(state.index(), Some(0));
    }
}
