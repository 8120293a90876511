// SPDX-License-Identifier: MPL-2.0
//! Project gallery with a lightbox viewer.
//!
//! The gallery renders a grid of project thumbnails. Pressing one opens the
//! lightbox on that project's first image; the viewer then navigates the
//! project's images as a ring, wrapping at both ends.
//!
//! # Components
//!
//! - [`component`] - State, messages and the update logic
//! - [`viewer`] - `Closed | Open { project, index }` viewer state
//! - [`carousel`] - Ring index arithmetic
//! - [`scroll_lock`] - Page scroll flag and its RAII lock guard
//! - [`fade`] - Fade-in of the viewer image
//! - [`snapshot`] - What the grid and the lightbox draw
//! - [`view`] - Rendering

pub mod carousel;
pub mod component;
pub mod fade;
pub mod scroll_lock;
pub mod snapshot;
pub mod view;
pub mod viewer;

pub use component::{CloseTrigger, Effect, GalleryKey, Message, State};
pub use scroll_lock::{PageScroll, ScrollLockGuard};
pub use snapshot::{GridTile, Indicator, ViewerSnapshot};
pub use view::ViewContext;
pub use viewer::ViewerState;
