// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern. The
//! gallery lives in its own top-level module; this module holds the page
//! around it and the shared styling.
//!
//! - [`navbar`] - Name and theme toggle
//! - [`page`] - Hero, about, contact and footer sections
//! - [`widgets`] - Custom Iced widgets (page scroll lock)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod navbar;
pub mod page;
pub mod styles;
pub mod theming;
pub mod widgets;
