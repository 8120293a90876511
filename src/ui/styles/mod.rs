// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the page and the gallery.

pub mod button;
pub mod container;
pub mod overlay;
