// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a personal portfolio built with the Iced GUI framework.
//!
//! It renders a profile page around a project gallery. Each project opens in
//! a lightbox viewer that cycles through the project's images.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
