// SPDX-License-Identifier: MPL-2.0
//! Localization support backed by Fluent.
//!
//! Translation files live in `assets/i18n/<locale>.ftl` and are embedded at
//! build time. The active locale is chosen from the CLI flag, then the
//! config file, then the OS locale, falling back to `en-US`.

pub mod fluent;
