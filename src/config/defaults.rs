// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Grid**: Gallery column count and thumbnail height
//! - **Fade**: Viewer image fade-in duration

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Default number of thumbnail columns in the gallery grid.
pub const DEFAULT_GRID_COLUMNS: u16 = 3;

/// Minimum number of gallery columns.
pub const MIN_GRID_COLUMNS: u16 = 1;

/// Maximum number of gallery columns.
pub const MAX_GRID_COLUMNS: u16 = 6;

/// Default thumbnail height in logical pixels.
pub const DEFAULT_THUMBNAIL_HEIGHT: f32 = 160.0;

/// Minimum thumbnail height in logical pixels.
pub const MIN_THUMBNAIL_HEIGHT: f32 = 80.0;

/// Maximum thumbnail height in logical pixels.
pub const MAX_THUMBNAIL_HEIGHT: f32 = 480.0;

// ==========================================================================
// Fade Defaults
// ==========================================================================

/// Default fade-in duration when the viewer switches images (milliseconds).
pub const DEFAULT_FADE_MILLIS: u64 = 200;

/// Maximum fade-in duration (milliseconds). Zero disables the fade.
pub const MAX_FADE_MILLIS: u64 = 2_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_GRID_COLUMNS > 0);
    assert!(MAX_GRID_COLUMNS >= MIN_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS >= MIN_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS <= MAX_GRID_COLUMNS);

    assert!(MIN_THUMBNAIL_HEIGHT > 0.0);
    assert!(MAX_THUMBNAIL_HEIGHT > MIN_THUMBNAIL_HEIGHT);
    assert!(DEFAULT_THUMBNAIL_HEIGHT >= MIN_THUMBNAIL_HEIGHT);
    assert!(DEFAULT_THUMBNAIL_HEIGHT <= MAX_THUMBNAIL_HEIGHT);

    assert!(DEFAULT_FADE_MILLIS <= MAX_FADE_MILLIS);
};
