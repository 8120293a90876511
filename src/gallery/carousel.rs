// SPDX-License-Identifier: MPL-2.0
//! Ring navigation over an image sequence.
//!
//! Advancing past the last image wraps to the first and retreating before the
//! first wraps to the last. Indices never clamp.

/// Index after `current` in a ring of `len` images.
///
/// `len` must be non-zero.
#[must_use]
pub fn next_index(current: usize, len: usize) -> usize {
    debug_assert!(len > 0, "ring navigation over an empty sequence");
    if current + 1 < len {
        current + 1
    } else {
        0
    }
}

/// Index before `current` in a ring of `len` images.
///
/// `len` must be non-zero.
#[must_use]
pub fn previous_index(current: usize, len: usize) -> usize {
    debug_assert!(len > 0, "ring navigation over an empty sequence");
    if current > 0 {
        current - 1
    } else {
        len - 1
    }
}
