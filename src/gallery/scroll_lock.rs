// SPDX-License-Identifier: MPL-2.0
//! Page scroll suppression while the lightbox is shown.
//!
//! [`PageScroll`] is the shared "scrolling enabled" flag read by the page
//! view. [`PageScroll::lock`] hands out a [`ScrollLockGuard`] that disables
//! scrolling and, when dropped, restores the flag to the value it had before
//! the lock was taken. Dropping the gallery while the lightbox is open
//! therefore releases the lock too.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared page-level scroll flag. Clones observe the same flag.
#[derive(Debug, Clone)]
pub struct PageScroll {
    enabled: Arc<AtomicBool>,
}

impl Default for PageScroll {
    fn default() -> Self {
        Self::new()
    }
}

impl PageScroll {
    /// Creates a flag with scrolling enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Disables scrolling until the returned guard is dropped.
    #[must_use = "scrolling is restored as soon as the guard is dropped"]
    pub fn lock(&self) -> ScrollLockGuard {
        let previous = self.enabled.swap(false, Ordering::Relaxed);
        log::debug!("page scroll locked");
        ScrollLockGuard {
            page: self.clone(),
            previous,
        }
    }
}

/// Holds the page scroll lock; releases it on drop.
#[derive(Debug)]
pub struct ScrollLockGuard {
    page: PageScroll,
    previous: bool,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.page.enabled.store(self.previous, Ordering::Relaxed);
        log::debug!("page scroll restored");
    }
}
