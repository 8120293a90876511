// SPDX-License-Identifier: MPL-2.0
//! Fade-in of the viewer image after it changes.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    duration: Duration,
    started_at: Option<Instant>,
}

impl Fade {
    /// A zero `duration` disables the fade.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            started_at: None,
        }
    }

    pub fn restart(&mut self, now: Instant) {
        if !self.duration.is_zero() {
            self.started_at = Some(now);
        }
    }

    /// Forgets a running fade once it has completed.
    pub fn settle(&mut self, now: Instant) {
        if !self.is_animating(now) {
            self.started_at = None;
        }
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|start| now.saturating_duration_since(start) < self.duration)
    }

    /// Image opacity in `0.0..=1.0` at `now`.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.started_at {
            Some(start) if !self.duration.is_zero() => {
                let elapsed = now.saturating_duration_since(start);
                (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
            }
            _ => 1.0,
        }
    }
}
