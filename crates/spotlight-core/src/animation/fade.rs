#![forbid(unsafe_code)]

use std::time::Duration;

use super::{Animation, EasingFn, linear};

/// A one-shot 0.0 → 1.0 progression over a fixed duration.
///
/// A zero-duration fade is complete from the start and reports full progress.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    duration: Duration,
    elapsed: Duration,
    overshoot: Duration,
    easing: EasingFn,
}

impl Fade {
    /// Create a linear fade lasting `duration`.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
            overshoot: Duration::ZERO,
            easing: linear,
        }
    }

    /// Set the easing curve (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Total duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time elapsed so far, capped at the duration.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Linear (un-eased) progress.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0) as f32
    }
}

impl Animation for Fade {
    fn tick(&mut self, dt: Duration) {
        let next = self.elapsed.saturating_add(dt);
        if next >= self.duration {
            self.overshoot = next - self.duration;
            self.elapsed = self.duration;
        } else {
            self.overshoot = Duration::ZERO;
            self.elapsed = next;
        }
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        (self.easing)(self.progress()).clamp(0.0, 1.0)
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.overshoot = Duration::ZERO;
    }

    fn overshoot(&self) -> Duration {
        self.overshoot
    }
}
