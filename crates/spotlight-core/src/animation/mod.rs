#![forbid(unsafe_code)]

//! Time-driven animation primitives.
//!
//! Animations are advanced explicitly with [`Animation::tick`] from the host's
//! frame callback. They never read a clock themselves, which keeps every
//! animation deterministic for a given sequence of deltas.
//!
//! # Invariants
//!
//! 1. `value()` is always in `[0.0, 1.0]`.
//! 2. Once `is_complete()` is true it stays true until `reset()`.
//! 3. Repeating animations ([`Pulse`]) never complete on their own; they must
//!    be cancelled by their owner.

mod clock;
mod fade;
mod pulse;

use std::time::Duration;

pub use clock::FrameClock;
pub use fade::Fade;
pub use pulse::Pulse;

/// Easing curve mapping linear progress `t` in `[0, 1]` to eased progress.
pub type EasingFn = fn(f32) -> f32;

/// A time-driven animation.
pub trait Animation {
    /// Advance by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has finished.
    fn is_complete(&self) -> bool;

    /// Current value in `[0.0, 1.0]`.
    fn value(&self) -> f32;

    /// Return to the initial state.
    fn reset(&mut self);

    /// Time past completion consumed by the last tick.
    fn overshoot(&self) -> Duration {
        Duration::ZERO
    }
}

impl<A: Animation + ?Sized> Animation for Box<A> {
    fn tick(&mut self, dt: Duration) {
        (**self).tick(dt);
    }

    fn is_complete(&self) -> bool {
        (**self).is_complete()
    }

    fn value(&self) -> f32 {
        (**self).value()
    }

    fn reset(&mut self) {
        (**self).reset();
    }

    fn overshoot(&self) -> Duration {
        (**self).overshoot()
    }
}

// ---------------------------------------------------------------------------
// Easing
// ---------------------------------------------------------------------------

#[must_use]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

#[must_use]
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
