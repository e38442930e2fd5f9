#![forbid(unsafe_code)]

use std::f32::consts::TAU;
use std::time::Duration;

use super::Animation;

/// An endlessly repeating cosine pulse.
///
/// `value()` oscillates between 0.0 and 1.0 at `frequency` cycles per second.
/// A pulse never completes: its owner must stop ticking it (and usually drop
/// it) when the effect should end.
#[derive(Debug, Clone, Copy)]
pub struct Pulse {
    frequency: f32,
    phase: f32,
}

impl Pulse {
    /// Create a pulse with the given frequency in Hz. Negative or NaN
    /// frequencies are treated as zero.
    #[must_use]
    pub fn new(frequency: f32) -> Self {
        Self {
            frequency: if frequency.is_finite() && frequency > 0.0 {
                frequency
            } else {
                0.0
            },
            phase: 0.0,
        }
    }

    /// Create a pulse that completes one cycle every `period`.
    #[must_use]
    pub fn with_period(period: Duration) -> Self {
        if period.is_zero() {
            return Self::new(0.0);
        }
        Self::new(1.0 / period.as_secs_f32())
    }

    /// Current phase in radians, always in `[0, TAU)`.
    #[must_use]
    pub fn phase(&self) -> f32 {
        self.phase
    }
}

impl Animation for Pulse {
    fn tick(&mut self, dt: Duration) {
        self.phase = (self.phase + TAU * self.frequency * dt.as_secs_f32()).rem_euclid(TAU);
    }

    fn is_complete(&self) -> bool {
        false
    }

    fn value(&self) -> f32 {
        (0.5 - 0.5 * self.phase.cos()).clamp(0.0, 1.0)
    }

    fn reset(&mut self) {
        self.phase = 0.0;
    }
}
