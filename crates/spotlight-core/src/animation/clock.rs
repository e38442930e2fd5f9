#![forbid(unsafe_code)]

use std::time::Duration;

use web_time::Instant;

/// Converts host frame timestamps into tick deltas.
///
/// Hosts that only get "a frame is due" callbacks can feed the current time
/// here and pass the returned delta to the overlay's `tick`. Deltas are capped
/// so a long stall (app in background) does not skip an animation entirely.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Option<Instant>,
    max_delta: Duration,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Default cap on a single delta (two 60Hz frames).
    pub const DEFAULT_MAX_DELTA: Duration = Duration::from_millis(33);

    #[must_use]
    pub fn new() -> Self {
        Self {
            last: None,
            max_delta: Self::DEFAULT_MAX_DELTA,
        }
    }

    /// Override the per-frame delta cap.
    #[must_use]
    pub fn max_delta(mut self, max_delta: Duration) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Record a frame at `now` and return the time since the previous frame.
    ///
    /// The first frame yields a zero delta.
    pub fn frame_at(&mut self, now: Instant) -> Duration {
        let dt = match self.last {
            Some(last) => now.saturating_duration_since(last),
            None => Duration::ZERO,
        };
        self.last = Some(now);
        dt.min(self.max_delta)
    }

    /// Record a frame at the current time.
    pub fn frame(&mut self) -> Duration {
        self.frame_at(Instant::now())
    }

    /// Forget the previous frame, e.g. when the overlay is detached.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
