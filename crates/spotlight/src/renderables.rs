#![forbid(unsafe_code)]

//! Stock message and indicator.
//!
//! Both only hold paint state; the host reads it back when drawing.
//!
//! # Indicator animation
//!
//! Once the entrance fade completes, [`LineIndicator`] grows its line from the
//! target edge toward the message (`line_ms`), then grows a dot at the line's
//! end (`dot_ms`). With a pulse frequency set, the dot's outer ring keeps
//! pulsing until the animation is stopped.

use std::time::Duration;

use spotlight_core::animation::{Animation, Fade, Pulse, ease_out};
use spotlight_core::geometry::{Rect, Size};
use spotlight_layout::Gravity;

use crate::dismiss::DismissHandle;
use crate::view::{IndicatorView, MessageView};

// ---------------------------------------------------------------------------
// TextMessage
// ---------------------------------------------------------------------------

/// A title/description bubble with a fixed preferred size.
#[derive(Debug, Clone, Default)]
pub struct TextMessage {
    preferred: Size,
    frame: Rect,
    gravity: Gravity,
    title: Option<String>,
    description: Option<String>,
    handle: Option<DismissHandle>,
}

impl TextMessage {
    #[must_use]
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    #[must_use]
    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    /// Whether the message is attached to a running session.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    /// End the session from inside the message (e.g. a "skip" button).
    ///
    /// Returns `false` when not attached.
    pub fn skip(&self) -> bool {
        match &self.handle {
            Some(handle) => {
                handle.dismiss();
                true
            }
            None => false,
        }
    }
}

impl MessageView for TextMessage {
    fn size(&self) -> Size {
        self.preferred
    }

    fn measure(&self, max: Size) -> Size {
        self.preferred.min(max)
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn set_content(&mut self, title: Option<&str>, description: Option<&str>) {
        self.title = title.map(str::to_owned);
        self.description = description.map(str::to_owned);
    }

    fn on_gravity(&mut self, gravity: Gravity) {
        self.gravity = gravity;
    }

    fn attach(&mut self, handle: DismissHandle) {
        self.handle = Some(handle);
    }

    fn detach(&mut self) {
        self.handle = None;
    }
}

// ---------------------------------------------------------------------------
// LineIndicator
// ---------------------------------------------------------------------------

/// A point in floating-point screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePoint {
    pub x: f32,
    pub y: f32,
}

impl LinePoint {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn lerp(self, to: LinePoint, t: f32) -> LinePoint {
        LinePoint::new(self.x + (to.x - self.x) * t, self.y + (to.y - self.y) * t)
    }
}

/// A line from the target toward the message, ending in a dot.
#[derive(Debug, Clone)]
pub struct LineIndicator {
    frame: Rect,
    gravity: Gravity,
    density: f32,
    /// Dot radius in density-independent units.
    dot_radius: f32,
    line: Fade,
    dot: Fade,
    pulse: Option<Pulse>,
    running: bool,
    started: bool,
}

impl Default for LineIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl LineIndicator {
    pub const DEFAULT_LINE_MS: u64 = 400;
    pub const DEFAULT_DOT_MS: u64 = 600;
    pub const DEFAULT_DOT_RADIUS: f32 = 6.0;

    #[must_use]
    pub fn new() -> Self {
        Self {
            frame: Rect::default(),
            gravity: Gravity::default(),
            density: 1.0,
            dot_radius: Self::DEFAULT_DOT_RADIUS,
            line: Fade::new(Duration::from_millis(Self::DEFAULT_LINE_MS)).easing(ease_out),
            dot: Fade::new(Duration::from_millis(Self::DEFAULT_DOT_MS)).easing(ease_out),
            pulse: None,
            running: false,
            started: false,
        }
    }

    #[must_use]
    pub fn density(mut self, density: f32) -> Self {
        if density.is_finite() && density > 0.0 {
            self.density = density;
        }
        self
    }

    #[must_use]
    pub fn dot_radius(mut self, radius: f32) -> Self {
        self.dot_radius = radius.max(0.0);
        self
    }

    #[must_use]
    pub fn line_duration(mut self, duration: Duration) -> Self {
        self.line = Fade::new(duration).easing(ease_out);
        self
    }

    #[must_use]
    pub fn dot_duration(mut self, duration: Duration) -> Self {
        self.dot = Fade::new(duration).easing(ease_out);
        self
    }

    /// Keep the dot pulsing at `freq_hz` after it has grown.
    #[must_use]
    pub fn pulse(mut self, freq_hz: f32) -> Self {
        self.pulse = Some(Pulse::new(freq_hz));
        self
    }

    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    #[must_use]
    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    /// Whether the animation is advancing.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.running
    }

    /// Where the line begins: the frame edge facing the target.
    #[must_use]
    pub fn line_start(&self) -> LinePoint {
        let f = self.frame;
        let cx = f.x as f32 + f.width as f32 / 2.0;
        let cy = f.y as f32 + f.height as f32 / 2.0;
        match self.gravity {
            Gravity::Bottom => LinePoint::new(cx, f.top() as f32),
            Gravity::Top => LinePoint::new(cx, f.bottom() as f32),
            Gravity::Right => LinePoint::new(f.left() as f32, cy),
            Gravity::Left => LinePoint::new(f.right() as f32, cy),
        }
    }

    /// Where the fully grown line ends: the frame edge facing the message.
    #[must_use]
    pub fn line_end(&self) -> LinePoint {
        let f = self.frame;
        let cx = f.x as f32 + f.width as f32 / 2.0;
        let cy = f.y as f32 + f.height as f32 / 2.0;
        match self.gravity {
            Gravity::Bottom => LinePoint::new(cx, f.bottom() as f32),
            Gravity::Top => LinePoint::new(cx, f.top() as f32),
            Gravity::Right => LinePoint::new(f.right() as f32, cy),
            Gravity::Left => LinePoint::new(f.left() as f32, cy),
        }
    }

    /// End of the line as currently drawn.
    ///
    /// Equal to [`LineIndicator::line_start`] before the animation starts.
    #[must_use]
    pub fn current_end(&self) -> LinePoint {
        if !self.started {
            return self.line_start();
        }
        self.line_start().lerp(self.line_end(), self.line.value())
    }

    /// Inner dot radius in pixels.
    #[must_use]
    pub fn current_dot_radius(&self) -> f32 {
        if !self.started {
            return 0.0;
        }
        self.dot.value() * self.dot_radius * self.density
    }

    /// Outer ring radius in pixels, including the pulse.
    #[must_use]
    pub fn current_ring_radius(&self) -> f32 {
        let inner = self.current_dot_radius();
        match &self.pulse {
            Some(pulse) if self.dot.is_complete() => inner * (1.0 + 0.25 * pulse.value()),
            _ => inner,
        }
    }
}

impl IndicatorView for LineIndicator {
    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn on_gravity(&mut self, gravity: Gravity) {
        self.gravity = gravity;
    }

    fn start_animation(&mut self) {
        self.line.reset();
        self.dot.reset();
        if let Some(pulse) = &mut self.pulse {
            pulse.reset();
        }
        self.started = true;
        self.running = true;
    }

    fn stop_animation(&mut self) {
        self.running = false;
    }

    fn tick(&mut self, dt: Duration) -> bool {
        if !self.running {
            return false;
        }
        if !self.line.is_complete() {
            self.line.tick(dt);
            if !self.line.is_complete() {
                return true;
            }
            let carry = self.line.overshoot();
            self.dot.tick(carry);
            return true;
        }
        if !self.dot.is_complete() {
            self.dot.tick(dt);
            if self.dot.is_complete() && self.pulse.is_none() {
                self.running = false;
            }
            return true;
        }
        match &mut self.pulse {
            Some(pulse) => {
                pulse.tick(dt);
                true
            }
            None => {
                self.running = false;
                false
            }
        }
    }
}
