#![forbid(unsafe_code)]

//! Renderables placed by the overlay.
//!
//! The overlay computes frames and forwards lifecycle events; drawing is left
//! to the host. Optional capabilities (gravity awareness, self-dismiss,
//! animation) are default methods, so a minimal view only reports its size and
//! accepts a frame.

use std::time::Duration;

use spotlight_core::geometry::{Rect, Size};
use spotlight_layout::Gravity;

use crate::dismiss::DismissHandle;

/// The message bubble.
pub trait MessageView {
    /// Current (preferred) size.
    fn size(&self) -> Size;

    /// Size wanted when constrained to `max`. Used by auto-resize.
    fn measure(&self, max: Size) -> Size {
        self.size().min(max)
    }

    /// Final screen rectangle for this layout pass.
    fn set_frame(&mut self, frame: Rect);

    /// Title and description from the configuration.
    fn set_content(&mut self, _title: Option<&str>, _description: Option<&str>) {}

    /// Side of the target the message is placed on.
    fn on_gravity(&mut self, _gravity: Gravity) {}

    /// Called when a session starts; the handle ends that session.
    fn attach(&mut self, _handle: DismissHandle) {}

    fn detach(&mut self) {}

    fn start_animation(&mut self) {}

    fn stop_animation(&mut self) {}

    /// Advance the message animation. Return `true` if it needs a redraw.
    fn tick(&mut self, _dt: Duration) -> bool {
        false
    }
}

/// The segment connecting target and message.
pub trait IndicatorView {
    fn set_frame(&mut self, frame: Rect);

    fn on_gravity(&mut self, _gravity: Gravity) {}

    fn start_animation(&mut self) {}

    fn stop_animation(&mut self) {}

    /// Advance the indicator animation. Return `true` if it needs a redraw.
    fn tick(&mut self, _dt: Duration) -> bool {
        false
    }
}
