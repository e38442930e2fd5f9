#![forbid(unsafe_code)]

//! Layout engine: indicator and message rectangles for a chosen gravity.
//!
//! # Invariants
//!
//! 1. The indicator length is always in `[0, max_length]`.
//! 2. When the indicator collapses to zero, or the margins alone do not fit,
//!    both margins collapse to zero and the message sits flush with the target.
//! 3. The message is translated (never resized by clamping) into the inset
//!    container; if it fits there, it ends up fully inside.
//! 4. Results are pure functions of the inputs; nothing is cached here.
//!
//! # Failure Modes
//!
//! - Empty inset container: [`LayoutManager::layout`] returns `None` and the
//!   caller keeps its previous rectangles.
//! - Message longer than the available space: a warning is logged, the outcome
//!   is flagged with `fits == false`, and the (overlapping) geometry is still
//!   produced.

use spotlight_core::geometry::{Rect, Sides, Size};
use tracing::{debug, warn};

use crate::gravity::{Axis, Gravity, available_length, available_span, select_gravity};
use crate::indicator::IndicatorLayoutInfo;

/// Measures message content against a bounding box.
///
/// Used when auto-resize is enabled: the returned size is the size the message
/// wants when constrained to `max`. Larger results are clipped to `max`.
pub trait MeasureMessage {
    fn measure(&self, max: Size) -> Size;
}

impl<F> MeasureMessage for F
where
    F: Fn(Size) -> Size,
{
    fn measure(&self, max: Size) -> Size {
        self(max)
    }
}

/// A fixed preferred size, clipped to the box by the engine.
impl MeasureMessage for Size {
    fn measure(&self, _max: Size) -> Size {
        *self
    }
}

/// Everything a layout pass reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutInput {
    /// Absolute target rectangle.
    pub target: Rect,
    /// Overlay bounds.
    pub container: Rect,
    /// Overlay insets; the message is clamped inside `container.inner(insets)`.
    pub insets: Sides,
    /// System UI (e.g. a navigation bar) excluded from the available space.
    pub reserved: Sides,
    /// Current message size.
    pub message_size: Size,
}

impl LayoutInput {
    /// Container after subtracting the overlay insets.
    #[inline]
    #[must_use]
    pub fn effective_container(&self) -> Rect {
        self.container.inner(self.insets)
    }
}

/// Result of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOutcome {
    pub gravity: Gravity,
    pub indicator: Rect,
    pub message: Rect,
    /// Length of the indicator along the placement axis.
    pub indicator_length: i32,
    /// Margins actually applied (zero when collapsed).
    pub margin_start: i32,
    pub margin_end: i32,
    /// Total room on the gravity side.
    pub available: i32,
    /// New message size when auto-resize changed it.
    pub resized: Option<Size>,
    /// Whether the message length fits in the available room.
    pub fits: bool,
}

/// Chooses a gravity and lays out the indicator and message.
///
/// Hosts with unusual needs can supply their own implementation; the overlay
/// only talks to this trait.
pub trait LayoutManager {
    /// Pick a gravity when none is pinned.
    fn gravity_for(&self, input: &LayoutInput) -> Gravity {
        select_gravity(input.target, input.container, input.reserved)
    }

    /// Compute indicator and message rectangles for `gravity`.
    ///
    /// Returns `None` when the pass must be skipped (empty container).
    fn layout(
        &self,
        gravity: Gravity,
        input: &LayoutInput,
        measure: &dyn MeasureMessage,
    ) -> Option<LayoutOutcome>;
}

/// The stock layout manager.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultLayoutManager {
    indicator: Option<IndicatorLayoutInfo>,
    density: f32,
    auto_resize: bool,
}

impl Default for DefaultLayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultLayoutManager {
    /// Create a manager using the global indicator default at density 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            indicator: None,
            density: 1.0,
            auto_resize: false,
        }
    }

    /// Override the indicator spacing for this manager.
    #[must_use]
    pub fn indicator(mut self, info: IndicatorLayoutInfo) -> Self {
        self.indicator = Some(info);
        self
    }

    /// Pixels per density-independent unit. Non-positive or non-finite
    /// values fall back to 1.0.
    #[must_use]
    pub fn density(mut self, density: f32) -> Self {
        self.density = if density.is_finite() && density > 0.0 {
            density
        } else {
            1.0
        };
        self
    }

    /// Let the message shrink to fit the room on its side.
    #[must_use]
    pub fn auto_resize(mut self, enabled: bool) -> Self {
        self.auto_resize = enabled;
        self
    }

    #[must_use]
    pub fn is_auto_resize(&self) -> bool {
        self.auto_resize
    }

    /// Indicator spacing in pixels.
    #[must_use]
    pub fn indicator_info(&self) -> IndicatorLayoutInfo {
        self.indicator
            .unwrap_or_else(IndicatorLayoutInfo::global_default)
            .scaled(self.density)
    }

    /// Largest box the message may occupy on `gravity`'s side.
    fn max_message_box(
        &self,
        gravity: Gravity,
        input: &LayoutInput,
        info: &IndicatorLayoutInfo,
        effective: Rect,
    ) -> Size {
        let span = available_span(gravity, input.target, input.container, input.reserved);
        let reserve = info.min_total_length();
        let limit = match gravity.axis() {
            Axis::Vertical => Size::new(span.width, span.height.saturating_sub(reserve)),
            Axis::Horizontal => Size::new(span.width.saturating_sub(reserve), span.height),
        };
        limit.min(effective.size())
    }
}

impl LayoutManager for DefaultLayoutManager {
    fn layout(
        &self,
        gravity: Gravity,
        input: &LayoutInput,
        measure: &dyn MeasureMessage,
    ) -> Option<LayoutOutcome> {
        let effective = input.effective_container();
        if effective.is_empty() {
            debug!(
                container = ?input.container,
                insets = ?input.insets,
                "empty layout container, keeping previous geometry"
            );
            return None;
        }

        let info = self.indicator_info();
        let axis = gravity.axis();
        let available = available_length(gravity, input.target, input.container, input.reserved);

        let mut message_size = input.message_size;
        let mut resized = None;
        if self.auto_resize {
            let max_box = self.max_message_box(gravity, input, &info, effective);
            let measured = measure.measure(max_box).min(max_box);
            if measured != message_size {
                debug!(previous = ?message_size, measured = ?measured, "auto-resized message");
                message_size = measured;
                resized = Some(measured);
            }
        }

        let message_length = axis.length_of(message_size);
        let fits = message_length <= available;
        if !fits {
            warn!(
                gravity = %gravity,
                message_length,
                available,
                "message does not fit on the {gravity} side; use a custom layout manager or leave gravity unpinned"
            );
        }

        let available_without_margins = available.saturating_sub(info.margins());
        let indicator_length = available_without_margins
            .saturating_sub(message_length)
            .min(info.max_length)
            .max(0);

        let (margin_start, margin_end) = if available_without_margins < 0 || indicator_length == 0
        {
            (0, 0)
        } else {
            (info.margin_start, info.margin_end)
        };

        let (indicator, message) = place(
            gravity,
            input.target,
            message_size,
            indicator_length,
            margin_start,
            margin_end,
        );
        let message = message.reposition_inside(&effective);

        debug!(
            gravity = %gravity,
            indicator_rect = ?indicator,
            message_rect = ?message,
            indicator_length,
            "layout pass"
        );

        Some(LayoutOutcome {
            gravity,
            indicator,
            message,
            indicator_length,
            margin_start,
            margin_end,
            available,
            resized,
            fits,
        })
    }
}

/// Direction-specific placement before clamping.
///
/// The indicator spans the target's cross-axis extent; the message is
/// centered on the target's cross-axis center.
fn place(
    gravity: Gravity,
    target: Rect,
    message: Size,
    indicator_length: i32,
    margin_start: i32,
    margin_end: i32,
) -> (Rect, Rect) {
    let center_x = target.center_x();
    let center_y = target.center_y();

    match gravity {
        Gravity::Bottom => {
            let indicator_top = target.bottom().saturating_add(margin_start);
            let indicator_bottom = indicator_top.saturating_add(indicator_length);
            let indicator =
                Rect::from_ltrb(target.left(), indicator_top, target.right(), indicator_bottom);

            let message_left = center_x.saturating_sub(message.width / 2).max(0);
            let message_top = indicator_bottom.saturating_add(margin_end);
            (
                indicator,
                Rect::new(message_left, message_top, message.width, message.height),
            )
        }
        Gravity::Top => {
            let indicator_bottom = target.top().saturating_sub(margin_start);
            let indicator_top = indicator_bottom.saturating_sub(indicator_length);
            let indicator =
                Rect::from_ltrb(target.left(), indicator_top, target.right(), indicator_bottom);

            let message_bottom = indicator_top.saturating_sub(margin_end);
            let message_left = center_x.saturating_sub(message.width / 2);
            (
                indicator,
                Rect::new(
                    message_left,
                    message_bottom.saturating_sub(message.height),
                    message.width,
                    message.height,
                ),
            )
        }
        Gravity::Left => {
            let indicator_right = target.left().saturating_sub(margin_start);
            let indicator_left = indicator_right.saturating_sub(indicator_length);
            let indicator =
                Rect::from_ltrb(indicator_left, target.top(), indicator_right, target.bottom());

            let message_right = indicator_left.saturating_sub(margin_end);
            let message_top = center_y.saturating_sub(message.height / 2);
            (
                indicator,
                Rect::new(
                    message_right.saturating_sub(message.width),
                    message_top,
                    message.width,
                    message.height,
                ),
            )
        }
        Gravity::Right => {
            let indicator_left = target.right().saturating_add(margin_start);
            let indicator_right = indicator_left.saturating_add(indicator_length);
            let indicator =
                Rect::from_ltrb(indicator_left, target.top(), indicator_right, target.bottom());

            let message_left = indicator_right.saturating_add(margin_end);
            let message_top = center_y.saturating_sub(message.height / 2);
            (
                indicator,
                Rect::new(message_left, message_top, message.width, message.height),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect::from_ltrb(0, 0, 1000, 2000);
    const TARGET: Rect = Rect::from_ltrb(400, 900, 600, 1100);

    fn manager() -> DefaultLayoutManager {
        DefaultLayoutManager::new().indicator(IndicatorLayoutInfo::new(10, 5, 40, 8))
    }

    fn input(message: Size) -> LayoutInput {
        LayoutInput {
            target: TARGET,
            container: SCREEN,
            message_size: message,
            ..LayoutInput::default()
        }
    }

    #[test]
    fn bottom_places_indicator_then_message() {
        let out = manager()
            .layout(Gravity::Bottom, &input(Size::new(300, 100)), &Size::ZERO)
            .unwrap();
        assert_eq!(out.indicator, Rect::from_ltrb(400, 1110, 600, 1150));
        assert_eq!(out.message, Rect::new(350, 1155, 300, 100));
        assert_eq!(out.indicator_length, 40);
        assert_eq!((out.margin_start, out.margin_end), (10, 5));
        assert!(out.fits);
        assert_eq!(out.resized, None);
    }

    #[test]
    fn top_mirrors_bottom() {
        let out = manager()
            .layout(Gravity::Top, &input(Size::new(300, 100)), &Size::ZERO)
            .unwrap();
        assert_eq!(out.indicator, Rect::from_ltrb(400, 850, 600, 890));
        assert_eq!(out.message, Rect::from_ltrb(350, 745, 650, 845));
    }

    #[test]
    fn left_centers_vertically() {
        let out = manager()
            .layout(Gravity::Left, &input(Size::new(200, 80)), &Size::ZERO)
            .unwrap();
        assert_eq!(out.indicator, Rect::from_ltrb(350, 900, 390, 1100));
        assert_eq!(out.message, Rect::from_ltrb(145, 960, 345, 1040));
    }

    #[test]
    fn right_mirrors_left() {
        let out = manager()
            .layout(Gravity::Right, &input(Size::new(200, 80)), &Size::ZERO)
            .unwrap();
        assert_eq!(out.indicator, Rect::from_ltrb(610, 900, 650, 1100));
        assert_eq!(out.message, Rect::from_ltrb(655, 960, 855, 1040));
    }

    #[test]
    fn indicator_shrinks_before_message_overlaps() {
        // Right side has 400px; message 370 + margins 15 leaves 15 for the indicator.
        let out = manager()
            .layout(Gravity::Right, &input(Size::new(370, 80)), &Size::ZERO)
            .unwrap();
        assert_eq!(out.indicator_length, 15);
        assert_eq!(out.message.right(), 1000);
    }

    #[test]
    fn margins_collapse_when_indicator_is_zero() {
        let out = manager()
            .layout(Gravity::Right, &input(Size::new(390, 80)), &Size::ZERO)
            .unwrap();
        assert_eq!(out.indicator_length, 0);
        assert_eq!((out.margin_start, out.margin_end), (0, 0));
        assert_eq!(out.indicator.width, 0);
        assert_eq!(out.message.left(), 600);
        assert!(out.fits);
    }

    #[test]
    fn oversized_message_is_flagged_and_clamped() {
        let out = manager()
            .layout(Gravity::Right, &input(Size::new(500, 80)), &Size::ZERO)
            .unwrap();
        assert!(!out.fits);
        assert_eq!(out.indicator_length, 0);
        assert_eq!(out.message, Rect::from_ltrb(500, 960, 1000, 1040));
    }

    #[test]
    fn bottom_message_left_edge_clamped_to_zero() {
        let target = Rect::from_ltrb(0, 100, 40, 140);
        let layout_input = LayoutInput {
            target,
            container: SCREEN,
            message_size: Size::new(300, 50),
            ..LayoutInput::default()
        };
        let out = manager()
            .layout(Gravity::Bottom, &layout_input, &Size::ZERO)
            .unwrap();
        assert_eq!(out.message.left(), 0);
    }

    #[test]
    fn insets_keep_message_away_from_edges() {
        let target = Rect::from_ltrb(0, 100, 40, 140);
        let layout_input = LayoutInput {
            target,
            container: SCREEN,
            insets: Sides::all(20),
            message_size: Size::new(300, 50),
            ..LayoutInput::default()
        };
        let out = manager()
            .layout(Gravity::Bottom, &layout_input, &Size::ZERO)
            .unwrap();
        assert_eq!(out.message.left(), 20);
    }

    #[test]
    fn empty_effective_container_skips_pass() {
        let layout_input = LayoutInput {
            container: Rect::from_ltrb(0, 0, 30, 30),
            insets: Sides::all(15),
            ..input(Size::new(10, 10))
        };
        assert!(
            manager()
                .layout(Gravity::Top, &layout_input, &Size::ZERO)
                .is_none()
        );
    }

    #[test]
    fn auto_resize_limits_message_to_room() {
        let m = manager().auto_resize(true);
        // Left has 400px; reserve margins 15 + min length 8.
        let measure = |max: Size| Size::new(max.width.min(600), 120);
        let out = m
            .layout(Gravity::Left, &input(Size::new(600, 120)), &measure)
            .unwrap();
        assert_eq!(out.resized, Some(Size::new(377, 120)));
        assert_eq!(out.message.width, 377);
        assert!(out.fits);
        assert_eq!(out.indicator_length, 8);
        assert_eq!(out.message.left(), 0);
    }

    #[test]
    fn auto_resize_reports_nothing_when_size_is_unchanged() {
        let m = manager().auto_resize(true);
        let measure = |_max: Size| Size::new(200, 80);
        let out = m
            .layout(Gravity::Right, &input(Size::new(200, 80)), &measure)
            .unwrap();
        assert_eq!(out.resized, None);
    }

    #[test]
    fn density_scales_indicator() {
        let m = manager().density(2.0);
        let out = m
            .layout(Gravity::Bottom, &input(Size::new(300, 100)), &Size::ZERO)
            .unwrap();
        assert_eq!(out.margin_start, 20);
        assert_eq!(out.indicator_length, 80);
    }

    #[test]
    fn bad_density_falls_back_to_one() {
        assert_eq!(manager().density(0.0).indicator_info().margin_start, 10);
        assert_eq!(manager().density(f32::NAN).indicator_info().margin_start, 10);
    }

    #[test]
    fn default_gravity_for_uses_selector() {
        let gravity = manager().gravity_for(&input(Size::new(10, 10)));
        assert_eq!(gravity, Gravity::Bottom);
    }

    #[test]
    fn message_wider_than_container_ends_flush_right() {
        let out = manager()
            .layout(Gravity::Bottom, &input(Size::new(1200, 50)), &Size::ZERO)
            .unwrap();
        assert_eq!(out.message, Rect::from_ltrb(-200, 1155, 1000, 1205));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let container = Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        let targets = [
            Rect::new(i32::MAX - 50, i32::MAX - 50, 40, 40),
            Rect::new(i32::MIN, i32::MIN, 40, 40),
            Rect::new(2_000_000_000, -2_000_000_000, 100, 100),
        ];
        let manager = manager().auto_resize(true);
        for target in targets {
            let layout_input = LayoutInput {
                target,
                container,
                message_size: Size::new(300, 100),
                ..LayoutInput::default()
            };
            for gravity in Gravity::SELECTION_ORDER {
                let out = manager
                    .layout(gravity, &layout_input, &Size::new(300, 100))
                    .unwrap();
                assert!((0..=40).contains(&out.indicator_length));
            }
        }
    }
}
