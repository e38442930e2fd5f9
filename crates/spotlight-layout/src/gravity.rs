#![forbid(unsafe_code)]

//! Gravity: which side of the target the message is placed on.
//!
//! # Invariants
//!
//! 1. Selection is a pure function of target, container, and reserved insets.
//! 2. Candidates are compared in [`Gravity::SELECTION_ORDER`]; the first
//!    candidate with the greatest available length wins.
//! 3. When no side has positive room (or the container is empty) the result is
//!    [`Gravity::default()`].
//!
//! Selection is greedy: it does not check that the message actually fits on
//! the chosen side, only that the side has the most room.

use serde::{Deserialize, Serialize};
use spotlight_core::geometry::{Rect, Sides, Size};

/// Side of the target the message is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gravity {
    /// Above the target.
    #[default]
    Top,
    /// Below the target.
    Bottom,
    /// Left of the target.
    Left,
    /// Right of the target.
    Right,
}

/// Axis the indicator and message are stacked along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right placement: lengths are widths.
    Horizontal,
    /// Top/bottom placement: lengths are heights.
    Vertical,
}

impl Axis {
    /// Extent of `size` along this axis.
    #[inline]
    #[must_use]
    pub const fn length_of(self, size: Size) -> i32 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }
}

impl Gravity {
    /// Candidate order used by [`select_gravity`]; earlier entries win ties.
    pub const SELECTION_ORDER: [Gravity; 4] =
        [Gravity::Right, Gravity::Left, Gravity::Bottom, Gravity::Top];

    #[inline]
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Gravity {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl std::fmt::Display for Gravity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Signed distance between the target's edge and the matching container edge
/// on `gravity`'s side, after removing the reserved inset on that side.
///
/// Negative when the target sticks out past the usable container edge.
#[must_use]
pub fn available_length(gravity: Gravity, target: Rect, container: Rect, reserved: Sides) -> i32 {
    match gravity {
        Gravity::Top => target
            .top()
            .saturating_sub(container.top().saturating_add(reserved.top)),
        Gravity::Bottom => container
            .bottom()
            .saturating_sub(reserved.bottom)
            .saturating_sub(target.bottom()),
        Gravity::Left => target
            .left()
            .saturating_sub(container.left().saturating_add(reserved.left)),
        Gravity::Right => container
            .right()
            .saturating_sub(reserved.right)
            .saturating_sub(target.right()),
    }
}

/// The free region on `gravity`'s side as a size.
///
/// The placement-axis extent is [`available_length`] (saturated at zero); the
/// cross-axis extent is the usable container extent.
#[must_use]
pub fn available_span(gravity: Gravity, target: Rect, container: Rect, reserved: Sides) -> Size {
    let length = available_length(gravity, target, container, reserved);
    let usable = container.inner(reserved);
    match gravity.axis() {
        Axis::Vertical => Size::new(usable.width, length),
        Axis::Horizontal => Size::new(length, usable.height),
    }
}

/// Pick the side with the most room for the message.
#[must_use]
pub fn select_gravity(target: Rect, container: Rect, reserved: Sides) -> Gravity {
    if container.is_empty() {
        return Gravity::default();
    }

    let mut best: Option<(Gravity, i32)> = None;
    for gravity in Gravity::SELECTION_ORDER {
        let length = available_length(gravity, target, container, reserved);
        if best.is_none_or(|(_, best_length)| length > best_length) {
            best = Some((gravity, length));
        }
    }

    match best {
        Some((gravity, length)) if length > 0 => gravity,
        _ => Gravity::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect::from_ltrb(0, 0, 1000, 2000);

    #[test]
    fn default_is_top() {
        assert_eq!(Gravity::default(), Gravity::Top);
    }

    #[test]
    fn axis_and_opposite() {
        assert_eq!(Gravity::Top.axis(), Axis::Vertical);
        assert_eq!(Gravity::Right.axis(), Axis::Horizontal);
        for g in Gravity::SELECTION_ORDER {
            assert_eq!(g.opposite().opposite(), g);
            assert_eq!(g.opposite().axis(), g.axis());
        }
    }

    #[test]
    fn available_lengths_for_centered_target() {
        let target = Rect::from_ltrb(400, 900, 600, 1100);
        let r = Sides::ZERO;
        assert_eq!(available_length(Gravity::Top, target, SCREEN, r), 900);
        assert_eq!(available_length(Gravity::Bottom, target, SCREEN, r), 900);
        assert_eq!(available_length(Gravity::Left, target, SCREEN, r), 400);
        assert_eq!(available_length(Gravity::Right, target, SCREEN, r), 400);
    }

    #[test]
    fn reserved_bottom_shrinks_bottom_only() {
        let target = Rect::from_ltrb(400, 900, 600, 1100);
        let nav = Sides::bottom(48);
        assert_eq!(available_length(Gravity::Bottom, target, SCREEN, nav), 852);
        assert_eq!(available_length(Gravity::Top, target, SCREEN, nav), 900);
    }

    #[test]
    fn tie_between_top_and_bottom_resolves_to_bottom() {
        let target = Rect::from_ltrb(400, 900, 600, 1100);
        assert_eq!(select_gravity(target, SCREEN, Sides::ZERO), Gravity::Bottom);
    }

    #[test]
    fn navigation_bar_breaks_the_tie_toward_top() {
        let target = Rect::from_ltrb(400, 900, 600, 1100);
        assert_eq!(
            select_gravity(target, SCREEN, Sides::bottom(48)),
            Gravity::Top
        );
    }

    #[test]
    fn tie_between_left_and_right_resolves_to_right() {
        let container = Rect::from_ltrb(0, 0, 1000, 300);
        let target = Rect::from_ltrb(400, 100, 600, 200);
        assert_eq!(select_gravity(target, container, Sides::ZERO), Gravity::Right);
    }

    #[test]
    fn flush_right_never_selects_right() {
        let target = Rect::from_ltrb(800, 100, 1000, 300);
        let gravity = select_gravity(target, SCREEN, Sides::ZERO);
        assert_ne!(gravity, Gravity::Right);
        assert_eq!(gravity, Gravity::Bottom);
    }

    #[test]
    fn target_covering_container_falls_back_to_default() {
        let target = Rect::from_ltrb(-10, -10, 1010, 2010);
        assert_eq!(select_gravity(target, SCREEN, Sides::ZERO), Gravity::Top);
    }

    #[test]
    fn empty_container_falls_back_to_default() {
        let target = Rect::from_ltrb(10, 10, 20, 20);
        assert_eq!(
            select_gravity(target, Rect::default(), Sides::ZERO),
            Gravity::Top
        );
    }

    #[test]
    fn span_uses_usable_cross_extent() {
        let target = Rect::from_ltrb(400, 900, 600, 1100);
        let reserved = Sides::new(24, 0, 48, 0);
        assert_eq!(
            available_span(Gravity::Bottom, target, SCREEN, reserved),
            Size::new(1000, 852)
        );
        assert_eq!(
            available_span(Gravity::Left, target, SCREEN, reserved),
            Size::new(400, 1928)
        );
    }

    #[test]
    fn span_saturates_negative_length() {
        let target = Rect::from_ltrb(400, -50, 600, 100);
        assert_eq!(
            available_span(Gravity::Top, target, SCREEN, Sides::ZERO),
            Size::new(1000, 0)
        );
    }

    #[test]
    fn gravity_serde_names() {
        let json = serde_json::to_string(&Gravity::Bottom).unwrap();
        assert_eq!(json, "\"bottom\"");
        let parsed: Gravity = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(parsed, Gravity::Left);
    }
}
