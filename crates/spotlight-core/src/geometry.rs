#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All coordinates are signed screen pixels with the origin at the top-left
//! corner. Layout may legitimately produce rectangles that start above or to
//! the left of the screen before they are clamped, so positions are `i32`.
//! Widths and heights are never negative: every constructor saturates them at
//! zero.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// The empty size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size, saturating negative extents at zero.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width: if width < 0 { 0 } else { width },
            height: if height < 0 { 0 } else { height },
        }
    }

    /// Check if either extent is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Size) -> Size {
        Size::new(self.width.min(other.width), self.height.min(other.height))
    }
}

/// An axis-aligned rectangle.
///
/// Stored as origin plus size; `right()` and `bottom()` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle. Negative extents saturate at zero.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        let size = Size::new(width, height);
        Self {
            x,
            y,
            width: size.width,
            height: size.height,
        }
    }

    /// Create a rectangle from its four edges.
    ///
    /// An inverted pair of edges produces a zero extent on that axis.
    #[inline]
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(
            left,
            top,
            right.saturating_sub(left),
            bottom.saturating_sub(top),
        )
    }

    /// Create a rectangle from an origin and a size.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Left edge (alias for x).
    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Horizontal center, rounded toward negative infinity.
    #[inline]
    pub const fn center_x(&self) -> i32 {
        ((self.x as i64 + self.right() as i64) >> 1) as i32
    }

    /// Vertical center, rounded toward negative infinity.
    #[inline]
    pub const fn center_y(&self) -> i32 {
        ((self.y as i64 + self.bottom() as i64) >> 1) as i32
    }

    #[inline]
    pub const fn center(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    /// Area in pixels.
    #[inline]
    pub const fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if `other` lies entirely within this rectangle.
    #[inline]
    pub const fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Move the rectangle by the given offsets, keeping its size.
    #[inline]
    #[must_use]
    pub const fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width,
            self.height,
        )
    }

    /// Create a new rectangle inside the current one with the given margin.
    pub fn inner(&self, margin: Sides) -> Rect {
        Rect::from_ltrb(
            self.left().saturating_add(margin.left),
            self.top().saturating_add(margin.top),
            self.right().saturating_sub(margin.right),
            self.bottom().saturating_sub(margin.bottom),
        )
    }

    /// Compute the intersection with another rectangle.
    ///
    /// Returns an empty rectangle if the rectangles don't overlap.
    #[inline]
    pub fn intersection(&self, other: &Rect) -> Rect {
        self.intersection_opt(other).unwrap_or_default()
    }

    /// Compute the intersection with another rectangle, returning `None` if no overlap.
    #[inline]
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::from_ltrb(x, y, right, bottom))
        } else {
            None
        }
    }

    /// Translate this rectangle so that it lies within `parent`.
    ///
    /// The size is preserved. Left/top are adjusted first, then right/bottom,
    /// so a rectangle larger than `parent` on an axis ends flush with the
    /// parent's right/bottom edge.
    #[must_use]
    pub fn reposition_inside(&self, parent: &Rect) -> Rect {
        let mut x = self.x;
        let mut y = self.y;

        if x < parent.x {
            x = parent.x;
        }
        if y < parent.y {
            y = parent.y;
        }
        if x.saturating_add(self.width) > parent.right() {
            x = parent.right().saturating_sub(self.width);
        }
        if y.saturating_add(self.height) > parent.bottom() {
            y = parent.bottom().saturating_sub(self.height);
        }

        Rect::new(x, y, self.width, self.height)
    }
}

/// Sides for insets and margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Sides {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Sides {
    /// No inset on any side.
    pub const ZERO: Self = Self::all(0);

    /// Create new sides with equal values.
    pub const fn all(val: i32) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Create new sides with horizontal values only.
    pub const fn horizontal(val: i32) -> Self {
        Self {
            top: 0,
            right: val,
            bottom: 0,
            left: val,
        }
    }

    /// Create new sides with vertical values only.
    pub const fn vertical(val: i32) -> Self {
        Self {
            top: val,
            right: 0,
            bottom: val,
            left: 0,
        }
    }

    /// Only a bottom value, e.g. a navigation bar.
    pub const fn bottom(val: i32) -> Self {
        Self {
            top: 0,
            right: 0,
            bottom: val,
            left: 0,
        }
    }

    /// Create new sides with specific values.
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub const fn horizontal_sum(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Sum of top and bottom.
    #[inline]
    pub const fn vertical_sum(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }

    /// Whether no side is negative.
    #[inline]
    pub const fn is_non_negative(&self) -> bool {
        self.top >= 0 && self.right >= 0 && self.bottom >= 0 && self.left >= 0
    }

    /// Negative sides raised to zero.
    #[must_use]
    pub const fn non_negative(&self) -> Sides {
        Sides::new(
            if self.top < 0 { 0 } else { self.top },
            if self.right < 0 { 0 } else { self.right },
            if self.bottom < 0 { 0 } else { self.bottom },
            if self.left < 0 { 0 } else { self.left },
        )
    }

    /// Scale every side by a density factor, truncating toward zero.
    #[must_use]
    pub fn scaled(&self, density: f32) -> Sides {
        let scale = |v: i32| (v as f32 * density) as i32;
        Sides::new(
            scale(self.top),
            scale(self.right),
            scale(self.bottom),
            scale(self.left),
        )
    }
}

impl From<i32> for Sides {
    fn from(val: i32) -> Self {
        Self::all(val)
    }
}

impl From<(i32, i32)> for Sides {
    fn from((vertical, horizontal): (i32, i32)) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

impl From<(i32, i32, i32, i32)> for Sides {
    fn from((top, right, bottom, left): (i32, i32, i32, i32)) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Something the host can place on screen.
///
/// Implemented by the host toolkit's view handles so the overlay can read
/// their absolute position without knowing the view system.
pub trait ScreenNode {
    /// Top-left corner in screen coordinates, or `None` when the node is not
    /// attached to a window.
    fn screen_origin(&self) -> Option<Point>;

    /// Current measured size.
    fn size(&self) -> Size;
}

/// Absolute on-screen rectangle of a node.
///
/// Unattached nodes produce a zero rectangle; zero-sized nodes produce a
/// zero-area rectangle at their origin.
#[must_use]
pub fn bounding_rect(node: &dyn ScreenNode) -> Rect {
    match node.screen_origin() {
        Some(origin) => Rect::from_origin_size(origin, node.size()),
        None => Rect::default(),
    }
}
