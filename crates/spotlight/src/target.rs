#![forbid(unsafe_code)]

//! What the spotlight highlights.
//!
//! The overlay never owns the highlighted element. A [`Target`] holds a weak
//! reference (or a plain rectangle), so a view dropped mid-session degrades to
//! an unattached target with a zero rectangle.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use spotlight_core::event::PointerEvent;
use spotlight_core::geometry::{Point, Rect, ScreenNode, bounding_rect};

use crate::dismiss::DismissHandle;

/// Shape cut out of the dimmed background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outline {
    Rect(Rect),
    /// Closed path through the given screen points.
    Polygon(Vec<Point>),
}

impl Outline {
    /// Smallest rectangle enclosing the outline.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect(rect) => *rect,
            Self::Polygon(points) => {
                let mut iter = points.iter();
                let Some(first) = iter.next() else {
                    return Rect::default();
                };
                let (mut l, mut t, mut r, mut b) = (first.x, first.y, first.x, first.y);
                for p in iter {
                    l = l.min(p.x);
                    t = t.min(p.y);
                    r = r.max(p.x);
                    b = b.max(p.y);
                }
                Rect::from_ltrb(l, t, r, b)
            }
        }
    }
}

/// A highlighted element with its own geometry, shape, or input handling.
///
/// Every method except [`SpotlightTarget::bounding_rect`] has a default, so
/// implementors opt into the capabilities they need.
pub trait SpotlightTarget {
    /// Absolute on-screen rectangle.
    fn bounding_rect(&self) -> Rect;

    /// Cutout shape; the bounding rectangle by default.
    fn outline(&self) -> Outline {
        Outline::Rect(self.bounding_rect())
    }

    /// Whether touches should go to [`SpotlightTarget::on_touch`] instead of
    /// the dismissal policy.
    fn handles_touch(&self) -> bool {
        false
    }

    /// Handle a delegated touch. Return `true` to consume it.
    fn on_touch(&mut self, _event: PointerEvent) -> bool {
        false
    }

    /// Called when a session starts with this target.
    fn attach(&mut self, _handle: DismissHandle) {}

    /// Called when the session ends.
    fn detach(&mut self) {}

    /// Start the highlight animation once the entrance has finished.
    fn start_animation(&mut self) {}

    fn stop_animation(&mut self) {}

    /// Advance the highlight animation. Return `true` if it needs a redraw.
    fn tick(&mut self, _dt: Duration) -> bool {
        false
    }
}

/// Non-owning reference to the highlighted element.
#[derive(Clone)]
pub enum Target {
    /// A fixed screen rectangle.
    Region(Rect),
    /// A host view; its bounds are read through [`ScreenNode`].
    View(Weak<dyn ScreenNode>),
    /// A view implementing [`SpotlightTarget`].
    Custom(Weak<RefCell<dyn SpotlightTarget>>),
}

impl Target {
    #[must_use]
    pub fn region(rect: Rect) -> Self {
        Self::Region(rect)
    }

    #[must_use]
    pub fn view<N: ScreenNode + 'static>(node: &Rc<N>) -> Self {
        let weak: Weak<N> = Rc::downgrade(node);
        Self::View(weak)
    }

    #[must_use]
    pub fn custom<T: SpotlightTarget + 'static>(target: &Rc<RefCell<T>>) -> Self {
        let weak: Weak<RefCell<T>> = Rc::downgrade(target);
        Self::Custom(weak)
    }

    /// Current absolute rectangle; zero when the element is gone or busy.
    #[must_use]
    pub fn rect(&self) -> Rect {
        match self {
            Self::Region(rect) => *rect,
            Self::View(node) => node
                .upgrade()
                .map(|node| bounding_rect(node.as_ref()))
                .unwrap_or_default(),
            Self::Custom(target) => target
                .upgrade()
                .and_then(|t| t.try_borrow().ok().map(|t| t.bounding_rect()))
                .unwrap_or_default(),
        }
    }

    /// Cutout shape for the current frame.
    #[must_use]
    pub fn outline(&self) -> Outline {
        match self {
            Self::Custom(target) => target
                .upgrade()
                .and_then(|t| t.try_borrow().ok().map(|t| t.outline()))
                .unwrap_or(Outline::Rect(Rect::default())),
            _ => Outline::Rect(self.rect()),
        }
    }

    /// Whether the referenced element still exists.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        match self {
            Self::Region(_) => true,
            Self::View(node) => node.strong_count() > 0,
            Self::Custom(target) => target.strong_count() > 0,
        }
    }

    /// The custom target, when this is one and it is still alive.
    #[must_use]
    pub fn as_custom(&self) -> Option<Rc<RefCell<dyn SpotlightTarget>>> {
        match self {
            Self::Custom(target) => target.upgrade(),
            _ => None,
        }
    }
}

impl From<Rect> for Target {
    fn from(rect: Rect) -> Self {
        Self::Region(rect)
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Region(rect) => f.debug_tuple("Region").field(rect).finish(),
            Self::View(_) => f
                .debug_struct("View")
                .field("alive", &self.is_alive())
                .finish(),
            Self::Custom(_) => f
                .debug_struct("Custom")
                .field("alive", &self.is_alive())
                .finish(),
        }
    }
}
