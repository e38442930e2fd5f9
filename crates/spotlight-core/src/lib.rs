#![forbid(unsafe_code)]

//! Core: geometry, pointer events, and animation primitives for spotlight
//! overlays.
//!
//! # Role in the workspace
//! `spotlight-core` is the leaf crate. It owns the integer screen geometry
//! shared by the layout engine (`spotlight-layout`) and the overlay controller
//! (`spotlight`), the pointer events hosts feed into the overlay, and the
//! tick-driven animations the overlay runs.
//!
//! Nothing here touches a real view system: hosts describe their views through
//! [`geometry::ScreenNode`] and drive time through [`animation::Animation::tick`].

pub mod animation;
pub mod event;
pub mod geometry;

pub use event::{PointerEvent, PointerKind};
pub use geometry::{Point, Rect, ScreenNode, Sides, Size, bounding_rect};
