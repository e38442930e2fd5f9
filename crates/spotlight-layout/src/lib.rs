#![forbid(unsafe_code)]

//! Layout: where the message goes and how the indicator connects it.
//!
//! # Role in the workspace
//! `spotlight-layout` is pure geometry. Given the target rectangle, the overlay
//! container, and the insets, it picks a [`Gravity`] (the side of the target
//! with the most room) and computes the indicator and message rectangles for
//! that side. The overlay controller in `spotlight` calls it on every layout
//! pass and applies the results.
//!
//! # Primary responsibilities
//! - **Gravity selection**: [`select_gravity`], greedy max-room choice with a
//!   fixed tie-break order.
//! - **Indicator spacing**: [`IndicatorLayoutInfo`], with a process-wide default.
//! - **Layout**: the [`LayoutManager`] seam and [`DefaultLayoutManager`].

pub mod engine;
pub mod gravity;
pub mod indicator;

pub use engine::{DefaultLayoutManager, LayoutInput, LayoutManager, LayoutOutcome, MeasureMessage};
pub use gravity::{Axis, Gravity, available_length, available_span, select_gravity};
pub use indicator::IndicatorLayoutInfo;
