#![forbid(unsafe_code)]

//! Spotlight: an onboarding overlay that dims the screen, cuts a hole around
//! a target element, and points a message at it.
//!
//! # Role in the workspace
//! This is the public crate. It owns the session controller ([`Spotlight`]),
//! the capability traits hosts implement ([`SpotlightTarget`],
//! [`MessageView`], [`IndicatorView`], [`SpotlightListener`],
//! [`OverlayHost`]), and configuration loading. Geometry and animation come
//! from `spotlight-core`; gravity selection and layout from
//! `spotlight-layout`.
//!
//! # Example
//!
//! ```
//! use spotlight::{DismissPolicy, PointerOutcome, Spotlight, SpotlightConfig, Target};
//! use spotlight_core::{PointerEvent, Rect};
//!
//! let mut overlay = Spotlight::new().config(
//!     SpotlightConfig::default()
//!         .title("Compose")
//!         .dismiss(DismissPolicy::Anywhere),
//! );
//! overlay.on_layout(Rect::new(0, 0, 1080, 1920));
//! overlay.set_target(Some(Target::region(Rect::new(900, 1700, 120, 120))));
//! overlay.start(None, false);
//!
//! let frame = overlay.frame();
//! assert!(frame.cutout.is_some());
//!
//! let outcome = overlay.handle_pointer(PointerEvent::down(10, 10));
//! assert_eq!(outcome, PointerOutcome::Consumed);
//! assert!(!overlay.is_active());
//! ```

pub mod config;
pub mod dismiss;
pub mod error;
pub mod host;
pub mod listener;
pub mod overlay;
pub mod renderables;
pub mod target;
pub mod view;

pub use config::{DismissPolicy, SpotlightConfig};
pub use dismiss::DismissHandle;
pub use error::{ConfigError, Result};
pub use host::OverlayHost;
pub use listener::SpotlightListener;
pub use overlay::{OverlayFrame, OverlayState, PointerOutcome, SharedHost, Spotlight};
pub use renderables::{LineIndicator, LinePoint, TextMessage};
pub use target::{Outline, SpotlightTarget, Target};
pub use view::{IndicatorView, MessageView};

pub use spotlight_layout::{Gravity, IndicatorLayoutInfo};
