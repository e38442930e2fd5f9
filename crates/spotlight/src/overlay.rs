#![forbid(unsafe_code)]

//! The spotlight overlay controller.
//!
//! [`Spotlight`] owns the session state machine and orchestrates gravity
//! selection and layout. Drawing is the host's job: it reads an
//! [`OverlayFrame`] and paints the dimmed background, cutout, indicator and
//! message.
//!
//! # State Machine
//!
//! ```text
//! Idle ──layout──▶ Positioned ──start──▶ AnimatingIn ──fade done──▶ Visible
//!                                            │                        │
//!                                            └──────────end───────────┤
//!                                                                     ▼
//!                                                 Dismissed ◀── AnimatingOut
//! ```
//!
//! `Dismissed` is recycled to `Idle` when the next session starts.
//!
//! # Invariants
//!
//! 1. `on_end` fires exactly once per started session, however many times
//!    `end` is called and whatever state the entrance animation is in.
//! 2. Ending a session stops the entrance fade and every animation hook before
//!    the overlay is detached from its host.
//! 3. `tick` only advances paint state; it never re-runs layout.
//! 4. Dismissal handles only affect the session that issued them.
//!
//! # Failure Modes
//!
//! - No target: layout is skipped, the frame has no cutout and the whole
//!   container is dimmed.
//! - Empty container after insets: the previous frames are kept.
//! - Message larger than its side: a warning is logged by the layout engine
//!   and best-effort geometry is used.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use spotlight_core::animation::{Animation, Fade};
use spotlight_core::event::PointerEvent;
use spotlight_core::geometry::{Rect, Sides, Size};
use spotlight_layout::{Gravity, LayoutInput, LayoutManager};
use tracing::{debug, trace, warn};

use crate::config::{DismissPolicy, SpotlightConfig};
use crate::dismiss::DismissHandle;
use crate::host::OverlayHost;
use crate::listener::SpotlightListener;
use crate::renderables::{LineIndicator, TextMessage};
use crate::target::{Outline, SpotlightTarget, Target};
use crate::view::{IndicatorView, MessageView};

/// Shared handle to a host view hierarchy.
pub type SharedHost = Rc<RefCell<dyn OverlayHost>>;

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayState {
    /// No layout has run yet.
    Idle,
    /// Laid out, not shown.
    Positioned,
    /// Shown, entrance fade running.
    AnimatingIn,
    /// Shown and accepting dismissal touches.
    Visible,
    /// Tearing down; only observable from inside `on_end`.
    AnimatingOut,
    /// Session over.
    Dismissed,
}

impl OverlayState {
    /// Whether the overlay is on screen.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::AnimatingIn | Self::Visible)
    }
}

/// What the host should do with a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerOutcome {
    /// The overlay used the event; do not forward it.
    Consumed,
    /// Forward the event to the UI under the overlay.
    PassThrough,
    /// The overlay is not showing; handle the event normally.
    Ignored,
}

/// Everything a host needs to paint one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayFrame {
    /// Area to dim.
    pub bounds: Rect,
    /// Highlight cut out of the dimmed area; `None` without a target.
    pub cutout: Option<Outline>,
    pub indicator: Rect,
    pub message: Rect,
    pub gravity: Gravity,
    /// Overlay opacity in `[0.0, 1.0]`.
    pub opacity: f32,
}

/// The spotlight overlay controller.
pub struct Spotlight {
    config: SpotlightConfig,
    layout: Box<dyn LayoutManager>,
    custom_layout: bool,
    message: Box<dyn MessageView>,
    indicator: Box<dyn IndicatorView>,
    listener: Option<Box<dyn SpotlightListener>>,
    default_host: Option<SharedHost>,

    state: OverlayState,
    target: Option<Target>,
    container: Rect,
    target_rect: Rect,
    gravity: Gravity,
    indicator_frame: Rect,
    message_frame: Rect,

    host: Option<SharedHost>,
    entrance: Option<Fade>,
    hooks_running: bool,
    dismiss: Option<Rc<Cell<bool>>>,
}

impl Default for Spotlight {
    fn default() -> Self {
        Self::new()
    }
}

impl Spotlight {
    /// Create an overlay with the stock [`TextMessage`] and [`LineIndicator`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_views(
            Box::new(TextMessage::new(Size::new(240, 96))),
            Box::new(LineIndicator::new()),
        )
    }

    /// Create an overlay with custom message and indicator renderables.
    #[must_use]
    pub fn with_views(message: Box<dyn MessageView>, indicator: Box<dyn IndicatorView>) -> Self {
        let config = SpotlightConfig::default();
        Self {
            layout: Box::new(config.layout_manager()),
            custom_layout: false,
            config,
            message,
            indicator,
            listener: None,
            default_host: None,
            state: OverlayState::Idle,
            target: None,
            container: Rect::default(),
            target_rect: Rect::default(),
            gravity: Gravity::default(),
            indicator_frame: Rect::default(),
            message_frame: Rect::default(),
            host: None,
            entrance: None,
            hooks_running: false,
            dismiss: None,
        }
    }

    /// Apply `config` before first use (builder pattern).
    #[must_use]
    pub fn config(mut self, config: SpotlightConfig) -> Self {
        self.apply(config);
        self
    }

    /// Replace the stock layout manager.
    ///
    /// A custom manager is kept across [`Spotlight::apply`] calls.
    #[must_use]
    pub fn layout_manager(mut self, manager: Box<dyn LayoutManager>) -> Self {
        self.layout = manager;
        self.custom_layout = true;
        self
    }

    #[must_use]
    pub fn listener(mut self, listener: Box<dyn SpotlightListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Host used when [`Spotlight::start`] is not given one.
    #[must_use]
    pub fn host(mut self, host: SharedHost) -> Self {
        self.default_host = Some(host);
        self
    }

    // ── Accessors ───────────────────────────────────────────────────────

    #[must_use]
    pub fn state(&self) -> OverlayState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    #[must_use]
    pub fn settings(&self) -> &SpotlightConfig {
        &self.config
    }

    #[must_use]
    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    /// Target rectangle from the last layout pass.
    #[must_use]
    pub fn target_rect(&self) -> Rect {
        self.target_rect
    }

    #[must_use]
    pub fn container(&self) -> Rect {
        self.container
    }

    #[must_use]
    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    #[must_use]
    pub fn indicator_frame(&self) -> Rect {
        self.indicator_frame
    }

    #[must_use]
    pub fn message_frame(&self) -> Rect {
        self.message_frame
    }

    #[must_use]
    pub fn message(&self) -> &dyn MessageView {
        self.message.as_ref()
    }

    #[must_use]
    pub fn indicator(&self) -> &dyn IndicatorView {
        self.indicator.as_ref()
    }

    // ── Configuration and layout ────────────────────────────────────────

    /// Apply a new configuration: push content into the message, rebuild the
    /// stock layout manager, and lay out again.
    pub fn apply(&mut self, config: SpotlightConfig) {
        if let Err(err) = config.validate() {
            warn!(error = %err, "applying invalid spotlight config; layout sanitizes it");
        }
        self.message
            .set_content(config.title.as_deref(), config.description.as_deref());
        if !self.custom_layout {
            self.layout = Box::new(config.layout_manager());
        }
        self.config = config;
        self.relayout();
    }

    /// Replace the target and lay out again.
    ///
    /// During a session the old custom target is detached and the new one
    /// attached to the running session.
    pub fn set_target(&mut self, target: Option<Target>) {
        if self.state.is_active() {
            self.detach_custom_target();
            self.target = target;
            if let Some(handle) = self.dismiss_handle() {
                self.with_custom_target(|t| t.attach(handle));
            }
            if self.hooks_running {
                self.with_custom_target(|t| t.start_animation());
            }
        } else {
            self.target = target;
        }
        self.relayout();
    }

    /// The overlay's own bounds changed (or a layout pass is due).
    pub fn on_layout(&mut self, container: Rect) {
        self.container = container;
        self.relayout();
    }

    /// Replace the overlay insets and lay out again.
    pub fn set_insets(&mut self, insets: impl Into<Sides>) {
        self.config.insets = insets.into();
        self.relayout();
    }

    /// Run a layout pass with the current target, container, and config.
    pub fn relayout(&mut self) {
        let Some(target) = &self.target else {
            self.target_rect = Rect::default();
            self.indicator_frame = Rect::default();
            self.message_frame = Rect::default();
            debug!("no spotlight target, skipping layout");
            self.mark_positioned();
            return;
        };
        self.target_rect = target.rect();

        let input = LayoutInput {
            target: self.target_rect,
            container: self.container,
            insets: self.config.insets.non_negative(),
            reserved: self.config.reserved.non_negative(),
            message_size: self.message.size(),
        };
        let pinned = self.config.gravity;
        let gravity = pinned.unwrap_or_else(|| self.layout.gravity_for(&input));

        let _span = tracing::debug_span!(
            "spotlight.layout",
            gravity = %gravity,
            pinned = pinned.is_some(),
        )
        .entered();

        let outcome = {
            let message = self.message.as_ref();
            let measure = |max: Size| message.measure(max);
            self.layout.layout(gravity, &input, &measure)
        };
        let Some(outcome) = outcome else {
            return;
        };

        self.indicator.on_gravity(outcome.gravity);
        self.message.on_gravity(outcome.gravity);
        self.gravity = outcome.gravity;
        self.indicator_frame = outcome.indicator;
        self.message_frame = outcome.message;
        self.indicator.set_frame(outcome.indicator);
        self.message.set_frame(outcome.message);
        self.mark_positioned();

        if self.state.is_active() {
            self.request_redraw();
        }
    }

    fn mark_positioned(&mut self) {
        if self.state == OverlayState::Idle {
            self.transition(OverlayState::Positioned);
        }
    }

    // ── Session ─────────────────────────────────────────────────────────

    /// Show the overlay.
    ///
    /// Lays out, attaches to `container` (or the default host), and starts the
    /// entrance fade. With `animate == false` or a zero entrance duration the
    /// overlay is visible immediately.
    pub fn start(&mut self, container: Option<SharedHost>, animate: bool) {
        if self.state.is_active() {
            debug!(state = ?self.state, "spotlight already showing");
            return;
        }
        if self.state == OverlayState::Dismissed {
            self.transition(OverlayState::Idle);
        }

        let requested = Rc::new(Cell::new(false));
        self.dismiss = Some(requested.clone());
        self.message.attach(DismissHandle::new(requested.clone()));
        self.with_custom_target(|t| t.attach(DismissHandle::new(requested)));

        self.relayout();

        self.host = container.or_else(|| self.default_host.clone());
        match &self.host {
            Some(host) => host.borrow_mut().attach_overlay(),
            None => debug!("no overlay host; the caller draws the overlay itself"),
        }

        let duration = self.config.entrance_duration();
        if animate && !duration.is_zero() {
            self.entrance = Some(Fade::new(duration));
            self.transition(OverlayState::AnimatingIn);
        } else {
            self.entrance = None;
            self.transition(OverlayState::AnimatingIn);
            self.finish_entrance(Duration::ZERO);
        }

        if let Some(listener) = &mut self.listener {
            listener.on_start(self.target.as_ref());
        }
        self.request_redraw();
    }

    /// Advance animations by `dt`.
    ///
    /// Returns `true` when something visible changed. Pending dismiss requests
    /// are honoured first.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.poll_dismiss() {
            return true;
        }

        let changed = match self.state {
            OverlayState::AnimatingIn => {
                let overshoot = match &mut self.entrance {
                    Some(fade) => {
                        fade.tick(dt);
                        fade.is_complete().then(|| fade.overshoot())
                    }
                    None => Some(dt),
                };
                if let Some(overshoot) = overshoot {
                    self.finish_entrance(overshoot);
                }
                true
            }
            OverlayState::Visible => self.tick_hooks(dt),
            _ => false,
        };

        if changed {
            self.request_redraw();
        }
        changed
    }

    fn finish_entrance(&mut self, overshoot: Duration) {
        self.entrance = None;
        self.transition(OverlayState::Visible);

        self.indicator.start_animation();
        self.message.start_animation();
        self.with_custom_target(|t| t.start_animation());
        self.hooks_running = true;

        if !overshoot.is_zero() {
            self.tick_hooks(overshoot);
        }
    }

    fn tick_hooks(&mut self, dt: Duration) -> bool {
        if !self.hooks_running {
            return false;
        }
        let mut changed = self.indicator.tick(dt);
        changed |= self.message.tick(dt);
        changed |= self.with_custom_target(|t| t.tick(dt)).unwrap_or(false);
        changed
    }

    /// Route a pointer event.
    ///
    /// Only a visible overlay reacts. During the entrance fade events are
    /// swallowed without dismissing.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> PointerOutcome {
        if self.poll_dismiss() {
            return PointerOutcome::Ignored;
        }
        match self.state {
            OverlayState::Visible => {}
            OverlayState::AnimatingIn => return PointerOutcome::Consumed,
            _ => return PointerOutcome::Ignored,
        }

        if self.config.passes_target_touches() {
            return if self.target_rect.contains(event.x, event.y) {
                PointerOutcome::PassThrough
            } else {
                PointerOutcome::Consumed
            };
        }

        if let Some(custom) = self.target.as_ref().and_then(Target::as_custom)
            && let Ok(mut target) = custom.try_borrow_mut()
            && target.handles_touch()
        {
            return if target.on_touch(event) {
                PointerOutcome::Consumed
            } else {
                PointerOutcome::PassThrough
            };
        }

        if !event.is_down() {
            return PointerOutcome::Consumed;
        }

        let (x, y) = (event.x, event.y);
        let dismiss = match self.config.dismiss {
            DismissPolicy::Anywhere => true,
            DismissPolicy::OutsideMessage => !self.message_frame.contains(x, y),
            DismissPolicy::TargetOnly => self.target_rect.contains(x, y),
            DismissPolicy::MessageOnly => self.message_frame.contains(x, y),
        };
        if dismiss {
            trace!(policy = ?self.config.dismiss, x, y, "dismissal touch");
            self.end();
        }
        PointerOutcome::Consumed
    }

    /// End the session if a [`DismissHandle`] asked for it.
    ///
    /// Returns `true` when the session was ended by this call.
    pub fn poll_dismiss(&mut self) -> bool {
        let requested = self.dismiss.as_ref().is_some_and(|flag| flag.get());
        if requested && self.state.is_active() {
            debug!("dismiss requested by message or target");
            self.end();
            return true;
        }
        false
    }

    /// End the session.
    ///
    /// Cancels the entrance fade and every animation hook, notifies the
    /// listener, detaches back-references, and detaches from the host.
    /// Calling it again, or before `start`, does nothing.
    pub fn end(&mut self) {
        if !self.state.is_active() {
            trace!(state = ?self.state, "end ignored");
            return;
        }

        if self.entrance.take().is_some() {
            debug!("entrance animation cancelled");
        }
        if self.hooks_running {
            self.indicator.stop_animation();
            self.message.stop_animation();
            self.with_custom_target(|t| t.stop_animation());
            self.hooks_running = false;
        }

        self.transition(OverlayState::AnimatingOut);
        if let Some(listener) = &mut self.listener {
            listener.on_end(self.target.as_ref());
        }

        self.message.detach();
        self.detach_custom_target();
        self.dismiss = None;

        if let Some(host) = self.host.take() {
            host.borrow_mut().detach_overlay();
        }

        self.target = None;
        self.target_rect = Rect::default();
        self.transition(OverlayState::Dismissed);
    }

    // ── Frame ───────────────────────────────────────────────────────────

    /// Paint state for the current moment.
    #[must_use]
    pub fn frame(&self) -> OverlayFrame {
        let opacity = match self.state {
            OverlayState::AnimatingIn => self.entrance.as_ref().map_or(1.0, Animation::value),
            OverlayState::Visible => 1.0,
            _ => 0.0,
        };
        OverlayFrame {
            bounds: self.container,
            cutout: self.target.as_ref().map(Target::outline),
            indicator: self.indicator_frame,
            message: self.message_frame,
            gravity: self.gravity,
            opacity,
        }
    }

    // ── Internals ───────────────────────────────────────────────────────

    fn transition(&mut self, next: OverlayState) {
        trace!(from = ?self.state, to = ?next, "spotlight state");
        self.state = next;
    }

    fn dismiss_handle(&self) -> Option<DismissHandle> {
        self.dismiss.as_ref().map(|flag| DismissHandle::new(flag.clone()))
    }

    fn detach_custom_target(&mut self) {
        if self.hooks_running {
            self.with_custom_target(|t| t.stop_animation());
        }
        self.with_custom_target(|t| t.detach());
    }

    fn with_custom_target<R>(&self, f: impl FnOnce(&mut dyn SpotlightTarget) -> R) -> Option<R> {
        let custom = self.target.as_ref().and_then(Target::as_custom)?;
        let Ok(mut target) = custom.try_borrow_mut() else {
            warn!("custom spotlight target is borrowed elsewhere; skipping callback");
            return None;
        };
        Some(f(&mut *target))
    }

    fn request_redraw(&self) {
        if let Some(host) = &self.host {
            host.borrow_mut().request_redraw();
        }
    }
}

impl fmt::Debug for Spotlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spotlight")
            .field("state", &self.state)
            .field("target", &self.target)
            .field("container", &self.container)
            .field("gravity", &self.gravity)
            .field("indicator_frame", &self.indicator_frame)
            .field("message_frame", &self.message_frame)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
