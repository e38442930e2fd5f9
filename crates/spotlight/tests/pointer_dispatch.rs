//! Pointer routing: dismissal policies, pass-through, and touch delegation.

use std::cell::RefCell;
use std::rc::Rc;

use spotlight::{
    DismissPolicy, LineIndicator, OverlayState, PointerOutcome, Spotlight, SpotlightConfig,
    SpotlightTarget, Target, TextMessage,
};
use spotlight_core::event::{PointerEvent, PointerKind};
use spotlight_core::geometry::{Rect, Size};

const SCREEN: Rect = Rect::from_ltrb(0, 0, 1000, 2000);
const BUTTON: Rect = Rect::from_ltrb(400, 900, 600, 1100);

// Bottom gravity; message lands at (350, 1150, 300x100).
const ON_TARGET: (i32, i32) = (500, 1000);
const ON_MESSAGE: (i32, i32) = (500, 1200);
const ELSEWHERE: (i32, i32) = (20, 20);

fn visible(config: SpotlightConfig) -> Spotlight {
    let mut overlay = Spotlight::with_views(
        Box::new(TextMessage::new(Size::new(300, 100))),
        Box::new(LineIndicator::new()),
    )
    .config(config);
    overlay.on_layout(SCREEN);
    overlay.set_target(Some(Target::region(BUTTON)));
    overlay.start(None, false);
    assert_eq!(overlay.state(), OverlayState::Visible);
    overlay
}

fn down(at: (i32, i32)) -> PointerEvent {
    PointerEvent::down(at.0, at.1)
}

fn dismissed_by(policy: DismissPolicy, at: (i32, i32)) -> bool {
    let mut overlay = visible(SpotlightConfig::default().dismiss(policy));
    assert!(overlay.message_frame().contains(ON_MESSAGE.0, ON_MESSAGE.1));
    let outcome = overlay.handle_pointer(down(at));
    assert_eq!(outcome, PointerOutcome::Consumed);
    overlay.state() == OverlayState::Dismissed
}

// ═══════════════════════════════════════════════════════════════════════
// Dismissal policies
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn anywhere_dismisses_on_any_touch() {
    assert!(dismissed_by(DismissPolicy::Anywhere, ON_TARGET));
    assert!(dismissed_by(DismissPolicy::Anywhere, ON_MESSAGE));
    assert!(dismissed_by(DismissPolicy::Anywhere, ELSEWHERE));
}

#[test]
fn outside_message_ignores_the_message() {
    assert!(dismissed_by(DismissPolicy::OutsideMessage, ON_TARGET));
    assert!(!dismissed_by(DismissPolicy::OutsideMessage, ON_MESSAGE));
    assert!(dismissed_by(DismissPolicy::OutsideMessage, ELSEWHERE));
}

#[test]
fn target_only_needs_the_target() {
    assert!(dismissed_by(DismissPolicy::TargetOnly, ON_TARGET));
    assert!(!dismissed_by(DismissPolicy::TargetOnly, ON_MESSAGE));
    assert!(!dismissed_by(DismissPolicy::TargetOnly, ELSEWHERE));
}

#[test]
fn message_only_needs_the_message() {
    assert!(!dismissed_by(DismissPolicy::MessageOnly, ON_TARGET));
    assert!(dismissed_by(DismissPolicy::MessageOnly, ON_MESSAGE));
    assert!(!dismissed_by(DismissPolicy::MessageOnly, ELSEWHERE));
}

#[test]
fn moves_and_ups_are_consumed_without_dismissing() {
    let mut overlay = visible(SpotlightConfig::default().dismiss(DismissPolicy::Anywhere));
    for kind in [PointerKind::Move, PointerKind::Up, PointerKind::Cancel] {
        let outcome = overlay.handle_pointer(PointerEvent::new(kind, 10, 10));
        assert_eq!(outcome, PointerOutcome::Consumed);
    }
    assert_eq!(overlay.state(), OverlayState::Visible);
}

#[test]
fn events_after_dismissal_are_ignored() {
    let mut overlay = visible(SpotlightConfig::default().dismiss(DismissPolicy::Anywhere));
    overlay.handle_pointer(down(ELSEWHERE));
    assert_eq!(
        overlay.handle_pointer(down(ELSEWHERE)),
        PointerOutcome::Ignored
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Pass-through
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn pass_through_forwards_target_touches_and_swallows_the_rest() {
    let mut overlay = visible(SpotlightConfig::default().pass_through(true));

    assert_eq!(
        overlay.handle_pointer(down(ON_TARGET)),
        PointerOutcome::PassThrough
    );
    assert_eq!(
        overlay.handle_pointer(down(ELSEWHERE)),
        PointerOutcome::Consumed
    );
    assert_eq!(overlay.state(), OverlayState::Visible);
}

#[test]
fn pass_through_is_inert_for_other_policies() {
    let mut overlay = visible(
        SpotlightConfig::default()
            .pass_through(true)
            .dismiss(DismissPolicy::Anywhere),
    );
    assert_eq!(
        overlay.handle_pointer(down(ON_TARGET)),
        PointerOutcome::Consumed
    );
    assert_eq!(overlay.state(), OverlayState::Dismissed);
}

// ═══════════════════════════════════════════════════════════════════════
// Custom touch handling
// ═══════════════════════════════════════════════════════════════════════

/// A target that swallows touches inside itself and lets the rest through.
struct Slider {
    rect: Rect,
    touches: Vec<PointerEvent>,
}

impl SpotlightTarget for Slider {
    fn bounding_rect(&self) -> Rect {
        self.rect
    }

    fn handles_touch(&self) -> bool {
        true
    }

    fn on_touch(&mut self, event: PointerEvent) -> bool {
        self.touches.push(event);
        self.rect.contains(event.x, event.y)
    }
}

#[test]
fn custom_touch_target_replaces_the_policy() {
    let slider = Rc::new(RefCell::new(Slider {
        rect: BUTTON,
        touches: Vec::new(),
    }));
    let mut overlay = visible(SpotlightConfig::default().dismiss(DismissPolicy::Anywhere));
    overlay.set_target(Some(Target::custom(&slider)));

    assert_eq!(
        overlay.handle_pointer(down(ON_TARGET)),
        PointerOutcome::Consumed
    );
    assert_eq!(
        overlay.handle_pointer(down(ELSEWHERE)),
        PointerOutcome::PassThrough
    );
    assert_eq!(overlay.state(), OverlayState::Visible);
    assert_eq!(slider.borrow().touches.len(), 2);
}

#[test]
fn dropped_custom_target_falls_back_to_policy() {
    let slider = Rc::new(RefCell::new(Slider {
        rect: BUTTON,
        touches: Vec::new(),
    }));
    let mut overlay = visible(SpotlightConfig::default().dismiss(DismissPolicy::Anywhere));
    overlay.set_target(Some(Target::custom(&slider)));
    drop(slider);

    overlay.handle_pointer(down(ELSEWHERE));
    assert_eq!(overlay.state(), OverlayState::Dismissed);
}
