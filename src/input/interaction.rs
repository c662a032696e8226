//! Drag state machine and recomputation gating.

use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};

/// Whether the user is currently rotating the camera with the primary
/// button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// No primary-button drag in progress.
    #[default]
    Idle,
    /// Primary button held; camera rotation in progress.
    Rotating,
}

/// Which events trigger a full label recomputation pass.
///
/// The two anchoring variants historically disagreed on gating. The
/// divergence is preserved as explicit configuration rather than
/// normalized to one behavior; [`AnchorPolicy::default_gating`] supplies
/// the pairing each variant shipped with.
///
/// [`AnchorPolicy::default_gating`]: crate::anchor::AnchorPolicy::default_gating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecomputeGating {
    /// Recompute on cursor movement only while the primary button is
    /// held (billboard variant).
    PrimaryDrag,
    /// Recompute on cursor movement while any button is held, and always
    /// on scroll and on button release — zoom and drag-end also change
    /// the camera transform (screen-anchor variant).
    AnyButtonOrWheel,
}

/// Tracks button state and decides when label recomputation runs.
///
/// Processes one event at a time; [`handle_event`](Self::handle_event)
/// returns whether the event triggers a recomputation pass under the
/// configured gating.
#[derive(Debug, Clone)]
pub struct InteractionTracker {
    state: InteractionState,
    gating: RecomputeGating,
    /// Bitmask of currently held buttons, any of which satisfies the
    /// any-button gating.
    held: u8,
}

impl InteractionTracker {
    /// Create a tracker in the [`Idle`](InteractionState::Idle) state
    /// with no buttons held.
    #[must_use]
    pub fn new(gating: RecomputeGating) -> Self {
        Self {
            state: InteractionState::Idle,
            gating,
            held: 0,
        }
    }

    /// Current drag state.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// The gating rule this tracker applies.
    #[must_use]
    pub fn gating(&self) -> RecomputeGating {
        self.gating
    }

    /// Whether any mouse button is currently held.
    #[must_use]
    pub fn any_button_held(&self) -> bool {
        self.held != 0
    }

    /// Apply one event to the state machine and report whether it
    /// triggers a full recomputation pass.
    ///
    /// A release with no preceding press (state already idle, button not
    /// held) leaves the state untouched; external sources legitimately
    /// deliver spurious releases.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::MouseButton { button, pressed: true } => {
                self.held |= button.mask();
                if button == MouseButton::Left && self.state == InteractionState::Idle {
                    self.state = InteractionState::Rotating;
                }
                false
            }
            InputEvent::MouseButton { button, pressed: false } => {
                self.held &= !button.mask();
                if button == MouseButton::Left && self.state == InteractionState::Rotating {
                    self.state = InteractionState::Idle;
                }
                self.gating == RecomputeGating::AnyButtonOrWheel
            }
            InputEvent::CursorMoved { .. } => match self.gating {
                RecomputeGating::PrimaryDrag => self.state == InteractionState::Rotating,
                RecomputeGating::AnyButtonOrWheel => self.any_button_held(),
            },
            InputEvent::Scroll { .. } => self.gating == RecomputeGating::AnyButtonOrWheel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton { button, pressed: true }
    }

    fn release(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton { button, pressed: false }
    }

    const MOVE: InputEvent = InputEvent::CursorMoved { x: 10.0, y: 10.0 };
    const WHEEL: InputEvent = InputEvent::Scroll { delta: 1.0 };

    #[test]
    fn primary_drag_gates_on_rotating_state() {
        let mut tracker = InteractionTracker::new(RecomputeGating::PrimaryDrag);

        assert!(!tracker.handle_event(press(MouseButton::Left)));
        assert_eq!(tracker.state(), InteractionState::Rotating);
        assert!(tracker.handle_event(MOVE));
        assert!(!tracker.handle_event(release(MouseButton::Left)));
        assert_eq!(tracker.state(), InteractionState::Idle);
        assert!(!tracker.handle_event(MOVE));
    }

    #[test]
    fn primary_drag_ignores_secondary_buttons() {
        let mut tracker = InteractionTracker::new(RecomputeGating::PrimaryDrag);

        assert!(!tracker.handle_event(press(MouseButton::Right)));
        assert_eq!(tracker.state(), InteractionState::Idle);
        assert!(!tracker.handle_event(MOVE));
        assert!(!tracker.handle_event(WHEEL));
    }

    #[test]
    fn any_button_gating_fires_on_wheel_and_release_only() {
        let mut tracker = InteractionTracker::new(RecomputeGating::AnyButtonOrWheel);

        assert!(tracker.handle_event(WHEEL));
        assert!(!tracker.handle_event(MOVE));
        assert!(tracker.handle_event(release(MouseButton::Left)));
    }

    #[test]
    fn any_button_gating_recomputes_moves_while_held() {
        let mut tracker = InteractionTracker::new(RecomputeGating::AnyButtonOrWheel);

        assert!(!tracker.handle_event(press(MouseButton::Right)));
        assert!(tracker.handle_event(MOVE));
        assert!(tracker.handle_event(release(MouseButton::Right)));
        assert!(!tracker.handle_event(MOVE));
    }

    #[test]
    fn spurious_release_is_a_no_op_transition() {
        let mut tracker = InteractionTracker::new(RecomputeGating::PrimaryDrag);

        assert!(!tracker.handle_event(release(MouseButton::Left)));
        assert_eq!(tracker.state(), InteractionState::Idle);
        assert!(!tracker.any_button_held());
    }

    #[test]
    fn press_while_rotating_keeps_rotating() {
        let mut tracker = InteractionTracker::new(RecomputeGating::PrimaryDrag);

        assert!(!tracker.handle_event(press(MouseButton::Left)));
        assert!(!tracker.handle_event(press(MouseButton::Left)));
        assert_eq!(tracker.state(), InteractionState::Rotating);
    }
}
