//! Drag phase state machine - unified state for the pinch gesture family.
//!
//! The click-versus-drag ambiguity (one pinch gesture, two possible
//! actions) is resolved retrospectively: a short hold becomes a click on
//! release, a long hold becomes a drag while still held. This module makes
//! that an explicit three-state machine instead of inferring it from
//! scattered counters and flags, so every transition is unit-testable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Holding(1)   (first LeftPinch frame)
//! Holding(n) -> Holding(n+1) (sustained LeftPinch, n+1 below activation)
//! Holding(n) -> Dragging   (hold count reaches activation; emits DragStart)
//! Holding(n) -> Idle       (release before activation; emits LeftClick)
//! Dragging -> Dragging     (sustained LeftPinch; emits DragContinue)
//! Dragging -> Idle         (release or hand lost; emits DragEnd)
//! ```

/// Phase of the drag/left-click sub-machine.
///
/// Replaces the previous scattered state:
/// - `drag_hold_counter: u32` -> `DragPhase::Holding { frames }`
/// - `is_dragging: bool` -> `DragPhase::Dragging`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// No pinch in progress
    Idle,

    /// Pinch held, not yet committed to a drag.
    ///
    /// `frames` counts consecutive pinch frames and is always at least 1;
    /// releasing in this phase produces the retrospective left click.
    Holding { frames: u32 },

    /// Mouse button logically down; the pinch became a drag
    Dragging,
}

impl Default for DragPhase {
    fn default() -> Self {
        Self::Idle
    }
}

impl DragPhase {
    /// Returns true while the mouse button is logically held down
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging)
    }

    /// Returns true while a pinch is held but not yet a drag
    pub fn is_holding(&self) -> bool {
        matches!(self, Self::Holding { .. })
    }

    /// Returns true if no pinch is in progress
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Consecutive held frames, zero outside `Holding`
    pub fn hold_frames(&self) -> u32 {
        match self {
            Self::Holding { frames } => *frames,
            _ => 0,
        }
    }

    /// Reset to Idle
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
