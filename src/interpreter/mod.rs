//! The gesture state machine: per-frame candidates in, committed pointer
//! actions out.
//!
//! This is where the jittery frame-by-frame classification signal is
//! reconciled with the "one gesture = one action" expectation. The
//! interpreter owns all temporal state - cooldown counters, the drag phase,
//! the scroll anchor - and is driven once per processed frame.
//!
//! ## Modules
//!
//! - `state` - the explicit drag phase enum
//! - `pinch` - drag/left-click path and the release transition
//! - `clicks` - debounced click emission
//! - `scroll` - anchor-delta scroll path
//!
//! ## Arbitration
//!
//! Gesture paths are dispatched through [`GESTURE_PATHS`], an ordered table
//! evaluated top-down; the first matching entry wins and all lower-priority
//! paths are skipped for the frame. Keeping the order as data (rather than
//! implicit `if`/`else` order) makes the tie-break visible and testable.

mod clicks;
mod pinch;
mod scroll;
mod state;

pub use state::DragPhase;

use crate::settings::Settings;
use crate::types::{ActionEvent, GestureCandidate, GestureKind};
use tracing::debug;

/// Everything the interpreter needs from one processed frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    pub candidate: GestureCandidate,
    /// Normalized vertical position of the index fingertip, when a hand
    /// was observed. Drives the scroll path.
    pub index_tip_y: Option<f32>,
}

impl FrameInput {
    pub fn new(candidate: GestureCandidate, index_tip_y: Option<f32>) -> Self {
        Self { candidate, index_tip_y }
    }

    /// The no-hand frame.
    pub fn absent() -> Self {
        Self::new(GestureCandidate::absent(), None)
    }
}

type PathHandler = fn(&mut GestureInterpreter, &FrameInput, &mut Vec<ActionEvent>);

/// Priority order of the gesture paths, highest first.
///
/// Right pinch outranks left pinch because the thumb is shared between both
/// pinches; spread comes last. A candidate matching none of these entries
/// falls through to pure tracking.
pub const GESTURE_PATHS: [(GestureKind, PathHandler); 3] = [
    (GestureKind::RightPinch, GestureInterpreter::right_click_path),
    (GestureKind::LeftPinch, GestureInterpreter::pinch_hold_path),
    (GestureKind::Spread, GestureInterpreter::scroll_path),
];

/// The per-session gesture state machine.
///
/// All fields are owned exclusively by the single processing loop; state is
/// created at session start, updated once per processed frame, and cleared
/// by [`GestureInterpreter::reset`].
#[derive(Debug)]
pub struct GestureInterpreter {
    settings: Settings,
    /// Drag/left-click sub-machine phase
    drag: DragPhase,
    /// Frames until the next left click may fire
    left_click_cooldown: u32,
    /// Frames until the next right click may fire
    right_click_cooldown: u32,
    /// Frames until the next scroll tick may fire
    scroll_cooldown: u32,
    /// Index-fingertip y recorded on the previous Spread frame
    scroll_anchor_y: Option<f32>,
}

impl GestureInterpreter {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            drag: DragPhase::Idle,
            left_click_cooldown: 0,
            right_click_cooldown: 0,
            scroll_cooldown: 0,
            scroll_anchor_y: None,
        }
    }

    /// Advance the state machine by one processed frame.
    ///
    /// Returns the committed actions for this frame, in emission order. At
    /// most one of {click, drag-start, drag-continue, scroll} appears; a
    /// `DragEnd` may additionally lead the list on the frame a drag is
    /// released into another gesture.
    pub fn update(&mut self, input: &FrameInput) -> Vec<ActionEvent> {
        let mut events = Vec::new();

        // Cooldowns tick unconditionally, once per processed frame, whether
        // or not the gesture is sustained.
        self.tick_cooldowns();

        let kind = input.candidate.kind;

        // The pinch release transition runs on any frame the candidate is
        // no longer LeftPinch. The retrospective click only fires when the
        // frame falls through to tracking; a drag end is never withheld.
        if kind != GestureKind::LeftPinch {
            self.release_pinch(kind == GestureKind::None, &mut events);
        }

        // Leaving Spread ends the scroll run; the next run re-anchors.
        if kind != GestureKind::Spread {
            self.scroll_anchor_y = None;
        }

        // Priority arbitration: first matching path wins the frame.
        if let Some((_, handler)) = GESTURE_PATHS.iter().find(|(k, _)| *k == kind) {
            handler(self, input, &mut events);
        }

        if !events.is_empty() {
            debug!(?events, ?kind, "gesture events committed");
        }
        events
    }

    /// Zero all counters and clear the drag phase.
    ///
    /// Returns the `DragEnd` the caller must forward when a drag was still
    /// active - no reset path may leave the OS button logically held down.
    pub fn reset(&mut self) -> Option<ActionEvent> {
        let pending = self.drag.is_dragging().then_some(ActionEvent::DragEnd);
        self.drag.reset();
        self.left_click_cooldown = 0;
        self.right_click_cooldown = 0;
        self.scroll_cooldown = 0;
        self.scroll_anchor_y = None;
        pending
    }

    /// Whether the mouse button is logically held down.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Current drag phase, for diagnostics and tests.
    pub fn drag_phase(&self) -> DragPhase {
        self.drag
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the tuning parameters (settings hot-reload).
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Decrement every cooldown counter, saturating at zero.
    fn tick_cooldowns(&mut self) {
        self.left_click_cooldown = self.left_click_cooldown.saturating_sub(1);
        self.right_click_cooldown = self.right_click_cooldown.saturating_sub(1);
        self.scroll_cooldown = self.scroll_cooldown.saturating_sub(1);
    }
}
