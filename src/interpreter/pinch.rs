//! The drag/left-click path - the one genuinely stateful gesture path.
//!
//! A left pinch is ambiguous until released: a short hold is a click, a
//! long hold is a drag. The decision is therefore made retrospectively on
//! the release transition, never on pinch-detected; while the pinch is
//! held the machine only counts frames and, past the activation threshold,
//! commits to a drag.

use super::state::DragPhase;
use super::{FrameInput, GestureInterpreter};
use crate::types::ActionEvent;

impl GestureInterpreter {
    /// Sustained `LeftPinch` frame: count the hold, activate or continue a
    /// drag.
    pub(super) fn pinch_hold_path(&mut self, _input: &FrameInput, events: &mut Vec<ActionEvent>) {
        if self.drag.is_dragging() {
            // Button already down; the cursor keeps moving elsewhere.
            // No repeated mouse-down.
            events.push(ActionEvent::DragContinue);
            return;
        }

        let frames = self.drag.hold_frames() + 1;
        if frames >= self.settings.drag_activation_frames {
            events.push(ActionEvent::DragStart);
            self.drag = DragPhase::Dragging;
        } else {
            self.drag = DragPhase::Holding { frames };
        }
    }

    /// The candidate stopped being `LeftPinch` this frame.
    ///
    /// A completed drag always ends here, whatever claimed the frame. The
    /// retrospective left click fires only when the frame fell through to
    /// pure tracking (`is_tracking`); a release captured by a
    /// higher-priority gesture discards the tap, per the arbitration order.
    pub(super) fn release_pinch(&mut self, is_tracking: bool, events: &mut Vec<ActionEvent>) {
        match self.drag {
            DragPhase::Dragging => {
                // A completed drag never also produces a click.
                events.push(ActionEvent::DragEnd);
            }
            DragPhase::Holding { frames } if frames > 0 && is_tracking => {
                self.try_left_click(events);
            }
            _ => {}
        }
        self.drag.reset();
    }
}
