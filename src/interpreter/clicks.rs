//! Debounced click emission.
//!
//! A pinch classification persists for several frames; without a cooldown a
//! single physical pinch would fire a click per frame. Each button carries
//! its own counter, decremented once per processed frame by the
//! interpreter, and a click only fires while its counter is at zero.

use super::{FrameInput, GestureInterpreter};
use crate::types::ActionEvent;

impl GestureInterpreter {
    /// Sustained `RightPinch` frame: emit a debounced right click.
    pub(super) fn right_click_path(&mut self, _input: &FrameInput, events: &mut Vec<ActionEvent>) {
        if self.right_click_cooldown == 0 {
            events.push(ActionEvent::RightClick);
            self.right_click_cooldown = self.settings.click_cooldown_frames;
        }
    }

    /// Retrospective left click on pinch release, if not in cooldown.
    pub(super) fn try_left_click(&mut self, events: &mut Vec<ActionEvent>) {
        if self.left_click_cooldown == 0 {
            events.push(ActionEvent::LeftClick);
            self.left_click_cooldown = self.settings.click_cooldown_frames;
        }
    }
}
