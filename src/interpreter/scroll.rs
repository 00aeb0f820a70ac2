//! Anchor-delta scroll path.
//!
//! While the spread gesture is held, vertical fingertip motion between
//! consecutive frames becomes scroll ticks. The first frame of a run only
//! records the anchor; every subsequent frame compares against it and then
//! re-anchors, whether or not a tick fired. Micro-jitter is filtered by a
//! minimum-motion gate, chatter by the scroll cooldown.

use super::{FrameInput, GestureInterpreter};
use crate::types::ActionEvent;

impl GestureInterpreter {
    /// Sustained `Spread` frame: emit scroll ticks from vertical motion.
    pub(super) fn scroll_path(&mut self, input: &FrameInput, events: &mut Vec<ActionEvent>) {
        let Some(y) = input.index_tip_y else {
            return;
        };

        if let Some(prev_y) = self.scroll_anchor_y {
            // Hand moving up (smaller y) scrolls up: positive ticks.
            let delta = prev_y - y;
            if delta.abs() > self.settings.min_scroll_motion && self.scroll_cooldown == 0 {
                let ticks = (delta * self.settings.scroll_sensitivity).round() as i32;
                if ticks != 0 {
                    events.push(ActionEvent::Scroll { ticks });
                    self.scroll_cooldown = self.settings.scroll_cooldown_frames;
                }
            }
        }

        // Re-anchor every spread frame, tick or no tick.
        self.scroll_anchor_y = Some(y);
    }
}
