//! Fingertip to screen-coordinate mapping and smoothing.
//!
//! Converts a normalized index-fingertip position into a stabilized cursor
//! position in screen pixels. The mapper owns exactly one piece of state -
//! the previous smoothed position - so it stays trivially deterministic:
//! the same `(raw, previous, alpha)` always produces the same output.
//!
//! Mapping steps, in order:
//! 1. Mirror the horizontal axis so moving the hand right moves the cursor
//!    right under a mirrored camera view.
//! 2. Clip into the dead-zone sub-rectangle of the camera frame and
//!    re-normalize, so the full screen is reachable without the hand
//!    visiting the physical frame edges.
//! 3. Scale to screen pixels, times the cursor speed multiplier.
//! 4. Exponential smoothing per axis, with a first-frame bypass (prevents a
//!    slow crawl-in from the origin).
//! 5. Clamp to the screen rectangle.

use crate::profile_scope;
use crate::settings::Settings;
use crate::types::{FrameSize, ScreenPoint};

/// Maps normalized fingertip positions to smoothed screen coordinates.
#[derive(Debug, Default)]
pub struct CursorMapper {
    /// Last emitted position, in screen pixels. Absent before the first
    /// valid frame and after a reset.
    smoothed: Option<(f32, f32)>,
}

impl CursorMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a fingertip position (normalized `[0, 1]` camera coordinates)
    /// to a screen position.
    pub fn map(
        &mut self,
        fingertip: (f32, f32),
        frame: FrameSize,
        screen: FrameSize,
        settings: &Settings,
    ) -> ScreenPoint {
        profile_scope!("map_cursor");

        // Mirror the horizontal axis for the mirrored camera view.
        let mirrored_x = 1.0 - fingertip.0;

        // Dead-zone: clip into [R, W-R] x [R, H-R] in camera pixels, then
        // re-normalize that sub-rectangle back to [0, 1].
        let reduction = settings.frame_reduction;
        let norm_x = renormalize(mirrored_x * frame.width as f32, frame.width as f32, reduction);
        let norm_y = renormalize(fingertip.1 * frame.height as f32, frame.height as f32, reduction);

        // Scale to the destination screen.
        let raw_x = norm_x * screen.width as f32 * settings.cursor_speed;
        let raw_y = norm_y * screen.height as f32 * settings.cursor_speed;

        // Exponential smoothing, first frame bypassed.
        let alpha = settings.smoothing_factor;
        let (sx, sy) = match self.smoothed {
            Some((px, py)) => (
                alpha * raw_x + (1.0 - alpha) * px,
                alpha * raw_y + (1.0 - alpha) * py,
            ),
            None => (raw_x, raw_y),
        };

        // Never leave the screen rectangle.
        let sx = sx.clamp(0.0, (screen.width - 1) as f32);
        let sy = sy.clamp(0.0, (screen.height - 1) as f32);

        self.smoothed = Some((sx, sy));
        ScreenPoint::new(sx.round() as i32, sy.round() as i32)
    }

    /// Forget the previous smoothed position. The next frame bypasses
    /// smoothing again.
    pub fn reset(&mut self) {
        self.smoothed = None;
    }

    /// Last emitted position, if any frame has been mapped.
    pub fn last_position(&self) -> Option<(f32, f32)> {
        self.smoothed
    }
}

/// Clip a camera-pixel coordinate into the usable band `[reduction,
/// extent - reduction]` and re-normalize the band to `[0, 1]`.
fn renormalize(coord: f32, extent: f32, reduction: f32) -> f32 {
    // A reduction of at least half the extent would leave no usable band.
    let usable = (extent - 2.0 * reduction).max(1.0);
    let clipped = coord.clamp(reduction, (extent - reduction).max(reduction));
    ((clipped - reduction) / usable).clamp(0.0, 1.0)
}
